use crate::error::Error;
use hyper::Method;
use serde_json::Value;
use std::{collections::HashMap, fs, path::Path};

/// Method tokens a response table may be keyed by. Comparison is case-sensitive.
pub const SUPPORTED_METHODS: [Method; 6] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::HEAD,
    Method::OPTIONS,
];

/// Result of a two-level exact-match lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    EndpointMissing,
    MethodMissing,
    Found(&'a Value),
}

/// Canned payloads keyed by endpoint identifier, then by HTTP method.
///
/// A table is immutable once built. Use [`ResponseTable::builder`] or load a
/// JSON fixture shaped as `{ "<endpoint>": { "<METHOD>": <payload> } }`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseTable {
    endpoints: HashMap<String, HashMap<String, Value>>,
}

impl ResponseTable {
    pub fn builder() -> ResponseTableBuilder {
        ResponseTableBuilder::new()
    }

    pub fn from_json_str(fixture: &str) -> Result<Self, Error> {
        let endpoints: HashMap<String, HashMap<String, Value>> =
            serde_json::from_str(fixture).map_err(Error::InvalidFixture)?;

        let mut builder = Self::builder();
        for (endpoint, methods) in endpoints {
            for (method, payload) in methods {
                builder.mock(endpoint.as_str(), method, payload);
            }
        }

        builder.build()
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let fixture = fs::read_to_string(path)?;
        Self::from_json_str(&fixture)
    }

    pub fn lookup(&self, endpoint: &str, method: &str) -> Lookup<'_> {
        match self.endpoints.get(endpoint) {
            None => Lookup::EndpointMissing,
            Some(methods) => match methods.get(method) {
                None => Lookup::MethodMissing,
                Some(payload) => Lookup::Found(payload),
            },
        }
    }

    pub fn contains_endpoint(&self, endpoint: &str) -> bool {
        self.endpoints.contains_key(endpoint)
    }

    /// Methods mocked for `endpoint`, sorted.
    pub fn methods(&self, endpoint: &str) -> Vec<&str> {
        let mut methods: Vec<&str> = self
            .endpoints
            .get(endpoint)
            .map(|methods| methods.keys().map(String::as_str).collect())
            .unwrap_or_default();
        methods.sort_unstable();
        methods
    }

    /// Number of mocked endpoints.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

pub struct ResponseTableBuilder {
    entries: Vec<(String, String, Value)>,
}

impl ResponseTableBuilder {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn mock<S1: Into<String>, S2: Into<String>, V: Into<Value>>(
        &mut self,
        endpoint: S1,
        method: S2,
        payload: V,
    ) -> &mut Self {
        self.entries
            .push((endpoint.into(), method.into(), payload.into()));
        self
    }

    pub fn get<S: Into<String>, V: Into<Value>>(&mut self, endpoint: S, payload: V) -> &mut Self {
        self.mock(endpoint, Method::GET.as_str(), payload)
    }

    pub fn post<S: Into<String>, V: Into<Value>>(&mut self, endpoint: S, payload: V) -> &mut Self {
        self.mock(endpoint, Method::POST.as_str(), payload)
    }

    pub fn build(self) -> Result<ResponseTable, Error> {
        let mut endpoints: HashMap<String, HashMap<String, Value>> = HashMap::new();

        for (endpoint, method, payload) in self.entries {
            if !SUPPORTED_METHODS.iter().any(|m| m.as_str() == method) {
                return Err(Error::UnsupportedMethod(method));
            }

            endpoints
                .entry(endpoint)
                .or_default()
                .insert(method, payload);
        }

        Ok(ResponseTable { endpoints })
    }
}

impl Default for ResponseTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
