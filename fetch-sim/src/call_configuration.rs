use crate::data::RequestData;
use indexmap::IndexMap;

pub const DEFAULT_METHOD: &str = "GET";
pub const DEFAULT_CONTENT_TYPE: (&str, &str) = ("content-type", "application/json");

/// Per-call parameters. Every field left unset falls back to its default when
/// the call is made; a field that is set replaces the default as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallConfiguration {
    method: Option<String>,
    headers: Option<IndexMap<String, String>>,
    body: Option<String>,
    fail: bool,
}

impl CallConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_method<S: Into<String>>(mut self, method: S) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Adds a header to the caller's header map. The first call starts an empty
    /// map, so the default content-type header is no longer sent.
    pub fn with_header<S1: Into<String>, S2: Into<String>>(mut self, name: S1, value: S2) -> Self {
        self.headers
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_headers<K, V, I>(mut self, headers: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.headers = Some(
            headers
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    pub fn with_body<S: Into<String>>(mut self, body: S) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_fail(mut self, fail: bool) -> Self {
        self.fail = fail;
        self
    }

    /// Requests a simulated remote error for this call.
    pub fn failing(self) -> Self {
        self.with_fail(true)
    }

    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    pub fn headers(&self) -> Option<&IndexMap<String, String>> {
        self.headers.as_ref()
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn fail(&self) -> bool {
        self.fail
    }

    pub fn into_request_data<S: Into<String>>(self, endpoint: S) -> RequestData {
        RequestData {
            endpoint: endpoint.into(),
            method: self.method.unwrap_or_else(|| String::from(DEFAULT_METHOD)),
            headers: self.headers.unwrap_or_else(default_headers),
            body: self.body,
            fail: self.fail,
        }
    }
}

fn default_headers() -> IndexMap<String, String> {
    let (name, value) = DEFAULT_CONTENT_TYPE;
    let mut headers = IndexMap::new();
    headers.insert(String::from(name), String::from(value));
    headers
}
