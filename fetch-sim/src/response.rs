use crate::{call_configuration::DEFAULT_CONTENT_TYPE, error::Error};
use hyper::StatusCode;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::task;

#[derive(Debug, Clone, PartialEq)]
enum ResponseBody {
    Json(Value),
    Text(String),
}

/// The resolved result of a fetch call.
///
/// Resolving does not mean the remote side succeeded: check [`FetchResponse::ok`]
/// the same way a 2xx is told apart from any other status.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    status: StatusCode,
    headers: IndexMap<String, String>,
    body: Option<ResponseBody>,
}

impl FetchResponse {
    pub(crate) fn simulated_success(payload: Value) -> Self {
        let (name, value) = DEFAULT_CONTENT_TYPE;
        let mut headers = IndexMap::new();
        headers.insert(String::from(name), String::from(value));

        Self {
            status: StatusCode::OK,
            headers,
            body: Some(ResponseBody::Json(payload)),
        }
    }

    pub(crate) fn simulated_failure() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            headers: IndexMap::new(),
            body: None,
        }
    }

    pub(crate) fn from_network(
        status: StatusCode,
        headers: IndexMap<String, String>,
        body: String,
    ) -> Self {
        Self {
            status,
            headers,
            body: Some(ResponseBody::Text(body)),
        }
    }

    pub fn ok(&self) -> bool {
        self.status.is_success()
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &IndexMap<String, String> {
        &self.headers
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Resolves to the JSON body. Fails with [`Error::NoBody`] on a response
    /// that carries none.
    pub async fn json(&self) -> Result<Value, Error> {
        task::yield_now().await;

        match &self.body {
            Some(ResponseBody::Json(value)) => Ok(value.clone()),
            Some(ResponseBody::Text(text)) => Ok(serde_json::from_str(text)?),
            None => Err(Error::NoBody),
        }
    }

    pub async fn json_as<T: DeserializeOwned>(&self) -> Result<T, Error> {
        Ok(serde_json::from_value(self.json().await?)?)
    }

    pub fn text(&self) -> Result<String, Error> {
        match &self.body {
            Some(ResponseBody::Json(value)) => Ok(value.to_string()),
            Some(ResponseBody::Text(text)) => Ok(text.clone()),
            None => Err(Error::NoBody),
        }
    }
}
