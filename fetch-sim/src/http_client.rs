use crate::{error::Error, fetch::Fetch, CallConfiguration, FetchResponse, RequestData};
use async_trait::async_trait;
use hyper::{
    body,
    header::{HeaderName, HeaderValue},
    Body, HeaderMap, Request,
};
use hyper_tls::HttpsConnector;
use indexmap::IndexMap;
use tracing::debug;

/// A [`Fetch`] that performs the call over the network.
///
/// Transport failures are rejected; every HTTP response resolves, whatever its
/// status.
#[derive(Debug)]
pub struct NetworkFetch {}

impl NetworkFetch {
    pub fn new() -> Self {
        Self {}
    }

    fn build_request(request_data: RequestData) -> Result<Request<Body>, Error> {
        let mut request_builder = Request::builder()
            .uri(request_data.endpoint.as_str())
            .method(request_data.method.as_str());

        // an invalid uri or method surfaces from `body` below
        if let Some(headers_mut) = request_builder.headers_mut() {
            put_request_headers(headers_mut, &request_data.headers)?;
        }

        Ok(request_builder.body(request_data.body.unwrap_or_default().into())?)
    }
}

#[async_trait]
impl Fetch for NetworkFetch {
    async fn fetch(
        &self,
        endpoint: &str,
        configuration: CallConfiguration,
    ) -> Result<FetchResponse, Error> {
        let request_data = configuration.into_request_data(endpoint);
        debug!(endpoint, method = %request_data.method, "Sending request");

        let request = Self::build_request(request_data)?;

        let client = hyper::Client::builder().build(HttpsConnector::new());

        let response = client.request(request).await?;

        let status = response.status();
        let headers = response_headers(response.headers());
        let body = body::to_bytes(response.into_body()).await?;
        let body: String = String::from_utf8_lossy(&body).into();

        debug!(endpoint, status = status.as_u16(), "Received response");

        Ok(FetchResponse::from_network(status, headers, body))
    }
}

impl Default for NetworkFetch {
    fn default() -> Self {
        Self::new()
    }
}

fn put_request_headers(
    header_map: &mut HeaderMap,
    headers: &IndexMap<String, String>,
) -> Result<(), Error> {
    for (name, value) in headers {
        header_map.append(
            HeaderName::from_bytes(name.as_bytes())?,
            HeaderValue::from_str(value)?,
        );
    }

    Ok(())
}

/// Flattens response headers the way a fetch `Headers` object reads them:
/// repeated names are joined with `", "`, values that aren't UTF-8 are decoded lossily.
fn response_headers(header_map: &HeaderMap) -> IndexMap<String, String> {
    let mut headers: IndexMap<String, String> = IndexMap::new();

    for (name, value) in header_map {
        let value = String::from_utf8_lossy(value.as_bytes());

        match headers.get_mut(name.as_str()) {
            Some(joined) => {
                joined.push_str(", ");
                joined.push_str(&value);
            }
            None => {
                headers.insert(String::from(name.as_str()), value.into_owned());
            }
        }
    }

    headers
}
