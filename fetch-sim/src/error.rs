use hyper::http;
use std::{fmt::Display, io};

#[derive(Debug)]
pub enum Error {
    EndpointNotMocked(String),
    MethodNotMocked { endpoint: String, method: String },
    UnsupportedMethod(String),
    NoBody,
    InvalidJson(serde_json::Error),
    InvalidFixture(serde_json::Error),
    IoError(io::Error),
    InvalidHeaderName,
    InvalidHeaderValue,
    HyperError(hyper::Error),
    HttpError(http::Error),
}

impl Error {
    /// `true` when no table entry exists for the requested endpoint or method.
    pub fn is_match_failure(&self) -> bool {
        matches!(
            self,
            Error::EndpointNotMocked(_) | Error::MethodNotMocked { .. }
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidJson(e) | Error::InvalidFixture(e) => Some(e),
            Error::IoError(e) => Some(e),
            Error::HyperError(e) => Some(e),
            Error::HttpError(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EndpointNotMocked(endpoint) => {
                write!(f, "No mock is configured for endpoint {}", endpoint)
            }
            Error::MethodNotMocked { endpoint, method } => write!(
                f,
                "Endpoint {} is mocked, but not for method {}",
                endpoint, method
            ),
            Error::UnsupportedMethod(method) => {
                write!(f, "Unsupported HTTP method in response table: {}", method)
            }
            Error::NoBody => write!(f, "The response has no body"),
            Error::InvalidJson(e) => write!(f, "Invalid JSON body: {}", e),
            Error::InvalidFixture(e) => write!(f, "Invalid response table fixture: {}", e),
            Error::IoError(e) => write!(f, "IoError: {}", e),
            Error::InvalidHeaderName => write!(f, "Invalid header name"),
            Error::InvalidHeaderValue => write!(f, "Invalid header value"),
            Error::HyperError(e) => write!(f, "Hyper error: {}", e),
            Error::HttpError(e) => write!(f, "Http Error: {}", e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::IoError(e)
    }
}

impl From<hyper::header::InvalidHeaderName> for Error {
    fn from(_: hyper::header::InvalidHeaderName) -> Self {
        Error::InvalidHeaderName
    }
}

impl From<hyper::header::InvalidHeaderValue> for Error {
    fn from(_: hyper::header::InvalidHeaderValue) -> Self {
        Error::InvalidHeaderValue
    }
}

impl From<hyper::Error> for Error {
    fn from(e: hyper::Error) -> Self {
        Error::HyperError(e)
    }
}

impl From<http::Error> for Error {
    fn from(e: http::Error) -> Self {
        Error::HttpError(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::InvalidJson(e)
    }
}
