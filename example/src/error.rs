use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    EmptyCart,
    UnsuccessfulResponse(u16),
    SerializationError(serde_json::Error),
    FetchError(fetch_sim::Error),
}

impl std::error::Error for Error {}

impl From<fetch_sim::Error> for Error {
    fn from(e: fetch_sim::Error) -> Self {
        Error::FetchError(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyCart => write!(f, "The cart is empty"),
            Error::UnsuccessfulResponse(status) => {
                write!(f, "The API responded with status {}", status)
            }
            Error::SerializationError(e) => write!(f, "{}", e.to_string()),
            Error::FetchError(e) => write!(f, "{}", e.to_string()),
        }
    }
}
