use crate::{error::Error, CallConfiguration, FetchResponse};
use async_trait::async_trait;
use std::fmt::Debug;

/// The network-call primitive that client code is written against.
///
/// A call either resolves to a [`FetchResponse`] (successful or not) or is
/// rejected with an [`Error`].
#[async_trait]
pub trait Fetch: Debug + Send + Sync {
    async fn fetch(
        &self,
        endpoint: &str,
        configuration: CallConfiguration,
    ) -> Result<FetchResponse, Error>;
}
