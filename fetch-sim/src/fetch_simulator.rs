use crate::{
    error::Error,
    fetch::Fetch,
    response_table::{Lookup, ResponseTable},
    CallConfiguration, FetchResponse, RequestData,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::task;
use tracing::debug;

/// A drop-in [`Fetch`] that answers from a [`ResponseTable`] instead of the network.
///
/// Clones share the same table. The table is never mutated, so calls may run
/// concurrently without coordination.
#[derive(Debug, Clone)]
pub struct FetchSimulator {
    table: Arc<ResponseTable>,
}

impl FetchSimulator {
    pub fn new(table: ResponseTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    pub fn table(&self) -> &ResponseTable {
        &self.table
    }

    pub async fn simulate_fetch(
        &self,
        endpoint: &str,
        configuration: CallConfiguration,
    ) -> Result<FetchResponse, Error> {
        let request_data = configuration.into_request_data(endpoint);
        Self::trace_request(&request_data);

        // settle on the next scheduler turn, never inline
        task::yield_now().await;

        let result = self.settle(&request_data);
        let outcome = match &result {
            Err(_) => "match-failure",
            Ok(response) if !response.ok() => "simulated-failure",
            Ok(_) => "success",
        };
        debug!(endpoint = %request_data.endpoint, outcome, "Mocked fetch settled");

        result
    }

    fn settle(&self, request_data: &RequestData) -> Result<FetchResponse, Error> {
        match self
            .table
            .lookup(&request_data.endpoint, &request_data.method)
        {
            Lookup::EndpointMissing => {
                debug!(endpoint = %request_data.endpoint, "Endpoint not mocked");
                Err(Error::EndpointNotMocked(request_data.endpoint.clone()))
            }
            Lookup::MethodMissing => {
                debug!(
                    endpoint = %request_data.endpoint,
                    method = %request_data.method,
                    "Endpoint method not mocked"
                );
                Err(Error::MethodNotMocked {
                    endpoint: request_data.endpoint.clone(),
                    method: request_data.method.clone(),
                })
            }
            Lookup::Found(payload) => {
                Self::trace_match(request_data);

                if request_data.fail {
                    Ok(FetchResponse::simulated_failure())
                } else {
                    Ok(FetchResponse::simulated_success(payload.clone()))
                }
            }
        }
    }

    fn trace_request(request_data: &RequestData) {
        debug!(endpoint = %request_data.endpoint, "Mocked fetch intercepted");
        debug!(method = %request_data.method, "Method");
    }

    fn trace_match(request_data: &RequestData) {
        debug!(
            endpoint = %request_data.endpoint,
            method = %request_data.method,
            "Endpoint found"
        );

        for (name, value) in &request_data.headers {
            debug!(header = %name, value = %value, "Header");
        }

        if let Some(body) = &request_data.body {
            debug!(body_len = body.len(), "Body");
        }

        let expected = if request_data.fail { "fail" } else { "success" };
        debug!(expected, "Expected result");
    }
}

#[async_trait]
impl Fetch for FetchSimulator {
    async fn fetch(
        &self,
        endpoint: &str,
        configuration: CallConfiguration,
    ) -> Result<FetchResponse, Error> {
        self.simulate_fetch(endpoint, configuration).await
    }
}
