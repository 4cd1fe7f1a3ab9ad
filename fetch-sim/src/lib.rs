mod call_configuration;
mod data;
mod diagnostics;
mod error;
mod fetch;
mod fetch_simulator;
mod http_client;
mod response;
mod response_table;

pub use call_configuration::CallConfiguration;
pub use call_configuration::DEFAULT_METHOD;
pub use data::RequestData;
pub use diagnostics::init_diagnostics;
pub use diagnostics::LOG_JSON_ENV;
pub use error::Error;
pub use fetch::Fetch;
pub use fetch_sim_codegen::simulated_fetch_test;
pub use fetch_simulator::FetchSimulator;
pub use http_client::NetworkFetch;
pub use response::FetchResponse;
pub use response_table::{Lookup, ResponseTable, ResponseTableBuilder, SUPPORTED_METHODS};

#[doc(hidden)]
pub mod __private {
    pub use tokio;
}
