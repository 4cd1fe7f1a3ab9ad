//! Diagnostic output for test runs.
//!
//! Every simulated call is traced at `debug` level under the `fetch_sim` target.
//! Nothing here affects how a call settles.

use tracing_subscriber::{fmt, EnvFilter};

/// Set this to emit diagnostics as JSON lines instead of plain text.
pub const LOG_JSON_ENV: &str = "FETCH_SIM_LOG_JSON";

const DEFAULT_FILTER: &str = "fetch_sim=debug";

/// Installs a global subscriber that writes through the test harness.
///
/// The filter is read from `RUST_LOG`, falling back to `fetch_sim=debug`.
/// Calling this more than once is harmless: only the first subscriber wins.
pub fn init_diagnostics() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = if std::env::var(LOG_JSON_ENV).is_ok() {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init()
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init()
    };

    // already installed by an earlier test in the same process
    let _ = result;
}
