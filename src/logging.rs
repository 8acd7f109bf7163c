//! Diagnostic logging for the checks
//!
//! stdout belongs to the monitoring system, so everything here goes to
//! stderr. Set `RUST_LOG=debug` to see what a check is doing.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "error";

/// Install a stderr subscriber filtered by `RUST_LOG`
///
/// Does nothing if a subscriber is already installed.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
