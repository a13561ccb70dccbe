//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "IPWHO_LOG";

const DEFAULT_FILTER: &str = "error";

/// Install a stderr `fmt` subscriber filtered by `IPWHO_LOG`.
///
/// Standard output is left to rendered results. Calling this more than once
/// is harmless; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
