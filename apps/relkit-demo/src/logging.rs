//! Logging bootstrap.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber once; `RUST_LOG` wins over the
/// configured level.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
