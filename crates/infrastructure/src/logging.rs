//! Tracing subscriber setup for the host.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Builds the filter: `RUST_LOG` wins, then `fallback`, then `info`.
#[must_use]
pub fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber, writing to stderr.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(fallback: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(build_filter(fallback))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
}
