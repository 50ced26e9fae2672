//! Structured logging setup for the tracing ecosystem.

use tracing_subscriber::EnvFilter;

use crate::errors::{Error, Result};

/// Initialize the global tracing subscriber.
///
/// The filter comes from `CREDSCRUB_LOG_FILTER` (standard `EnvFilter`
/// syntax, default `info`); setting `CREDSCRUB_LOG_FORMAT=json` switches
/// to JSON output. Returns an error if a global subscriber is already
/// installed.
pub fn init_tracing() -> Result<()> {
    let filter =
        EnvFilter::try_from_env("CREDSCRUB_LOG_FILTER").unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("CREDSCRUB_LOG_FORMAT").map(|v| v == "json").unwrap_or(false);

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if json { builder.json().try_init() } else { builder.try_init() };

    result.map_err(|e| Error::config(format!("Failed to initialize tracing: {}", e)))
}
