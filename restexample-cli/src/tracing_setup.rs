//! Tracing setup for rest-service-example
//!
//! Usage:
//!   RESTEXAMPLE_LOGLEVEL=info rest-service-example     # Service log level
//!   RUST_LOG=restexample_server=trace rest-service-example  # Fine-grained log control
//!
//! Environment variables:
//!   RUST_LOG                          # Overrides the configured loglevel when set

use anyhow::{anyhow, Result};
use restexample_server::LogLevel;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

/// Timestamp layout for every log line
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Tracing configuration options
#[derive(Debug, Clone, Copy)]
pub struct TracingConfig {
    /// Level used when RUST_LOG is not set
    pub level: LogLevel,
}

/// Build the filter: RUST_LOG wins, otherwise the configured level.
fn filter(config: &TracingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.as_str()))
}

/// Initialize console tracing. Fails if a global subscriber is already set.
pub fn init(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_target(matches!(config.level, LogLevel::Trace | LogLevel::Debug))
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
