//! Tracing setup for the `opgrid` binary.
//!
//! Usage:
//!   opgrid --debug ...              # Debug logging to stderr
//!   RUST_LOG=opgrid=trace opgrid    # Fine-grained log control

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Logging options taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Log at debug level unless `RUST_LOG` says otherwise.
    pub debug: bool,
}

fn default_filter(config: &LoggingConfig) -> EnvFilter {
    let level = if config.debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for command output.
pub fn init(config: &LoggingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter(config))
        .with_target(config.debug)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
