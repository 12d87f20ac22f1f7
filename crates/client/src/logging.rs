//! Logging setup for the solver binaries.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber filtered by `filter` (`EnvFilter` syntax).
pub fn setup_logging(filter: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}
