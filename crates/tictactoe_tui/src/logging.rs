//! Tracing subscriber setup.

use crate::config::TuiConfig;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Builds the filter from RUST_LOG, falling back to the configured one.
fn env_filter(config: &TuiConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to a file so the interactive board keeps the terminal.
pub fn init_file(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    // Don't panic if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Logs to stderr, leaving stdout to the line-oriented front ends.
pub fn init_stderr(config: &TuiConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}
