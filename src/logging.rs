//! Logging setup using `tracing` and `tracing-subscriber`
//!
//! The TUI owns the terminal, so events are only written when a log file is
//! requested. The filter comes from `RUST_LOG` and falls back to `info`.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info";

/// Build the event filter from the environment
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a subscriber writing to `log_file`; does nothing without one
///
/// # Errors
///
/// Returns an error if the file cannot be created or a global subscriber is
/// already installed.
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}
