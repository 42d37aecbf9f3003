//! Diagnostic logging to disk.
//!
//! The terminal belongs to ratatui, so tracing output goes to a daily
//! file under the configured log directory (default:
//! `<data_dir>/eventdeck/logs/`). Disabled by default.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("eventdeck")
        .join("logs")
}

/// Install the global tracing subscriber. No-op when logging is
/// disabled in the config.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let log_dir = config.log_dir.clone().unwrap_or_else(default_log_dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let date = chrono::Local::now().format("%Y-%m-%d");
    let path = log_dir.join(format!("eventdeck_{date}.log"));
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
