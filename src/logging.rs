//! File logging.
//!
//! The terminal belongs to the UI, so log records go to a file.

use crate::config::Config;
use anyhow::{Context, Result};
use simplelog::{LevelFilter, WriteLogger};
use std::fs::{self, OpenOptions};

/// Parse a configured level, falling back to `Info` for unknown names.
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Install the global logger.
///
/// # Details
/// Appends to the configured log file. A level of `off` installs nothing.
pub fn init(config: &Config) -> Result<()> {
    let level = parse_level(&config.log_level);
    if level == LevelFilter::Off {
        return Ok(());
    }

    let path = config.log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    WriteLogger::init(level, simplelog::Config::default(), file)
        .context("Failed to initialize logger")?;
    log::info!("logging at {} to {}", level, path.display());
    Ok(())
}
