//! Logging setup on top of the `log` facade.
//!
//! The parsing functions only emit `log` records. Applications that want to
//! see them install a `fern` dispatcher built from [`LoggingConfig`].

use crate::config::LoggingConfig;
use crate::constants::LOG_TIMESTAMP_FORMAT;
use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;

/// Level to log at; `Off` when logging is disabled
pub fn level_filter(config: &LoggingConfig) -> Result<LevelFilter> {
    if !config.enabled {
        return Ok(LevelFilter::Off);
    }
    config
        .level
        .parse::<LevelFilter>()
        .with_context(|| format!("Invalid logging level: {}", config.level))
}

/// Build a dispatcher writing `[HH:MM:SS.mmm LEVEL target] message` lines
pub fn dispatch(config: &LoggingConfig) -> Result<fern::Dispatch> {
    let base = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format(LOG_TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level_filter(config)?);

    if config.file.is_empty() {
        return Ok(base.chain(std::io::stderr()));
    }

    let file = fern::log_file(&config.file).with_context(|| format!("Failed to open log file: {}", config.file))?;
    Ok(base.chain(file))
}

/// Install the dispatcher as the global logger. Fails if one is already set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    dispatch(config)?
        .apply()
        .context("Failed to install global logger")
}
