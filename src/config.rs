//! Configuration management for datestrings
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_DIR_FILE_NAME, CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, CONFIG_HEADER, DEFAULT_CULTURE,
    DEFAULT_LOG_LEVEL,
};
use crate::culture::Culture;
use crate::formats::{self, DEFAULT_DATE_FORMAT, FULL_FORMAT};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub formats: FormatsConfig,
    pub parsing: ParsingConfig,
    pub logging: LoggingConfig,
}

/// Output and custom input patterns, in chrono strftime syntax
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatsConfig {
    /// Pattern used by `format_full`
    pub full: String,
    /// Pattern used by `format_date_only`
    pub date: String,
    /// Extra pattern tried by `parse_date_only` (empty = none)
    pub custom_date: String,
    /// Pattern for `parse_timestamp_or_general` (empty = general parse)
    pub custom_datetime: String,
}

/// Parsing behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Tag timestamp and general parse results as local instead of UTC
    pub assume_local: bool,
    /// Culture used to read month names in custom patterns
    /// Options: "invariant", "fr", "de"
    pub culture: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Maximum level: off, error, warn, info, debug, trace
    pub level: String,
    /// Log file path (empty = stderr)
    pub file: String,
}

impl Default for FormatsConfig {
    fn default() -> Self {
        Self {
            full: FULL_FORMAT.to_string(),
            date: DEFAULT_DATE_FORMAT.to_string(),
            custom_date: String::new(),
            custom_datetime: String::new(),
        }
    }
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            assume_local: false,
            culture: DEFAULT_CULTURE.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(CONFIG_DIR_NAME).join(CONFIG_DIR_FILE_NAME);
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.validate_formats()?;

        if let Err(e) = Culture::from_name(&self.parsing.culture) {
            anyhow::bail!("Invalid culture: {}", e);
        }

        if let Err(e) = self.logging.level.parse::<log::LevelFilter>() {
            anyhow::bail!("Invalid logging level '{}': {}", self.logging.level, e);
        }

        Ok(())
    }

    fn validate_formats(&self) -> Result<()> {
        let sample = chrono::NaiveDate::from_ymd_opt(2025, 1, 31)
            .and_then(|date| date.and_hms_opt(13, 45, 30))
            .context("Invalid sample date")?;

        if formats::try_format(&sample, &self.formats.full).is_none() {
            anyhow::bail!("Invalid full format '{}'", self.formats.full);
        }

        // The date pattern must read back what it writes
        let written = match formats::try_format(&sample, &self.formats.date) {
            Some(written) => written,
            None => anyhow::bail!("Invalid date format '{}'", self.formats.date),
        };
        match chrono::NaiveDate::parse_from_str(&written, &self.formats.date) {
            Ok(parsed) if parsed == sample.date() => {}
            Ok(parsed) => anyhow::bail!(
                "date format '{}' does not round-trip: wrote '{}', read {}",
                self.formats.date,
                written,
                parsed
            ),
            Err(e) => anyhow::bail!("Invalid date format '{}': {}", self.formats.date, e),
        }

        for (name, pattern) in [
            ("custom_date", &self.formats.custom_date),
            ("custom_datetime", &self.formats.custom_datetime),
        ] {
            if !pattern.is_empty() && !formats::is_valid_pattern(pattern) {
                anyhow::bail!("Invalid {} format '{}'", name, pattern);
            }
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "{}\n# Generated on {}\n\n",
            CONFIG_HEADER,
            chrono::Local::now().format(DEFAULT_DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_DIR_FILE_NAME))
    }
}
