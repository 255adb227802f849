//! Constants used throughout the crate
//!
//! This module centralizes file names, defaults and log messages so the
//! configuration and logging layers agree on them.

// Configuration lookup
/// Configuration file looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "datestrings.toml";
/// Directory under the platform config dir holding `config.toml`
pub const CONFIG_DIR_NAME: &str = "datestrings";
pub const CONFIG_DIR_FILE_NAME: &str = "config.toml";

// Defaults
pub const DEFAULT_CULTURE: &str = "invariant";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Logging
/// Timestamp prefix of every log line
pub const LOG_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

// Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const CONFIG_HEADER: &str = "# datestrings Configuration File";
