//! datestrings - date/time string helpers
//!
//! This library converts free-form strings into date/time values by trying
//! a fixed, ordered list of layouts, and converts between date/time values
//! and Unix timestamps.
//!
//! # Modules
//!
//! * [`parser`] - Layered parsing with default, `Option` and error tiers
//! * [`formats`] - The recognised layouts and the canonical output formats
//! * [`instant`] - The [`Instant`] value type and epoch conversions
//! * [`culture`] - Culture-specific month names for custom patterns
//! * [`serializer`] - A [`Config`]-driven front end
//! * [`config`] - Configuration loading and validation
//! * [`logger`] - `fern` logging setup

/// Configuration module for managing parsing and formatting settings
pub mod config;

/// Crate constants and default values
pub mod constants;

/// Month-name tables used by custom-pattern parsing
pub mod culture;

/// Error types
pub mod error;

/// Canonical layouts and formatting
pub mod formats;

/// Date/time value type and Unix timestamp conversions
pub mod instant;

/// Logging utilities
pub mod logger;

/// Ordered fallback parsing
pub mod parser;

/// Configured formatting and parsing
pub mod serializer;

pub use config::Config;
pub use culture::{Culture, FormatProvider, InvariantCulture};
pub use error::DateTimeError;
pub use formats::{format_date_only, format_full, DEFAULT_DATE_FORMAT, FORMAT_LIST, FULL_FORMAT};
pub use instant::{from_epoch_seconds, to_epoch_seconds, unix_epoch, Instant, Kind, Timestamp};
pub use parser::{
    parse_date, parse_date_only, parse_date_only_with, parse_full_date_time, parse_timestamp_or_general,
    parse_timestamp_or_general_with, try_parse_date, try_parse_full_date_time,
};
pub use serializer::Serializer;
