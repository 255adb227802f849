//! Configuration-driven front end to the formatting and parsing functions.

use crate::config::Config;
use crate::culture::Culture;
use crate::error::{DateTimeError, Result};
use crate::formats::{self, DEFAULT_DATE_FORMAT, FULL_FORMAT};
use crate::instant::Instant;
use crate::parser;

/// Formats and parses with the patterns, culture and `assume_local` flag of a [`Config`].
///
/// `Serializer::default()` behaves exactly like the free functions in
/// [`crate::parser`] and [`crate::formats`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Serializer {
    full_format: String,
    date_format: String,
    custom_date_format: Option<String>,
    custom_datetime_format: Option<String>,
    assume_local: bool,
    culture: Culture,
}

impl Default for Serializer {
    fn default() -> Self {
        Self {
            full_format: FULL_FORMAT.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            custom_date_format: None,
            custom_datetime_format: None,
            assume_local: false,
            culture: Culture::invariant(),
        }
    }
}

impl Serializer {
    pub fn from_config(config: &Config) -> Result<Self> {
        let patterns = &config.formats;
        for pattern in [&patterns.full, &patterns.date] {
            if !formats::is_valid_pattern(pattern) {
                return Err(DateTimeError::InvalidPattern(pattern.clone()));
            }
        }

        Ok(Self {
            full_format: patterns.full.clone(),
            date_format: patterns.date.clone(),
            custom_date_format: optional_pattern(&patterns.custom_date)?,
            custom_datetime_format: optional_pattern(&patterns.custom_datetime)?,
            assume_local: config.parsing.assume_local,
            culture: Culture::from_name(&config.parsing.culture)?,
        })
    }

    pub fn culture(&self) -> &Culture {
        &self.culture
    }

    pub fn assume_local(&self) -> bool {
        self.assume_local
    }

    /// Falls back to the canonical layout if the configured one cannot be rendered
    pub fn format_full(&self, instant: &Instant) -> String {
        formats::format_with(instant, &self.full_format).unwrap_or_else(|| formats::format_full(instant))
    }

    pub fn format_date_only(&self, instant: &Instant) -> String {
        formats::format_with(instant, &self.date_format).unwrap_or_else(|| formats::format_date_only(instant))
    }

    pub fn parse_date_only(&self, input: &str, default: Instant) -> Instant {
        match &self.custom_date_format {
            Some(pattern) => parser::parse_date_only_with(input, default, pattern),
            None => parser::parse_date_only(input, default),
        }
    }

    pub fn parse_full_date_time(&self, input: &str, default: Instant) -> Instant {
        parser::parse_full_date_time(input, default)
    }

    pub fn parse_timestamp_or_general(&self, input: &str, default: Instant) -> Instant {
        let pattern = self.custom_datetime_format.as_deref().unwrap_or("");
        parser::parse_timestamp_or_general_with(input, default, pattern, &self.culture, self.assume_local)
    }
}

fn optional_pattern(pattern: &str) -> Result<Option<String>> {
    if pattern.is_empty() {
        return Ok(None);
    }
    if !formats::is_valid_pattern(pattern) {
        return Err(DateTimeError::InvalidPattern(pattern.to_string()));
    }
    Ok(Some(pattern.to_string()))
}
