//! Error types for the parsing and conversion helpers.

/// Errors surfaced by the explicit-failure entry points.
///
/// Most parsing functions never return this: they fall back to a caller
/// supplied default instead. Only [`crate::parser::parse_date`],
/// [`crate::instant::from_epoch_seconds`], culture lookup and
/// [`crate::serializer::Serializer::from_config`] report it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeError {
    #[error("String '{0}' was not recognized as a valid date/time")]
    Format(String),

    #[error("Epoch seconds out of range: {0}")]
    OutOfRange(i64),

    #[error("Invalid format pattern: '{0}'")]
    InvalidPattern(String),

    #[error("Unknown culture: {0}")]
    UnknownCulture(String),
}

pub type Result<T> = std::result::Result<T, DateTimeError>;
