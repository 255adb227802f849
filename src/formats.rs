//! The recognised string layouts and the canonical output formats.
//!
//! All patterns use chrono's strftime syntax. [`FORMAT_LIST`] is the single
//! source of truth for the date+time layouts accepted by the exact parsers;
//! its order decides how ambiguous strings such as `01/02/2020` are read.

use crate::instant::Instant;
use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::Write;

/// Date-only layout used by [`format_date_only`] and the first date parse step
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date+time layouts, tried in order; day-first layouts win over year-first ones
pub const FORMAT_LIST: [&str; 12] = [
    "%d/%m/%Y %H:%M:%S",
    "%d-%m-%Y %H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M",
    "%d.%m.%Y %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y.%m.%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%d %H:%M",
    "%Y.%m.%d %H:%M",
];

/// Canonical full layout (day/month/year hour:minute:second)
pub const FULL_FORMAT: &str = FORMAT_LIST[0];

/// Format an instant with the canonical full layout
///
/// # Arguments
///
/// * `instant` - The value to render; its kind is not shown
///
/// # Returns
///
/// The wall-clock value as `dd/mm/yyyy HH:MM:SS`, e.g. `01/02/2020 10:00:00`
pub fn format_full(instant: &Instant) -> String {
    instant.naive().format(FULL_FORMAT).to_string()
}

/// Format the calendar day of an instant
///
/// # Arguments
///
/// * `instant` - The value to render; the time-of-day is ignored
///
/// # Returns
///
/// The date as `yyyy-mm-dd`, e.g. `2020-02-01`
pub fn format_date_only(instant: &Instant) -> String {
    instant.naive().format(DEFAULT_DATE_FORMAT).to_string()
}

/// Format with an arbitrary pattern, or `None` if chrono cannot render it
pub fn format_with(instant: &Instant, pattern: &str) -> Option<String> {
    try_format(&instant.naive(), pattern)
}

/// Render `naive` with `pattern`. Offset specifiers (`%z`, `%Z`) cannot be
/// rendered from a naive value and yield `None`.
pub fn try_format(naive: &NaiveDateTime, pattern: &str) -> Option<String> {
    if !is_valid_pattern(pattern) {
        return None;
    }
    let mut output = String::new();
    write!(output, "{}", naive.format(pattern)).ok()?;
    Some(output)
}

/// Parse a date+time that is written exactly as `pattern` renders it.
///
/// chrono alone accepts single-digit fields, two-digit years and any run of
/// whitespace (or none) where the pattern has a space. Re-rendering the
/// parsed value and comparing it with the input rejects all of those.
///
/// # Arguments
///
/// * `input` - The string to parse, untrimmed
/// * `pattern` - A naive chrono pattern such as an entry of [`FORMAT_LIST`]
///
/// # Returns
///
/// The parsed value, or `None` if `input` differs from its canonical rendering
pub fn parse_exact(input: &str, pattern: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input, pattern)
        .ok()
        .filter(|naive| try_format(naive, pattern).as_deref() == Some(input))
}

/// Date-only counterpart of [`parse_exact`]
pub fn parse_exact_day(input: &str, pattern: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, pattern)
        .ok()
        .filter(|date| try_format(&date.and_time(NaiveTime::MIN), pattern).as_deref() == Some(input))
}

/// Whether chrono understands every specifier in `pattern`
pub fn is_valid_pattern(pattern: &str) -> bool {
    !pattern.is_empty() && StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}
