//! Layered date/time string parsing.
//!
//! Every entry point runs an ordered list of strategies and stops at the
//! first one that produces an [`Instant`]. Each strategy is also public so
//! it can be used (and tested) on its own.
//!
//! Three error-visibility tiers are offered:
//!
//! - **Silent default** - `parse_*` functions taking a `default` return it
//!   untouched when nothing matches.
//! - **Explicit failure** - `try_parse_*` functions return `Option`.
//! - **Error** - [`parse_date`] returns [`DateTimeError::Format`].
//!
//! Date-only results are truncated on the local calendar day: every
//! candidate is first expressed as a [`Kind::Local`] instant, then its
//! time-of-day is dropped.

use crate::culture::{FormatProvider, InvariantCulture};
use crate::error::{DateTimeError, Result};
use crate::formats::{self, DEFAULT_DATE_FORMAT, FORMAT_LIST};
use crate::instant::{Instant, Kind, Timestamp};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::{debug, trace};

/// A named parse step
type Strategy<'a> = (&'static str, &'a dyn Fn(&str) -> Option<Instant>);

/// Date-times carrying an explicit offset, beyond what RFC 3339 accepts
const OFFSET_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

/// Year-first naive date-times
const NAIVE_LAYOUTS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
];

const NUMERIC_DATE_LAYOUTS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// `%B` also accepts abbreviated month names when parsing
const TEXTUAL_DATE_LAYOUTS: [&str; 3] = ["%d %B %Y", "%B %d, %Y", "%B %d %Y"];

fn first_match(input: &str, strategies: &[Strategy<'_>]) -> Option<Instant> {
    strategies.iter().find_map(|(name, strategy)| match strategy(input) {
        Some(instant) => {
            debug!("'{}' parsed by {} strategy", input, name);
            Some(instant)
        }
        None => {
            trace!("'{}' rejected by {} strategy", input, name);
            None
        }
    })
}

fn or_default(input: &str, parsed: Option<Instant>, default: Instant) -> Instant {
    parsed.unwrap_or_else(|| {
        debug!("'{}' matched no known layout, using default {}", input, default);
        default
    })
}

// Strategies

/// Exact `yyyy-mm-dd` with zero-padded fields, as local midnight
pub fn parse_exact_date(input: &str) -> Option<Instant> {
    formats::parse_exact_day(input, DEFAULT_DATE_FORMAT).map(|date| Instant::from_date(date, Kind::Local))
}

/// Each [`FORMAT_LIST`] layout in order, as local wall-clock time.
///
/// Only inputs written exactly as the layout renders are accepted: two-digit
/// years, unpadded fields and extra or missing spaces do not match.
pub fn parse_with_format_list(input: &str) -> Option<Instant> {
    FORMAT_LIST
        .iter()
        .find_map(|pattern| formats::parse_exact(input, pattern))
        .map(Instant::local)
}

/// Exact match against one chrono pattern.
///
/// An offset-bearing pattern yields a moment re-expressed in `kind`; a naive
/// pattern (date+time or date only) is tagged with `kind` as is.
pub fn parse_with_pattern(input: &str, pattern: &str, kind: Kind) -> Option<Instant> {
    if let Ok(dt) = DateTime::parse_from_str(input, pattern) {
        return Instant::from_moment(&dt, kind);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, pattern) {
        return Some(Instant::new(naive, kind));
    }
    NaiveDate::parse_from_str(input, pattern)
        .ok()
        .map(|date| Instant::from_date(date, kind))
}

/// An integer count of seconds since the Unix epoch
pub fn parse_epoch_seconds(input: &str, kind: Kind) -> Option<Instant> {
    let seconds = input.trim().parse::<i64>().ok()?;
    Timestamp::from_epoch_seconds(seconds)
        .ok()
        .and_then(|timestamp| timestamp.to_kind(kind))
}

/// Lenient, locale-independent parse of common unambiguous layouts, as local time
pub fn parse_general(input: &str) -> Option<Instant> {
    parse_general_as(input, Kind::Local)
}

/// Lenient parse: RFC 3339, RFC 2822, ISO-8601 and textual month layouts.
///
/// Day-first and month-first numeric dates are not accepted, so
/// `01/02/2020` is left for [`FORMAT_LIST`] to decide.
pub fn parse_general_as(input: &str, kind: Kind) -> Option<Instant> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Instant::from_moment(&dt, kind);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Instant::from_moment(&dt, kind);
    }

    if starts_with_year(input) {
        if let Some(dt) = OFFSET_LAYOUTS
            .iter()
            .find_map(|pattern| DateTime::parse_from_str(input, pattern).ok())
        {
            return Instant::from_moment(&dt, kind);
        }
        if let Some(naive) = NAIVE_LAYOUTS
            .iter()
            .find_map(|pattern| NaiveDateTime::parse_from_str(input, pattern).ok())
        {
            return Some(Instant::new(naive, kind));
        }
        if let Some(date) = NUMERIC_DATE_LAYOUTS
            .iter()
            .find_map(|pattern| NaiveDate::parse_from_str(input, pattern).ok())
        {
            return Some(Instant::from_date(date, kind));
        }
        return None;
    }

    TEXTUAL_DATE_LAYOUTS
        .iter()
        .find_map(|pattern| NaiveDate::parse_from_str(input, pattern).ok())
        .map(|date| Instant::from_date(date, kind))
}

/// Four digits followed by a non-digit
fn starts_with_year(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() > 4 && bytes[..4].iter().all(u8::is_ascii_digit) && !bytes[4].is_ascii_digit()
}

// Full date+time parsing

/// Parse a date+time written in one of the [`FORMAT_LIST`] layouts
///
/// # Arguments
///
/// * `input` - A string such as `01/02/2020 10:00` or `2020.02.01 10:00:00`
///
/// # Returns
///
/// The first layout that matches exactly, as a [`Kind::Local`] instant, or
/// `None`. Ambiguous strings are read day-first.
pub fn try_parse_date(input: &str) -> Option<Instant> {
    parse_with_format_list(input)
}

/// Like [`try_parse_date`] but reports a [`DateTimeError::Format`] on failure
pub fn parse_date(input: &str) -> Result<Instant> {
    try_parse_date(input).ok_or_else(|| DateTimeError::Format(input.to_string()))
}

/// [`FORMAT_LIST`] parse that keeps the time of day, or `None`
pub fn try_parse_full_date_time(input: &str) -> Option<Instant> {
    let strategies: [Strategy<'_>; 1] = [("format list", &parse_with_format_list)];
    first_match(input, &strategies)
}

/// Parse a date+time, keeping its time of day
///
/// # Arguments
///
/// * `input` - A string in one of the [`FORMAT_LIST`] layouts
/// * `default` - Returned unchanged when nothing matches
///
/// # Returns
///
/// The parsed wall-clock value tagged [`Kind::Local`], or `default`
pub fn parse_full_date_time(input: &str, default: Instant) -> Instant {
    or_default(input, try_parse_full_date_time(input), default)
}

// Date-only parsing

fn as_local_date(instant: Instant) -> Option<Instant> {
    instant.with_kind(Kind::Local).map(|local| local.truncate_to_date())
}

/// Date-only parse, or `None`.
///
/// Order: exact `yyyy-mm-dd`, general parse, [`FORMAT_LIST`], epoch seconds.
/// Every result is local midnight of the matched day.
pub fn try_parse_date_only(input: &str) -> Option<Instant> {
    let strategies: [Strategy<'_>; 4] = [
        ("exact date", &parse_exact_date),
        ("general", &|s: &str| parse_general(s).and_then(as_local_date)),
        ("format list", &|s: &str| parse_with_format_list(s).and_then(as_local_date)),
        ("epoch seconds", &|s: &str| parse_epoch_seconds(s, Kind::Local).and_then(as_local_date)),
    ];
    first_match(input, &strategies)
}

/// [`try_parse_date_only`] with `pattern` tried right after the exact date step
pub fn try_parse_date_only_with(input: &str, pattern: &str) -> Option<Instant> {
    let strategies: [Strategy<'_>; 5] = [
        ("exact date", &parse_exact_date),
        ("custom pattern", &|s: &str| {
            parse_with_pattern(s, pattern, Kind::Local).and_then(as_local_date)
        }),
        ("general", &|s: &str| parse_general(s).and_then(as_local_date)),
        ("format list", &|s: &str| parse_with_format_list(s).and_then(as_local_date)),
        ("epoch seconds", &|s: &str| parse_epoch_seconds(s, Kind::Local).and_then(as_local_date)),
    ];
    first_match(input, &strategies)
}

/// Parse a date without a meaningful time of day
///
/// Use this for due dates, birthdays and the like. The steps are tried in
/// order: exact `yyyy-mm-dd`, the general parse, [`FORMAT_LIST`], then epoch
/// seconds.
///
/// # Arguments
///
/// * `input` - The string to parse
/// * `default` - Returned unchanged when no step matches
///
/// # Returns
///
/// Local midnight of the matched calendar day, or `default`
pub fn parse_date_only(input: &str, default: Instant) -> Instant {
    or_default(input, try_parse_date_only(input), default)
}

/// [`parse_date_only`] with an extra chrono `pattern`, tried right after the
/// exact `yyyy-mm-dd` step
pub fn parse_date_only_with(input: &str, default: Instant, pattern: &str) -> Instant {
    or_default(input, try_parse_date_only_with(input, pattern), default)
}

// Timestamp-or-general parsing

fn kind_for(assume_local: bool) -> Kind {
    if assume_local {
        Kind::Local
    } else {
        Kind::Utc
    }
}

/// Epoch seconds first, then the general parse.
///
/// `assume_local` only picks the view of an epoch value: [`Kind::Local`]
/// when set, [`Kind::Utc`] otherwise. General parse results are always
/// local.
pub fn try_parse_timestamp_or_general(input: &str, assume_local: bool) -> Option<Instant> {
    let kind = kind_for(assume_local);
    let strategies: [Strategy<'_>; 2] = [
        ("epoch seconds", &|s: &str| parse_epoch_seconds(s, kind)),
        ("general", &parse_general),
    ];
    first_match(input, &strategies)
}

/// Parse either a Unix timestamp or a general date/time string
///
/// # Arguments
///
/// * `input` - Integer seconds since the epoch (sign and surrounding
///   whitespace allowed), or anything the general parse accepts
/// * `default` - Returned unchanged when neither matches
/// * `assume_local` - View epoch values as local time instead of UTC
///
/// # Returns
///
/// The parsed instant, or `default`
pub fn parse_timestamp_or_general(input: &str, default: Instant, assume_local: bool) -> Instant {
    or_default(input, try_parse_timestamp_or_general(input, assume_local), default)
}

/// Epoch seconds first, then an exact match against `pattern` after
/// `provider` has rewritten culture-specific words. An empty pattern falls
/// back to the general parse.
pub fn try_parse_timestamp_or_general_with(
    input: &str,
    pattern: &str,
    provider: &dyn FormatProvider,
    assume_local: bool,
) -> Option<Instant> {
    if pattern.is_empty() {
        return try_parse_timestamp_or_general(input, assume_local);
    }

    let kind = kind_for(assume_local);
    let strategies: [Strategy<'_>; 2] = [
        ("epoch seconds", &|s: &str| parse_epoch_seconds(s, kind)),
        ("custom pattern", &|s: &str| {
            parse_with_pattern(&provider.to_invariant(s), pattern, kind)
        }),
    ];
    first_match(input, &strategies)
}

/// Parse either a Unix timestamp or a string in a custom pattern
///
/// # Arguments
///
/// * `input` - Integer epoch seconds, or a string written in `pattern`
/// * `default` - Returned unchanged when neither matches
/// * `pattern` - chrono pattern; empty means the general parse
/// * `provider` - Rewrites culture-specific month names before matching
/// * `assume_local` - Kind of epoch and pattern results: local when set,
///   UTC otherwise
///
/// # Returns
///
/// The parsed instant, or `default`
pub fn parse_timestamp_or_general_with(
    input: &str,
    default: Instant,
    pattern: &str,
    provider: &dyn FormatProvider,
    assume_local: bool,
) -> Instant {
    or_default(
        input,
        try_parse_timestamp_or_general_with(input, pattern, provider, assume_local),
        default,
    )
}

/// [`parse_timestamp_or_general_with`] using the invariant culture
pub fn parse_timestamp_or_general_with_pattern(
    input: &str,
    default: Instant,
    pattern: &str,
    assume_local: bool,
) -> Instant {
    parse_timestamp_or_general_with(input, default, pattern, &InvariantCulture, assume_local)
}
