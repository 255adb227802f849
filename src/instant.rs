//! The [`Instant`] value type and Unix timestamp conversions.
//!
//! An [`Instant`] is a wall-clock date/time plus the rule used to interpret
//! it ([`Kind::Local`] or [`Kind::Utc`]). Conversions to absolute moments go
//! through chrono's `Local` and `Utc` time zones.

use crate::error::{DateTimeError, Result};
use crate::formats;
use chrono::{DateTime, Datelike, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the wall-clock value of an [`Instant`] is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Local,
    Utc,
}

/// A calendar date/time tagged with its interpretation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instant {
    naive: NaiveDateTime,
    kind: Kind,
}

impl Instant {
    /// Tag a wall-clock value with its interpretation rule
    ///
    /// # Arguments
    ///
    /// * `naive` - Calendar date and time of day, without any offset
    /// * `kind` - Whether `naive` is read in the local time zone or as UTC
    pub fn new(naive: NaiveDateTime, kind: Kind) -> Self {
        Self { naive, kind }
    }

    /// Wall-clock value interpreted in the machine's local time zone
    pub fn local(naive: NaiveDateTime) -> Self {
        Self::new(naive, Kind::Local)
    }

    /// Wall-clock value interpreted as UTC
    pub fn utc(naive: NaiveDateTime) -> Self {
        Self::new(naive, Kind::Utc)
    }

    /// Midnight at the start of `date`
    pub fn from_date(date: NaiveDate, kind: Kind) -> Self {
        Self::new(date.and_time(chrono::NaiveTime::MIN), kind)
    }

    /// Express an absolute moment in the requested kind
    ///
    /// # Arguments
    ///
    /// * `moment` - A date/time in any chrono time zone
    /// * `kind` - The view to express it in
    ///
    /// # Returns
    ///
    /// `None` when the local wall-clock value would fall outside chrono's
    /// representable range, which can only happen close to its limits.
    pub fn from_moment<Tz: TimeZone>(moment: &DateTime<Tz>, kind: Kind) -> Option<Self> {
        let utc = moment.naive_utc();
        match kind {
            Kind::Utc => Some(Self::utc(utc)),
            Kind::Local => wall_clock_at(&utc, Local.offset_from_utc_datetime(&utc)).map(Self::local),
        }
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.naive
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn date_naive(&self) -> NaiveDate {
        self.naive.date()
    }

    /// Drop the time-of-day, keeping the calendar day of this instant's own kind
    pub fn truncate_to_date(&self) -> Self {
        Self::from_date(self.naive.date(), self.kind)
    }

    /// The absolute moment this instant denotes.
    ///
    /// Local values that do not exist (DST gap) are read as UTC, and ambiguous
    /// ones take the earliest mapping.
    pub fn to_utc(&self) -> DateTime<Utc> {
        match self.kind {
            Kind::Utc => self.naive.and_utc(),
            Kind::Local => resolve_local(&self.naive).with_timezone(&Utc),
        }
    }

    pub fn to_local(&self) -> DateTime<Local> {
        match self.kind {
            Kind::Local => resolve_local(&self.naive),
            Kind::Utc => self.naive.and_utc().with_timezone(&Local),
        }
    }

    /// Same moment re-expressed in another kind, or `None` near chrono's limits
    pub fn with_kind(&self, kind: Kind) -> Option<Self> {
        if kind == self.kind {
            Some(*self)
        } else {
            Self::from_moment(&self.to_utc(), kind)
        }
    }

    /// Whole seconds since 1970-01-01T00:00:00 UTC, truncated toward zero
    pub fn to_epoch_seconds(&self) -> i64 {
        let moment = self.to_utc();
        let seconds = moment.timestamp();
        if seconds < 0 && moment.timestamp_subsec_nanos() > 0 {
            seconds + 1
        } else {
            seconds
        }
    }

    /// Whether the two moments lie at most `epsilon` apart (inclusive)
    pub fn is_approximately(&self, other: &Instant, epsilon: Duration) -> bool {
        let diff = other.to_utc() - self.to_utc();
        let distance = if diff < Duration::zero() { -diff } else { diff };
        distance <= epsilon
    }

    pub fn is_not_approximately(&self, other: &Instant, epsilon: Duration) -> bool {
        !self.is_approximately(other, epsilon)
    }

    /// Day of the week with Monday as 0 and Sunday as 6
    pub fn day_index_monday0(&self) -> u32 {
        self.naive.weekday().num_days_from_monday()
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::utc(dt.naive_utc())
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.naive.format(formats::FULL_FORMAT))
    }
}

/// Wall-clock value of `utc` at `offset`, if chrono can represent it
fn wall_clock_at(utc: &NaiveDateTime, offset: FixedOffset) -> Option<NaiveDateTime> {
    utc.checked_add_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
}

/// Map a local wall-clock value onto the local time zone.
///
/// Ambiguous values (DST fold) take the earliest mapping. Values that do
/// not exist locally (DST gap) are read as UTC.
fn resolve_local(naive: &NaiveDateTime) -> DateTime<Local> {
    Local
        .from_local_datetime(naive)
        .earliest()
        .unwrap_or_else(|| Local.from_utc_datetime(naive))
}

/// A moment created from a Unix timestamp, viewable as local or UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn from_epoch_seconds(seconds: i64) -> Result<Self> {
        DateTime::from_timestamp(seconds, 0)
            .map(Self)
            .ok_or(DateTimeError::OutOfRange(seconds))
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.0.timestamp()
    }

    pub fn to_utc(&self) -> Instant {
        Instant::from(self.0)
    }

    pub fn to_local(&self) -> Option<Instant> {
        self.to_kind(Kind::Local)
    }

    /// See [`Instant::from_moment`] for when this is `None`
    pub fn to_kind(&self, kind: Kind) -> Option<Instant> {
        Instant::from_moment(&self.0, kind)
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

/// 1970-01-01T00:00:00 UTC
pub fn unix_epoch() -> Instant {
    Instant::from(DateTime::<Utc>::UNIX_EPOCH)
}

pub fn to_epoch_seconds(instant: &Instant) -> i64 {
    instant.to_epoch_seconds()
}

pub fn from_epoch_seconds(seconds: i64) -> Result<Timestamp> {
    Timestamp::from_epoch_seconds(seconds)
}
