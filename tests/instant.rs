use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use datestrings::instant::*;
use datestrings::DateTimeError;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

#[test]
fn test_epoch_round_trip_truncates_to_seconds() {
    for naive in [
        at(2020, 5, 1, 12, 34, 56) + Duration::milliseconds(789),
        at(1970, 1, 1, 0, 0, 0),
        at(2038, 1, 19, 3, 14, 8),
        at(2000, 2, 29, 23, 59, 59) + Duration::microseconds(1),
    ] {
        let instant = Instant::utc(naive);
        let round_trip = from_epoch_seconds(to_epoch_seconds(&instant)).unwrap();
        assert_eq!(round_trip.to_utc(), Instant::utc(naive.with_nanosecond(0).unwrap()));
    }
}

#[test]
fn test_epoch_round_trip_local() {
    let instant = Instant::local(at(2020, 5, 1, 12, 34, 56));
    let round_trip = from_epoch_seconds(instant.to_epoch_seconds()).unwrap();
    assert_eq!(round_trip.to_local(), Some(instant));
    assert!(round_trip.to_utc().is_approximately(&instant, Duration::zero()));
}

#[test]
fn test_known_epoch_value() {
    let instant = Instant::utc(at(2023, 11, 14, 22, 13, 20));
    assert_eq!(instant.to_epoch_seconds(), 1_700_000_000);

    let timestamp = Timestamp::from_epoch_seconds(1_700_000_000).unwrap();
    assert_eq!(timestamp.epoch_seconds(), 1_700_000_000);
    assert_eq!(timestamp.to_utc(), instant);
    assert_eq!(timestamp.to_kind(Kind::Utc), Some(instant));
    assert_eq!(timestamp.to_local().map(|local| local.kind()), Some(Kind::Local));
}

#[test]
fn test_from_epoch_seconds_out_of_range() {
    assert_eq!(from_epoch_seconds(i64::MAX), Err(DateTimeError::OutOfRange(i64::MAX)));
}

#[test]
fn test_unix_epoch() {
    assert_eq!(unix_epoch(), Instant::utc(at(1970, 1, 1, 0, 0, 0)));
    assert_eq!(unix_epoch().to_epoch_seconds(), 0);
}

#[test]
fn test_is_approximately_is_symmetric_and_inclusive() {
    let a = Instant::utc(at(2022, 8, 1, 10, 0, 0));
    let b = Instant::utc(at(2022, 8, 1, 10, 0, 1) + Duration::milliseconds(500));

    assert!(a.is_approximately(&b, Duration::milliseconds(1500)));
    assert!(b.is_approximately(&a, Duration::milliseconds(1500)));
    assert!(!a.is_approximately(&b, Duration::milliseconds(1499)));
    assert!(!b.is_approximately(&a, Duration::milliseconds(1499)));
    assert!(a.is_not_approximately(&b, Duration::milliseconds(1499)));
    assert!(!a.is_not_approximately(&b, Duration::milliseconds(1500)));
}

#[test]
fn test_is_approximately_compares_moments_across_kinds() {
    let utc = Instant::utc(at(2022, 8, 1, 10, 0, 0));
    let local = utc.with_kind(Kind::Local).unwrap();
    assert!(utc.is_approximately(&local, Duration::zero()));
    assert!(local.is_approximately(&utc, Duration::zero()));
}

#[test]
fn test_day_index_monday0() {
    // 2025-01-13 is a Monday
    assert_eq!(Instant::utc(at(2025, 1, 13, 8, 0, 0)).day_index_monday0(), 0);
    assert_eq!(Instant::utc(at(2025, 1, 15, 8, 0, 0)).day_index_monday0(), 2);
    assert_eq!(Instant::local(at(2025, 1, 19, 23, 59, 59)).day_index_monday0(), 6);
}

#[test]
fn test_truncate_to_date_keeps_kind() {
    let instant = Instant::utc(at(2024, 2, 29, 18, 45, 3));
    let date = instant.truncate_to_date();
    assert_eq!(date, Instant::utc(at(2024, 2, 29, 0, 0, 0)));
    assert_eq!(date.date_naive(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
}

#[test]
fn test_display_uses_full_format() {
    let instant = Instant::local(at(2020, 2, 1, 10, 0, 0));
    assert_eq!(instant.to_string(), "01/02/2020 10:00:00");
}

#[test]
fn test_from_moment_near_chrono_limits() {
    use chrono::{DateTime, Utc};

    let max = DateTime::<Utc>::MAX_UTC;
    assert_eq!(Instant::from_moment(&max, Kind::Utc), Some(Instant::from(max)));
    // Whether the local view exists depends on the host offset; it must not panic
    if let Some(local) = Instant::from_moment(&DateTime::<Utc>::MIN_UTC, Kind::Local) {
        assert_eq!(local.kind(), Kind::Local);
    }
}
