use chrono::{NaiveDate, NaiveDateTime};
use datestrings::config::Config;
use datestrings::{parse_date_only, DateTimeError, Instant, Kind, Serializer};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

fn sentinel() -> Instant {
    Instant::utc(at(1999, 12, 31, 23, 59, 59))
}

#[test]
fn test_default_matches_free_functions() {
    let serializer = Serializer::default();
    let instant = Instant::local(at(2020, 2, 1, 10, 0, 0));

    assert_eq!(serializer.format_full(&instant), "01/02/2020 10:00:00");
    assert_eq!(serializer.format_date_only(&instant), "2020-02-01");
    for input in ["2020-05-01", "01/02/2020 10:00", "1 Feb 2020", "junk"] {
        assert_eq!(
            serializer.parse_date_only(input, sentinel()),
            parse_date_only(input, sentinel()),
            "{input}"
        );
    }
    assert_eq!(
        serializer.parse_timestamp_or_general("1700000000", sentinel()),
        Instant::utc(at(2023, 11, 14, 22, 13, 20))
    );
}

#[test]
fn test_from_default_config() {
    let serializer = Serializer::from_config(&Config::default()).unwrap();
    assert_eq!(serializer, Serializer::default());
}

#[test]
fn test_configured_formats() {
    let mut config = Config::default();
    config.formats.full = "%Y%m%d%H%M%S".to_string();
    config.formats.date = "%d.%m.%Y".to_string();
    let serializer = Serializer::from_config(&config).unwrap();

    let instant = Instant::utc(at(2021, 6, 15, 14, 30, 45));
    assert_eq!(serializer.format_full(&instant), "20210615143045");
    assert_eq!(serializer.format_date_only(&instant), "15.06.2021");
}

#[test]
fn test_unrenderable_format_falls_back_to_canonical() {
    let mut config = Config::default();
    config.formats.full = "%Y-%m-%d %z".to_string();
    let serializer = Serializer::from_config(&config).unwrap();

    let instant = Instant::utc(at(2021, 6, 15, 14, 30, 45));
    assert_eq!(serializer.format_full(&instant), "15/06/2021 14:30:45");
}

#[test]
fn test_configured_custom_date() {
    let mut config = Config::default();
    config.formats.custom_date = "%d|%m|%Y".to_string();
    let serializer = Serializer::from_config(&config).unwrap();

    assert_eq!(
        serializer.parse_date_only("31|12|2021", sentinel()),
        Instant::local(at(2021, 12, 31, 0, 0, 0))
    );
}

#[test]
fn test_configured_culture_and_assume_local() {
    let mut config = Config::default();
    config.formats.custom_datetime = "%d %B %Y %H:%M".to_string();
    config.parsing.culture = "fr".to_string();
    config.parsing.assume_local = true;
    let serializer = Serializer::from_config(&config).unwrap();

    assert!(serializer.assume_local());
    assert_eq!(serializer.culture().name(), "fr");

    let parsed = serializer.parse_timestamp_or_general("14 juillet 2021 09:15", sentinel());
    assert_eq!(parsed, Instant::local(at(2021, 7, 14, 9, 15, 0)));

    let parsed = serializer.parse_timestamp_or_general("0", sentinel());
    assert_eq!(parsed.kind(), Kind::Local);
    assert_eq!(parsed.to_epoch_seconds(), 0);
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = Config::default();
    config.formats.custom_datetime = "%Q".to_string();
    assert_eq!(
        Serializer::from_config(&config),
        Err(DateTimeError::InvalidPattern("%Q".to_string()))
    );

    let mut config = Config::default();
    config.parsing.culture = "xx".to_string();
    assert_eq!(
        Serializer::from_config(&config),
        Err(DateTimeError::UnknownCulture("xx".to_string()))
    );
}

#[test]
fn test_parse_full_date_time() {
    let serializer = Serializer::default();
    assert_eq!(
        serializer.parse_full_date_time("15.06.2021 14:30", sentinel()),
        Instant::local(at(2021, 6, 15, 14, 30, 0))
    );
    assert_eq!(serializer.parse_full_date_time("15.06.2021", sentinel()), sentinel());
}
