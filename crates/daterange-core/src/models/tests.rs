#[cfg(test)]
mod model_tests {
    use jiff::{tz::TimeZone, Timestamp};

    use crate::{
        error::RangeError,
        models::{FormatKind, FormatSpec, FormattedRange, Instant, ProximityClass},
    };

    fn utc(input: &str) -> Instant {
        Instant::parse(input).expect("valid instant")
    }

    #[test]
    fn test_parse_rfc3339_is_utc() {
        let instant = utc("2023-06-15T10:00:00Z");
        assert_eq!(instant.year(), 2023);
        assert_eq!(instant.month(), 6);
        assert_eq!(instant.day(), 15);
        assert_eq!(instant.hour(), 10);
        assert_eq!(instant.epoch_second(), 1686823200);
        assert_eq!(instant.time_zone_name(), Some("UTC"));
    }

    #[test]
    fn test_parse_keeps_bracketed_zone() {
        let instant = utc("2023-06-15T10:00:00+02:00[Europe/Paris]");
        assert_eq!(instant.hour(), 10);
        assert_eq!(instant.time_zone_name(), Some("Europe/Paris"));
        assert_eq!(instant.to_iso8601_utc(), "2023-06-15T08:00:00Z");
    }

    #[test]
    fn test_parse_keeps_numeric_offset() {
        let instant = utc("2023-06-15T23:30:00+02:00");
        assert_eq!(instant.day(), 15);
        assert_eq!(instant.hour(), 23);
        assert_eq!(instant.time_zone_name(), None);
        assert_eq!(instant.to_iso8601_utc(), "2023-06-15T21:30:00Z");
        assert_eq!(instant.format("%H:%M %z", None).unwrap(), "23:30 +0200");
    }

    #[test]
    fn test_parse_negative_offset() {
        let instant = utc("2023-06-15T01:00:00-05:00");
        assert_eq!(instant.day(), 15);
        assert_eq!(instant.hour(), 1);
        assert_eq!(instant.to_iso8601_utc(), "2023-06-15T06:00:00Z");
    }

    #[test]
    fn test_parse_civil_datetime_as_utc() {
        let instant = utc("2023-06-15T10:00:00");
        assert_eq!(instant.to_iso8601_utc(), "2023-06-15T10:00:00Z");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = Instant::parse("next tuesday").unwrap_err();
        assert!(matches!(err, RangeError::InvalidInput { .. }));
    }

    #[test]
    fn test_from_str_matches_parse() {
        let parsed: Instant = "2023-01-01T00:00:00Z".parse().unwrap();
        assert_eq!(parsed, utc("2023-01-01T00:00:00Z"));
    }

    #[test]
    fn test_epoch_second_ignores_fraction() {
        let whole = utc("2023-06-15T10:00:00Z");
        let fractional = utc("2023-06-15T10:00:00.5Z");
        assert_eq!(whole.epoch_second(), fractional.epoch_second());
        assert_eq!(fractional.to_iso8601_utc(), "2023-06-15T10:00:00Z");
    }

    #[test]
    fn test_from_timestamp() {
        let ts = Timestamp::from_second(1640995200).unwrap(); // 2022-01-01 00:00:00 UTC
        let instant = Instant::from_timestamp(ts, TimeZone::UTC);
        assert_eq!(instant.to_iso8601_utc(), "2022-01-01T00:00:00Z");
        assert_eq!(instant.timestamp(), ts);
    }

    #[test]
    fn test_format_in_own_zone() {
        let instant = utc("2023-06-15T10:00:00Z");
        assert_eq!(instant.format("%-d %b %Y", None).unwrap(), "15 Jun 2023");
        assert_eq!(instant.format("%H:%M", Some("")).unwrap(), "10:00");
    }

    #[test]
    fn test_format_with_zone_override() {
        let instant = utc("2023-06-15T10:00:00Z");
        let text = instant
            .format("%Y-%m-%d %H:%M", Some("America/New_York"))
            .unwrap();
        assert_eq!(text, "2023-06-15 06:00");
    }

    #[test]
    fn test_format_unknown_zone() {
        let instant = utc("2023-06-15T10:00:00Z");
        let err = instant.format("%Y", Some("Mars/Olympus_Mons")).unwrap_err();
        assert!(matches!(err, RangeError::TimeZone { ref name, .. } if name == "Mars/Olympus_Mons"));
    }

    #[test]
    fn test_format_malformed_pattern() {
        let instant = utc("2023-06-15T10:00:00Z");
        let err = instant.format("%Y-%", None).unwrap_err();
        assert!(matches!(err, RangeError::Format { ref pattern, .. } if pattern == "%Y-%"));
    }

    #[test]
    fn test_proximity_class_keys_round_trip() {
        for class in ProximityClass::ALL {
            assert_eq!(class.as_str().parse::<ProximityClass>(), Ok(class));
        }
        assert_eq!("same-day".parse(), Ok(ProximityClass::SameDay));
        assert_eq!("distinct".parse(), Ok(ProximityClass::Distinct));
        assert!("same_week".parse::<ProximityClass>().is_err());
    }

    #[test]
    fn test_proximity_class_serde_uses_fallback_key() {
        let json = serde_json::to_string(&ProximityClass::Distinct).unwrap();
        assert_eq!(json, "\"fallback\"");
        let parsed: ProximityClass = serde_json::from_str("\"distinct\"").unwrap();
        assert_eq!(parsed, ProximityClass::Distinct);
        let parsed: ProximityClass = serde_json::from_str("\"same_hour\"").unwrap();
        assert_eq!(parsed, ProximityClass::SameHour);
    }

    #[test]
    fn test_proximity_class_order_is_priority_order() {
        let mut sorted = ProximityClass::ALL;
        sorted.sort();
        assert_eq!(sorted, ProximityClass::ALL);
        assert_eq!(ProximityClass::ALL[5], ProximityClass::Distinct);
    }

    #[test]
    fn test_format_kind_spec() {
        assert_eq!(FormatKind::Named.spec("long"), Some(FormatSpec::named("long")));
        assert_eq!(FormatKind::Custom.spec("%Y"), Some(FormatSpec::custom("%Y")));
        assert_eq!(FormatKind::Named.spec(""), None);
    }

    #[test]
    fn test_format_spec_display() {
        assert_eq!(FormatSpec::named("medium").to_string(), "named:medium");
        assert_eq!(FormatSpec::custom("%Y").as_str(), "%Y");
    }

    #[test]
    fn test_formatted_range_display() {
        let both = FormattedRange::new("5", "25 Jun 2023", "–");
        assert!(both.has_both());
        assert_eq!(both.to_string(), "5 – 25 Jun 2023");

        let start_only = FormattedRange::new("15 Jun 2023", "", "-");
        assert_eq!(start_only.text(), "15 Jun 2023");
        assert!(!start_only.is_empty());

        let empty = FormattedRange::new("", "", "-");
        assert!(empty.is_empty());
        assert_eq!(empty.text(), "");
    }
}
