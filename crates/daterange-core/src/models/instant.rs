//! Zone-aware points in time.

use std::{fmt, str::FromStr};

use jiff::{
    civil::DateTime,
    fmt::{
        strtime,
        temporal::{Pieces, PiecesOffset},
    },
    tz::TimeZone,
    Timestamp, Zoned,
};

use crate::error::{RangeError, Result};

/// Pattern for the machine-readable `datetime` attribute of a time element.
const ISO_8601_UTC: &str = "%Y-%m-%dT%H:%M:%SZ";

/// An absolute point in time together with the zone it was recorded in.
///
/// Calendar components are read in the instant's own zone. Rendering can
/// target a different zone without changing the instant itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instant(Zoned);

impl Instant {
    /// Wraps an existing zoned datetime.
    pub fn new(zoned: Zoned) -> Self {
        Self(zoned)
    }

    /// Places a timestamp in the given zone.
    pub fn from_timestamp(timestamp: Timestamp, tz: TimeZone) -> Self {
        Self(timestamp.to_zoned(tz))
    }

    /// Parses an instant from text.
    ///
    /// Accepts a zoned string with a bracketed IANA annotation, an RFC 3339
    /// timestamp (kept at its numeric offset, or UTC for `Z`), or a civil
    /// datetime without an offset, which is taken to be UTC.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::InvalidInput` if none of the forms match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use daterange_core::models::Instant;
    ///
    /// let instant = Instant::parse("2023-06-15T10:00:00Z").unwrap();
    /// assert_eq!(instant.hour(), 10);
    /// assert_eq!(instant.to_iso8601_utc(), "2023-06-15T10:00:00Z");
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if let Ok(zoned) = input.parse::<Zoned>() {
            return Ok(Self(zoned));
        }
        if let Ok(timestamp) = input.parse::<Timestamp>() {
            return Ok(Self::from_timestamp(timestamp, offset_zone(input)));
        }
        let civil = input.parse::<DateTime>().map_err(|e| {
            RangeError::invalid_input("instant").with_reason(format!("'{input}': {e}"))
        })?;
        civil
            .to_zoned(TimeZone::UTC)
            .map(Self)
            .map_err(|e| RangeError::invalid_input("instant").with_reason(e.to_string()))
    }

    /// The underlying zoned datetime.
    pub fn zoned(&self) -> &Zoned {
        &self.0
    }

    pub fn timestamp(&self) -> Timestamp {
        self.0.timestamp()
    }

    /// Seconds since the Unix epoch, the granularity used for exact matches.
    pub fn epoch_second(&self) -> i64 {
        self.0.timestamp().as_second()
    }

    pub fn year(&self) -> i16 {
        self.0.year()
    }

    pub fn month(&self) -> i8 {
        self.0.month()
    }

    pub fn day(&self) -> i8 {
        self.0.day()
    }

    pub fn hour(&self) -> i8 {
        self.0.hour()
    }

    /// IANA name of the instant's own zone, if it has one.
    pub fn time_zone_name(&self) -> Option<&str> {
        self.0.time_zone().iana_name()
    }

    /// Renders the instant with a strftime pattern.
    ///
    /// A non-empty `timezone` overrides the instant's own zone.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::TimeZone` for an unknown zone and
    /// `RangeError::Format` for a pattern jiff rejects.
    pub fn format(&self, pattern: &str, timezone: Option<&str>) -> Result<String> {
        let zoned = match timezone.filter(|name| !name.is_empty()) {
            Some(name) => self.0.with_time_zone(resolve_time_zone(name)?),
            None => self.0.clone(),
        };
        strtime::format(pattern, &zoned).map_err(|e| RangeError::format(pattern, e))
    }

    /// The instant in UTC as `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn to_iso8601_utc(&self) -> String {
        self.0.timestamp().strftime(ISO_8601_UTC).to_string()
    }
}

/// Looks up a time zone by IANA name.
///
/// # Errors
///
/// Returns `RangeError::TimeZone` if the database has no such zone.
pub fn resolve_time_zone(name: &str) -> Result<TimeZone> {
    if name.eq_ignore_ascii_case("utc") {
        return Ok(TimeZone::UTC);
    }
    TimeZone::get(name).map_err(|e| RangeError::time_zone(name, e))
}

/// Fixed-offset zone for a written `+HH:MM` offset; UTC for `Z`.
fn offset_zone(input: &str) -> TimeZone {
    match Pieces::parse(input).ok().and_then(|pieces| pieces.offset()) {
        Some(PiecesOffset::Numeric(numeric)) => TimeZone::fixed(numeric.offset()),
        _ => TimeZone::UTC,
    }
}

impl From<Zoned> for Instant {
    fn from(zoned: Zoned) -> Self {
        Self::new(zoned)
    }
}

impl FromStr for Instant {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
