#![allow(dead_code)]

use daterange_core::Instant;
use jiff::{civil::date, tz::TimeZone};

/// Helper function to parse an instant, panicking on bad fixtures
pub fn instant(input: &str) -> Instant {
    Instant::parse(input).expect("Failed to parse instant fixture")
}

/// Helper function to build an instant from civil fields in a zone
pub fn civil(year: i16, month: i8, day: i8, hour: i8, minute: i8, zone: &str) -> Instant {
    let tz = TimeZone::get(zone).expect("Failed to load time zone");
    let zoned = date(year, month, day)
        .at(hour, minute, 0, 0)
        .to_zoned(tz)
        .expect("Failed to place datetime in zone");
    Instant::new(zoned)
}

/// A spread of instants around month, day and year boundaries in two zones
pub fn instant_grid() -> Vec<Instant> {
    let mut grid = Vec::new();
    for zone in ["UTC", "America/New_York"] {
        for (year, month, day) in [(2022, 12, 31), (2023, 1, 1), (2023, 6, 15), (2023, 6, 16)] {
            for (hour, minute) in [(0, 0), (0, 30), (10, 0), (23, 59)] {
                grid.push(civil(year, month, day, hour, minute, zone));
            }
        }
    }
    grid
}
