//! Date proximity classification.
//!
//! A start/end pair is assigned exactly one [`ProximityClass`] by running the
//! predicates below in priority order and stopping at the first match. Each
//! predicate is a refinement of the next, so the first hit is always the most
//! specific class that applies.

use log::debug;

use crate::models::{Instant, ProximityClass};

type Predicate = fn(&Instant, &Instant) -> bool;

/// Predicates in evaluation order. `Distinct` has none and is the fallback.
const PREDICATES: [(Predicate, ProximityClass); 5] = [
    (is_same_time, ProximityClass::Exact),
    (is_same_hour, ProximityClass::SameHour),
    (is_same_day, ProximityClass::SameDay),
    (is_same_month, ProximityClass::SameMonth),
    (is_same_year, ProximityClass::SameYear),
];

/// Stateless classifier for date pairs.
///
/// Construct once and pass it to whatever needs it; it holds no data and is
/// `Copy`.
///
/// # Examples
///
/// ```rust
/// use daterange_core::{Classifier, models::{Instant, ProximityClass}};
///
/// let classifier = Classifier::new();
/// let start = Instant::parse("2023-06-15T09:00:00Z").unwrap();
/// let end = Instant::parse("2023-06-15T14:00:00Z").unwrap();
/// assert_eq!(classifier.classify(&start, &end), ProximityClass::SameDay);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier;

impl Classifier {
    pub fn new() -> Self {
        Self
    }

    /// Determines the proximity class of a pair. Total over all inputs.
    pub fn classify(&self, start: &Instant, end: &Instant) -> ProximityClass {
        let class = PREDICATES
            .iter()
            .find(|(predicate, _)| predicate(start, end))
            .map_or(ProximityClass::Distinct, |(_, class)| *class);
        debug!("Classified {start} .. {end} as {class}");
        class
    }

    /// All classes in priority order, fallback last.
    pub fn list_classes(&self) -> &'static [ProximityClass] {
        &ProximityClass::ALL
    }

    /// Human-readable description of a class.
    pub fn label(&self, class: ProximityClass) -> &'static str {
        class.label()
    }
}

fn is_same_time(start: &Instant, end: &Instant) -> bool {
    start.epoch_second() == end.epoch_second()
}

// Calendar comparisons read each instant in its own zone, so pairs recorded
// in different zones compare by their local wall-clock fields.
fn is_same_hour(start: &Instant, end: &Instant) -> bool {
    is_same_day(start, end) && start.hour() == end.hour()
}

fn is_same_day(start: &Instant, end: &Instant) -> bool {
    is_same_month(start, end) && start.day() == end.day()
}

fn is_same_month(start: &Instant, end: &Instant) -> bool {
    is_same_year(start, end) && start.month() == end.month()
}

fn is_same_year(start: &Instant, end: &Instant) -> bool {
    start.year() == end.year()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(start: &str, end: &str) -> ProximityClass {
        let start = Instant::parse(start).unwrap();
        let end = Instant::parse(end).unwrap();
        Classifier::new().classify(&start, &end)
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(
            classify("2023-06-15T10:00:00Z", "2023-06-15T10:00:00Z"),
            ProximityClass::Exact
        );
    }

    #[test]
    fn test_exact_match_across_zones() {
        // Same epoch second, different wall clocks.
        assert_eq!(
            classify(
                "2023-06-15T10:00:00+00:00[UTC]",
                "2023-06-15T12:00:00+02:00[Europe/Paris]"
            ),
            ProximityClass::Exact
        );
    }

    #[test]
    fn test_same_hour() {
        assert_eq!(
            classify("2023-06-15T10:05:00Z", "2023-06-15T10:55:00Z"),
            ProximityClass::SameHour
        );
    }

    #[test]
    fn test_same_day() {
        assert_eq!(
            classify("2023-06-15T09:00:00Z", "2023-06-15T14:00:00Z"),
            ProximityClass::SameDay
        );
    }

    #[test]
    fn test_same_month() {
        assert_eq!(
            classify("2023-06-05T00:00:00Z", "2023-06-25T00:00:00Z"),
            ProximityClass::SameMonth
        );
    }

    #[test]
    fn test_same_year() {
        assert_eq!(
            classify("2023-01-01T00:00:00Z", "2023-12-31T00:00:00Z"),
            ProximityClass::SameYear
        );
    }

    #[test]
    fn test_distinct() {
        assert_eq!(
            classify("2022-01-01T00:00:00Z", "2023-01-01T00:00:00Z"),
            ProximityClass::Distinct
        );
    }

    #[test]
    fn test_years_compare_in_full() {
        // Two-digit years would make these collide.
        assert_eq!(
            classify("1923-06-05T00:00:00Z", "2023-06-05T00:00:00Z"),
            ProximityClass::Distinct
        );
    }

    #[test]
    fn test_same_hour_on_different_days_is_not_same_hour() {
        assert_eq!(
            classify("2023-06-14T10:00:00Z", "2023-06-15T10:30:00Z"),
            ProximityClass::SameMonth
        );
    }

    #[test]
    fn test_comparison_uses_each_instants_own_zone() {
        // 23:30 UTC and 01:45 the next day in Paris are both 2023-06-15 in
        // UTC terms but different local days.
        assert_eq!(
            classify(
                "2023-06-15T23:30:00+00:00[UTC]",
                "2023-06-16T01:45:00+02:00[Europe/Paris]"
            ),
            ProximityClass::SameMonth
        );
    }

    #[test]
    fn test_numeric_offsets_compare_in_written_offset() {
        // Both are the 15th in UTC but straddle midnight at +02:00.
        assert_eq!(
            classify("2023-06-15T23:30:00+02:00", "2023-06-16T00:30:00+02:00"),
            ProximityClass::SameMonth
        );
    }

    #[test]
    fn test_reversed_pair() {
        assert_eq!(
            classify("2023-06-25T00:00:00Z", "2023-06-05T00:00:00Z"),
            ProximityClass::SameMonth
        );
    }

    #[test]
    fn test_list_classes_and_labels() {
        let classifier = Classifier::new();
        let classes = classifier.list_classes();
        assert_eq!(classes.len(), 6);
        assert_eq!(classes[0], ProximityClass::Exact);
        assert_eq!(classes[5], ProximityClass::Distinct);
        assert_eq!(
            classifier.label(ProximityClass::Exact),
            "Dates are an exact match"
        );
    }
}
