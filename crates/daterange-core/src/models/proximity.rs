//! Proximity classes describing how close two instants are.

use std::{fmt, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the buckets a date pair can fall into.
///
/// Variants are declared in priority order: each one is a strict refinement
/// of the ones after it, so the first matching class is the most specific.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum ProximityClass {
    /// Both instants fall on the same second
    Exact,

    /// Same calendar year, month, day and hour
    SameHour,

    /// Same calendar year, month and day
    SameDay,

    /// Same calendar year and month
    SameMonth,

    /// Same calendar year
    SameYear,

    /// None of the above
    #[serde(rename = "fallback", alias = "distinct")]
    Distinct,
}

impl ProximityClass {
    /// All classes in priority order, fallback last.
    pub const ALL: [ProximityClass; 6] = [
        ProximityClass::Exact,
        ProximityClass::SameHour,
        ProximityClass::SameDay,
        ProximityClass::SameMonth,
        ProximityClass::SameYear,
        ProximityClass::Distinct,
    ];

    /// Machine key used in settings files and command output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProximityClass::Exact => "exact",
            ProximityClass::SameHour => "same_hour",
            ProximityClass::SameDay => "same_day",
            ProximityClass::SameMonth => "same_month",
            ProximityClass::SameYear => "same_year",
            ProximityClass::Distinct => "fallback",
        }
    }

    /// Human-readable description for configuration screens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use daterange_core::models::ProximityClass;
    ///
    /// assert_eq!(ProximityClass::SameDay.label(), "Dates occur in the same day");
    /// assert_eq!(ProximityClass::Distinct.label(), "No match (fallback)");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            ProximityClass::Exact => "Dates are an exact match",
            ProximityClass::SameHour => "Dates occur in the same hour",
            ProximityClass::SameDay => "Dates occur in the same day",
            ProximityClass::SameMonth => "Dates occur in the same month",
            ProximityClass::SameYear => "Dates occur in the same year",
            ProximityClass::Distinct => "No match (fallback)",
        }
    }
}

impl fmt::Display for ProximityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProximityClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "exact" => Ok(ProximityClass::Exact),
            "same_hour" => Ok(ProximityClass::SameHour),
            "same_day" => Ok(ProximityClass::SameDay),
            "same_month" => Ok(ProximityClass::SameMonth),
            "same_year" => Ok(ProximityClass::SameYear),
            "fallback" | "distinct" => Ok(ProximityClass::Distinct),
            _ => Err(format!("Invalid proximity class: {s}")),
        }
    }
}
