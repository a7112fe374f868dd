//! Formatter output.

use std::fmt;

use serde::Serialize;

/// The rendered start and end of a range.
///
/// Either side may be empty when its format is hidden or when the range
/// collapses to a single representation. The separator is only shown when
/// both sides are present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FormattedRange {
    pub start_text: String,
    pub end_text: String,
    pub separator: String,
}

impl FormattedRange {
    pub fn new(
        start_text: impl Into<String>,
        end_text: impl Into<String>,
        separator: impl Into<String>,
    ) -> Self {
        Self {
            start_text: start_text.into(),
            end_text: end_text.into(),
            separator: separator.into(),
        }
    }

    /// True when both sides rendered and the separator will be shown.
    pub fn has_both(&self) -> bool {
        !self.start_text.is_empty() && !self.end_text.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.start_text.is_empty() && self.end_text.is_empty()
    }

    /// The joined display text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use daterange_core::models::FormattedRange;
    ///
    /// assert_eq!(FormattedRange::new("5", "25 Jun 2023", "-").text(), "5 - 25 Jun 2023");
    /// assert_eq!(FormattedRange::new("", "25 Jun 2023", "-").text(), "25 Jun 2023");
    /// assert_eq!(FormattedRange::new("", "", "-").text(), "");
    /// ```
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FormattedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_both() {
            return write!(f, "{} {} {}", self.start_text, self.separator, self.end_text);
        }
        if self.start_text.is_empty() {
            f.write_str(&self.end_text)
        } else {
            f.write_str(&self.start_text)
        }
    }
}
