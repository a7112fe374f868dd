//! HTML time elements.
//!
//! Rendered dates are wrapped in `<time>` with the instant's UTC timestamp as
//! the `datetime` attribute, so the visible text can be compact while the
//! markup stays machine-readable.

use std::fmt;

use crate::models::{FormattedRange, Instant};

/// A `<time>` element for one rendered instant.
///
/// # Examples
///
/// ```rust
/// use daterange_core::{display::TimeElement, models::Instant};
///
/// let instant = Instant::parse("2023-06-15T10:00:00Z").unwrap();
/// let element = TimeElement::new(&instant, "15 Jun <2023>");
/// assert_eq!(
///     element.to_string(),
///     r#"<time datetime="2023-06-15T10:00:00Z">15 Jun &lt;2023&gt;</time>"#
/// );
/// ```
pub struct TimeElement<'a> {
    instant: &'a Instant,
    text: &'a str,
}

impl<'a> TimeElement<'a> {
    pub fn new(instant: &'a Instant, text: &'a str) -> Self {
        Self { instant, text }
    }
}

impl fmt::Display for TimeElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<time datetime=\"{}\">{}</time>",
            self.instant.to_iso8601_utc(),
            Escaped(self.text)
        )
    }
}

/// Markup for a whole range: both elements around the separator, or the one
/// visible element alone.
pub struct RangeMarkup<'a> {
    start: &'a Instant,
    end: &'a Instant,
    range: &'a FormattedRange,
}

impl<'a> RangeMarkup<'a> {
    pub fn new(start: &'a Instant, end: &'a Instant, range: &'a FormattedRange) -> Self {
        Self { start, end, range }
    }
}

impl fmt::Display for RangeMarkup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = TimeElement::new(self.start, &self.range.start_text);
        let end = TimeElement::new(self.end, &self.range.end_text);
        if self.range.has_both() {
            return write!(f, "{start} {} {end}", Escaped(&self.range.separator));
        }
        if !self.range.start_text.is_empty() {
            write!(f, "{start}")?;
        } else if !self.range.end_text.is_empty() {
            write!(f, "{end}")?;
        }
        Ok(())
    }
}

/// Plain text escaped for HTML content and attribute values.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                _ => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}
