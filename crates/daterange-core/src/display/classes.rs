//! Listing of proximity classes.

use std::fmt;

use crate::models::ProximityClass;

/// Markdown list of classes with their keys and labels.
///
/// # Examples
///
/// ```rust
/// use daterange_core::{display::ClassList, models::ProximityClass};
///
/// let output = ClassList::new(&ProximityClass::ALL).to_string();
/// assert!(output.starts_with("1. **exact**: Dates are an exact match"));
/// assert!(output.contains("6. **fallback**: No match (fallback)"));
/// ```
pub struct ClassList<'a> {
    classes: &'a [ProximityClass],
    title: Option<&'a str>,
}

impl<'a> ClassList<'a> {
    pub fn new(classes: &'a [ProximityClass]) -> Self {
        Self {
            classes,
            title: None,
        }
    }

    /// Create a ClassList with a title header.
    pub fn with_title(classes: &'a [ProximityClass], title: &'a str) -> Self {
        Self {
            classes,
            title: Some(title),
        }
    }
}

impl fmt::Display for ClassList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = self.title {
            writeln!(f, "# {title}")?;
            writeln!(f)?;
        }

        for (position, class) in self.classes.iter().enumerate() {
            writeln!(f, "{}. **{}**: {}", position + 1, class, class.label())?;
        }
        Ok(())
    }
}
