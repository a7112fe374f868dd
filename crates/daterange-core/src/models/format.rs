//! Format descriptors.

use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How an instant should be turned into text.
///
/// Named formats are looked up in a [`FormatResolver`](crate::FormatResolver);
/// custom formats are strftime patterns used as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormatSpec {
    /// A registry key such as `medium` or `html_date`
    Named(String),
    /// A literal strftime pattern
    Custom(String),
}

impl FormatSpec {
    pub fn named(name: impl Into<String>) -> Self {
        FormatSpec::Named(name.into())
    }

    pub fn custom(pattern: impl Into<String>) -> Self {
        FormatSpec::Custom(pattern.into())
    }

    /// The raw name or pattern.
    pub fn as_str(&self) -> &str {
        match self {
            FormatSpec::Named(name) => name,
            FormatSpec::Custom(pattern) => pattern,
        }
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatSpec::Named(name) => write!(f, "named:{name}"),
            FormatSpec::Custom(pattern) => write!(f, "custom:{pattern}"),
        }
    }
}

/// How the format strings of a per-class table are interpreted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    /// Strings are registry keys
    #[default]
    Named,

    /// Strings are strftime patterns
    Custom,
}

impl FormatKind {
    /// Builds the spec for one side of a range.
    ///
    /// An empty string means the side is hidden and yields `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use daterange_core::models::{FormatKind, FormatSpec};
    ///
    /// assert_eq!(FormatKind::Named.spec("medium"), Some(FormatSpec::named("medium")));
    /// assert_eq!(FormatKind::Custom.spec(""), None);
    /// ```
    pub fn spec(&self, value: &str) -> Option<FormatSpec> {
        if value.is_empty() {
            return None;
        }
        Some(match self {
            FormatKind::Named => FormatSpec::named(value),
            FormatKind::Custom => FormatSpec::custom(value),
        })
    }
}
