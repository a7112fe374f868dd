//! Named date formats.
//!
//! Per-class settings can refer to formats by name (`medium`, `html_date`,
//! ...). A [`FormatResolver`] turns those names into strftime patterns. The
//! stock [`FormatRegistry`] ships the usual site-wide formats and can be
//! extended from settings.

use std::collections::BTreeMap;

use log::{debug, warn};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{error::Result, models::Instant, settings::FormatterSettings};

/// Key of the format used when a name cannot be resolved.
pub const FALLBACK_FORMAT: &str = "fallback";

/// Pattern used when a resolver has no `fallback` entry of its own.
pub const DEFAULT_FALLBACK_PATTERN: &str = "%a, %m/%d/%Y - %H:%M";

/// Resolves format names to strftime patterns.
pub trait FormatResolver {
    /// Pattern registered under `name`, if any.
    fn resolve(&self, name: &str) -> Option<&str>;

    /// Pattern for `name`, else the resolver's `fallback` entry, else
    /// [`DEFAULT_FALLBACK_PATTERN`].
    fn resolve_or_fallback(&self, name: &str) -> &str {
        if let Some(pattern) = self.resolve(name) {
            return pattern;
        }
        warn!("Unknown date format '{name}', using '{FALLBACK_FORMAT}'");
        self.resolve(FALLBACK_FORMAT).unwrap_or(DEFAULT_FALLBACK_PATTERN)
    }
}

/// A labelled strftime pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct NamedFormat {
    /// Label shown when choosing a format
    pub label: String,
    /// strftime pattern
    pub pattern: String,
}

impl NamedFormat {
    pub fn new(label: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pattern: pattern.into(),
        }
    }
}

/// A named format paired with a sample rendering, for pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatOption {
    pub name: String,
    /// `Label (sample)`
    pub display: String,
}

/// Registry of named formats keyed by machine name.
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    formats: BTreeMap<String, NamedFormat>,
}

impl FormatRegistry {
    /// A registry containing only the fallback format.
    pub fn empty() -> Self {
        let mut formats = BTreeMap::new();
        formats.insert(
            FALLBACK_FORMAT.to_string(),
            NamedFormat::new("Fallback date format", DEFAULT_FALLBACK_PATTERN),
        );
        Self { formats }
    }

    /// Registers or replaces a named format.
    pub fn register(&mut self, name: impl Into<String>, format: NamedFormat) -> &mut Self {
        let name = name.into();
        debug!("Registering date format '{name}' => '{}'", format.pattern);
        self.formats.insert(name, format);
        self
    }

    /// Registers every entry of `formats`, replacing same-named ones.
    pub fn extend<I>(&mut self, formats: I) -> &mut Self
    where
        I: IntoIterator<Item = (String, NamedFormat)>,
    {
        for (name, format) in formats {
            self.register(name, format);
        }
        self
    }

    /// Registers the `named_formats` carried by settings.
    pub fn extend_from_settings(&mut self, settings: &FormatterSettings) -> &mut Self {
        self.extend(settings.named_formats.clone())
    }

    pub fn get(&self, name: &str) -> Option<&NamedFormat> {
        self.formats.get(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.formats.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Picker entries of the form `Label (sample)`, rendered from `sample`.
    ///
    /// Recomputed on each call; callers that need it repeatedly can keep the
    /// returned list.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::Format` if a registered pattern is malformed.
    pub fn options(&self, sample: &Instant) -> Result<Vec<FormatOption>> {
        self.formats
            .iter()
            .map(|(name, format)| {
                let rendered = sample.format(&format.pattern, None)?;
                Ok(FormatOption {
                    name: name.clone(),
                    display: format!("{} ({rendered})", format.label),
                })
            })
            .collect()
    }
}

impl Default for FormatRegistry {
    /// The standard site formats.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register("html_date", NamedFormat::new("HTML Date", "%Y-%m-%d"))
            .register(
                "html_datetime",
                NamedFormat::new("HTML Datetime", "%Y-%m-%dT%H:%M:%S%z"),
            )
            .register("html_month", NamedFormat::new("HTML Month", "%Y-%m"))
            .register("html_time", NamedFormat::new("HTML Time", "%H:%M:%S"))
            .register("html_week", NamedFormat::new("HTML Week", "%G-W%V"))
            .register("html_year", NamedFormat::new("HTML Year", "%Y"))
            .register(
                "html_yearless_date",
                NamedFormat::new("HTML Yearless date", "%m-%d"),
            )
            .register(
                "long",
                NamedFormat::new("Default long date", "%A, %B %-d, %Y - %H:%M"),
            )
            .register(
                "medium",
                NamedFormat::new("Default medium date", "%a, %m/%d/%Y - %H:%M"),
            )
            .register(
                "short",
                NamedFormat::new("Default short date", "%m/%d/%Y - %H:%M"),
            );
        registry
    }
}

impl FormatResolver for FormatRegistry {
    fn resolve(&self, name: &str) -> Option<&str> {
        self.formats.get(name).map(|format| format.pattern.as_str())
    }
}
