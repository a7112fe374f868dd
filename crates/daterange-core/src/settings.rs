//! Formatter settings.
//!
//! Settings are plain serde data so that any host (the CLI, a web service,
//! a test) can store them however it likes. The CLI keeps them as JSON in
//! `$XDG_CONFIG_HOME/daterange/settings.json`.
//!
//! ```json
//! {
//!   "policy": "per_class",
//!   "timezone_override": "Europe/London",
//!   "format_kind": "custom",
//!   "classes": {
//!     "exact":    { "start_format": "%-d %b %Y, %H:%M", "end_format": "", "separator": "-" },
//!     "fallback": { "start_format": "%-d %b %Y", "end_format": "%-d %b %Y", "separator": "to" }
//!   }
//! }
//! ```

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use log::debug;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{RangeError, Result},
    models::{resolve_time_zone, FormatKind, FormatSpec, ProximityClass},
    registry::NamedFormat,
};

/// File name looked up in the XDG config directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Default separator between start and end text.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Pattern used by custom per-class defaults (ISO-like storage format).
pub const STORAGE_PATTERN: &str = "%Y-%m-%dT%H:%M:%S";

/// Named format used by named per-class defaults.
pub const DEFAULT_NAMED_FORMAT: &str = "medium";

/// Formats for one proximity class.
///
/// An empty format hides that side of the range.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default)]
pub struct ClassFormats {
    pub start_format: String,
    pub end_format: String,
    pub separator: String,
}

impl ClassFormats {
    pub fn new(
        start_format: impl Into<String>,
        end_format: impl Into<String>,
        separator: impl Into<String>,
    ) -> Self {
        Self {
            start_format: start_format.into(),
            end_format: end_format.into(),
            separator: separator.into(),
        }
    }
}

/// Per-class format table (the configurable cascade).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RangeFormatConfig {
    /// How the format strings are interpreted
    #[serde(default)]
    pub format_kind: FormatKind,
    /// Formats keyed by proximity class; missing classes use the kind's
    /// defaults
    #[serde(default)]
    pub classes: BTreeMap<ProximityClass, ClassFormats>,
}

impl RangeFormatConfig {
    /// A table of the given kind with no explicit entries.
    pub fn new(format_kind: FormatKind) -> Self {
        Self {
            format_kind,
            classes: BTreeMap::new(),
        }
    }

    /// Every class set to the `medium` named format.
    pub fn named_defaults() -> Self {
        Self::filled(FormatKind::Named, DEFAULT_NAMED_FORMAT)
    }

    /// Every class set to the storage pattern.
    pub fn custom_defaults() -> Self {
        Self::filled(FormatKind::Custom, STORAGE_PATTERN)
    }

    fn filled(format_kind: FormatKind, format: &str) -> Self {
        let formats = ClassFormats::new(format, format, DEFAULT_SEPARATOR);
        let classes = ProximityClass::ALL
            .iter()
            .map(|class| (*class, formats.clone()))
            .collect();
        Self {
            format_kind,
            classes,
        }
    }

    /// Formats used for a class absent from the table.
    pub fn default_formats(&self) -> ClassFormats {
        let format = match self.format_kind {
            FormatKind::Named => DEFAULT_NAMED_FORMAT,
            FormatKind::Custom => STORAGE_PATTERN,
        };
        ClassFormats::new(format, format, DEFAULT_SEPARATOR)
    }

    /// Sets the formats for one class.
    pub fn with_class(mut self, class: ProximityClass, formats: ClassFormats) -> Self {
        self.classes.insert(class, formats);
        self
    }

    /// Formats for a class, falling back to [`Self::default_formats`].
    ///
    /// Only an explicit empty string hides a side.
    pub fn formats_for(&self, class: ProximityClass) -> ClassFormats {
        self.classes.get(&class).cloned().unwrap_or_else(|| {
            debug!("No formats configured for '{class}', using defaults");
            self.default_formats()
        })
    }

    /// Start and end specs for a class, `None` for hidden sides.
    pub fn specs_for(&self, class: ProximityClass) -> (Option<FormatSpec>, Option<FormatSpec>, String) {
        let formats = self.formats_for(class);
        (
            self.format_kind.spec(&formats.start_format),
            self.format_kind.spec(&formats.end_format),
            formats.separator,
        )
    }
}

impl Default for RangeFormatConfig {
    fn default() -> Self {
        Self::named_defaults()
    }
}

/// The five fixed patterns of the compact cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default)]
pub struct CascadeFormats {
    /// Start and end are the same second
    pub single_time: String,
    /// Start and end fall on the same day
    pub same_day: String,
    /// Start pattern when both fall in the same month
    pub same_month_start: String,
    /// Start pattern when both fall in the same year
    pub same_year_start: String,
    /// Full end pattern, also used for both sides when nothing matches
    pub end_date: String,
    pub separator: String,
}

impl Default for CascadeFormats {
    fn default() -> Self {
        Self {
            single_time: "%-d %b %Y, %-H:%M".to_string(),
            same_day: "%-d %b %Y".to_string(),
            same_month_start: "%-d".to_string(),
            same_year_start: "%-d %b".to_string(),
            end_date: "%-d %b %Y".to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Formatting strategy, chosen by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum RangePolicy {
    /// Fixed five-slot cascade
    Cascade(CascadeFormats),
    /// Fully configurable per-class table
    PerClass(RangeFormatConfig),
}

impl RangePolicy {
    pub fn name(&self) -> &'static str {
        match self {
            RangePolicy::Cascade(_) => "cascade",
            RangePolicy::PerClass(_) => "per_class",
        }
    }
}

impl Default for RangePolicy {
    fn default() -> Self {
        RangePolicy::PerClass(RangeFormatConfig::default())
    }
}

/// Complete settings for a formatter instance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct FormatterSettings {
    /// Zone used for rendering instead of each instant's own zone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone_override: Option<String>,
    /// Extra named formats added to the registry
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub named_formats: BTreeMap<String, NamedFormat>,
    #[serde(flatten)]
    pub policy: RangePolicy,
}

impl FormatterSettings {
    pub fn new(policy: RangePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn with_timezone_override(mut self, timezone: impl Into<String>) -> Self {
        self.timezone_override = Some(timezone.into());
        self
    }

    /// The override zone, treating an empty string as unset.
    pub fn timezone(&self) -> Option<&str> {
        self.timezone_override
            .as_deref()
            .filter(|name| !name.is_empty())
    }

    /// Checks that the zone override, if any, names a known zone.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::Configuration` for an unknown zone.
    pub fn validate(&self) -> Result<()> {
        if let Some(timezone) = self.timezone() {
            resolve_time_zone(timezone).map_err(|e| RangeError::Configuration {
                message: format!("timezone_override: {e}"),
            })?;
        }
        Ok(())
    }

    /// Parses settings from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::Serialization` if the JSON does not match the
    /// settings shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::Serialization` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::FileSystem` if the file cannot be read and
    /// `RangeError::Serialization` if it is not valid settings JSON.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading settings from {}", path.display());
        let json = fs::read_to_string(path).map_err(|e| RangeError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json)
    }

    /// Writes settings as JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::FileSystem` on any IO failure.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| RangeError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        fs::write(path, self.to_json()?).map_err(|e| RangeError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Existing settings file in the XDG config directories, if any.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("daterange").find_config_file(SETTINGS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_defaults_cover_every_class() {
        let config = RangeFormatConfig::named_defaults();
        assert_eq!(config.format_kind, FormatKind::Named);
        for class in ProximityClass::ALL {
            assert_eq!(
                config.formats_for(class),
                ClassFormats::new("medium", "medium", "-")
            );
        }
    }

    #[test]
    fn test_custom_defaults_use_storage_pattern() {
        let config = RangeFormatConfig::custom_defaults();
        let (start, end, separator) = config.specs_for(ProximityClass::SameDay);
        assert_eq!(start, Some(FormatSpec::custom(STORAGE_PATTERN)));
        assert_eq!(end, Some(FormatSpec::custom(STORAGE_PATTERN)));
        assert_eq!(separator, "-");
    }

    #[test]
    fn test_missing_class_uses_kind_defaults() {
        let config = RangeFormatConfig::new(FormatKind::Custom);
        let (start, end, separator) = config.specs_for(ProximityClass::Exact);
        assert_eq!(start, Some(FormatSpec::custom(STORAGE_PATTERN)));
        assert_eq!(end, Some(FormatSpec::custom(STORAGE_PATTERN)));
        assert_eq!(separator, "-");

        let config = RangeFormatConfig::new(FormatKind::Named);
        assert_eq!(
            config.formats_for(ProximityClass::SameYear),
            ClassFormats::new("medium", "medium", "-")
        );
    }

    #[test]
    fn test_partial_class_map_keeps_defaults_for_the_rest() {
        let json = r#"{
            "policy": "per_class",
            "classes": {
                "exact": { "start_format": "short", "end_format": "", "separator": "-" }
            }
        }"#;
        let settings = FormatterSettings::from_json(json).unwrap();
        let RangePolicy::PerClass(config) = &settings.policy else {
            panic!("expected per-class policy");
        };
        let (start, end, _) = config.specs_for(ProximityClass::Exact);
        assert_eq!(start, Some(FormatSpec::named("short")));
        assert_eq!(end, None);
        assert_eq!(
            config.formats_for(ProximityClass::SameMonth),
            ClassFormats::new("medium", "medium", "-")
        );
    }

    #[test]
    fn test_parse_per_class_settings() {
        let json = r#"{
            "policy": "per_class",
            "timezone_override": "Europe/London",
            "format_kind": "custom",
            "classes": {
                "exact": { "start_format": "%H:%M", "end_format": "" },
                "fallback": { "start_format": "%Y", "end_format": "%Y", "separator": "to" }
            }
        }"#;
        let settings = FormatterSettings::from_json(json).unwrap();
        assert_eq!(settings.timezone(), Some("Europe/London"));
        let RangePolicy::PerClass(config) = &settings.policy else {
            panic!("expected per-class policy");
        };
        assert_eq!(config.format_kind, FormatKind::Custom);
        assert_eq!(
            config.formats_for(ProximityClass::Exact),
            ClassFormats::new("%H:%M", "", "")
        );
        assert_eq!(config.formats_for(ProximityClass::Distinct).separator, "to");
    }

    #[test]
    fn test_parse_cascade_settings_with_defaults() {
        let json = r#"{ "policy": "cascade", "separator": "to" }"#;
        let settings = FormatterSettings::from_json(json).unwrap();
        let RangePolicy::Cascade(formats) = &settings.policy else {
            panic!("expected cascade policy");
        };
        assert_eq!(formats.separator, "to");
        assert_eq!(formats.same_month_start, "%-d");
        assert_eq!(settings.timezone(), None);
    }

    #[test]
    fn test_empty_override_is_unset() {
        let settings = FormatterSettings::default().with_timezone_override("");
        assert_eq!(settings.timezone(), None);
    }

    #[test]
    fn test_validate_zone_override() {
        assert!(FormatterSettings::default().validate().is_ok());
        assert!(FormatterSettings::default()
            .with_timezone_override("Europe/Paris")
            .validate()
            .is_ok());
        let err = FormatterSettings::default()
            .with_timezone_override("Mars/Olympus_Mons")
            .validate()
            .unwrap_err();
        assert!(matches!(err, RangeError::Configuration { .. }));
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let err = FormatterSettings::from_json(r#"{ "policy": "weekly" }"#).unwrap_err();
        assert!(matches!(err, RangeError::Serialization { .. }));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = FormatterSettings::new(RangePolicy::Cascade(CascadeFormats::default()))
            .with_timezone_override("Australia/Sydney");
        let json = settings.to_json().unwrap();
        assert!(json.contains("\"policy\": \"cascade\""));
        assert_eq!(FormatterSettings::from_json(&json).unwrap(), settings);
    }
}
