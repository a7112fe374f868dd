//! Builder for creating and configuring DateRangeFormatter instances.

use std::path::{Path, PathBuf};

use log::{debug, info};

use super::DateRangeFormatter;
use crate::{
    error::Result,
    registry::FormatRegistry,
    settings::{FormatterSettings, RangePolicy},
};

/// Builder for creating and configuring DateRangeFormatter instances.
///
/// Settings are taken from, in order of preference: an explicit value, an
/// explicit file path, the XDG config file, the built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct DateRangeFormatterBuilder {
    settings_path: Option<PathBuf>,
    settings: Option<FormatterSettings>,
    registry: Option<FormatRegistry>,
    policy: Option<RangePolicy>,
    timezone_override: Option<String>,
}

impl DateRangeFormatterBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a settings file to load.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/daterange/settings.json`, when that file exists.
    pub fn with_settings_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.settings_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses these settings instead of loading any file.
    pub fn with_settings(mut self, settings: FormatterSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Starts from this registry instead of the standard one.
    pub fn with_registry(mut self, registry: FormatRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Replaces whatever policy the settings carry.
    pub fn with_policy(mut self, policy: Option<RangePolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the settings' zone override.
    pub fn with_timezone_override(mut self, timezone: Option<String>) -> Self {
        self.timezone_override = timezone;
        self
    }

    /// Builds the configured formatter.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::FileSystem` if a settings file cannot be read
    /// Returns `RangeError::Serialization` if it is not valid settings JSON
    /// Returns `RangeError::Configuration` if the zone override is unknown
    pub fn build(self) -> Result<DateRangeFormatter> {
        let mut settings = match (self.settings, self.settings_path) {
            (Some(settings), _) => settings,
            (None, Some(path)) => FormatterSettings::load(&path)?,
            (None, None) => Self::default_settings()?,
        };
        if let Some(policy) = self.policy {
            settings.policy = policy;
        }
        if let Some(timezone) = self.timezone_override {
            settings.timezone_override = Some(timezone);
        }
        settings.validate()?;

        let mut registry = self.registry.unwrap_or_default();
        registry.extend_from_settings(&settings);
        debug!(
            "Built formatter with {} policy and {} named formats",
            settings.policy.name(),
            registry.len()
        );
        Ok(DateRangeFormatter::with_resolver(registry, settings))
    }

    /// Loads the XDG settings file if present, else the defaults.
    fn default_settings() -> Result<FormatterSettings> {
        match FormatterSettings::default_path() {
            Some(path) => {
                info!("Using settings from {}", path.display());
                FormatterSettings::load(&path)
            }
            None => Ok(FormatterSettings::default()),
        }
    }
}
