//! Date range formatting.
//!
//! [`DateRangeFormatter`] turns a start/end pair into a [`FormattedRange`]
//! using one of two strategies selected by [`RangePolicy`]:
//!
//! - **Cascade**: five fixed patterns. A single instant, a same-day pair and
//!   a same-month or same-year pair each get a compact start, with the end
//!   always rendered in full.
//! - **Per-class**: an explicit `(start, end, separator)` triple for each of
//!   the six proximity classes, with empty formats hiding a side.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │  Classifier  │───▶│ RangePolicy  │───▶│FormatResolver│───▶ FormattedRange
//! │ (6 classes)  │    │ (slot/table) │    │ (name→strf)  │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Creates formatters from settings files or values
//!
//! # Examples
//!
//! ```rust
//! use daterange_core::{
//!     DateRangeFormatterBuilder,
//!     models::Instant,
//!     settings::{CascadeFormats, FormatterSettings, RangePolicy},
//! };
//!
//! let formatter = DateRangeFormatterBuilder::new()
//!     .with_settings(FormatterSettings::new(RangePolicy::Cascade(CascadeFormats::default())))
//!     .build()
//!     .unwrap();
//!
//! let start = Instant::parse("2023-06-05T00:00:00Z").unwrap();
//! let end = Instant::parse("2023-06-25T00:00:00Z").unwrap();
//! let range = formatter.format(&start, &end).unwrap();
//! assert_eq!(range.to_string(), "5 - 25 Jun 2023");
//! ```

pub mod builder;


use log::debug;

pub use builder::DateRangeFormatterBuilder;

use crate::{
    classifier::Classifier,
    error::Result,
    models::{FormatKind, FormatSpec, FormattedRange, Instant, ProximityClass},
    registry::{FormatRegistry, FormatResolver},
    settings::{CascadeFormats, FormatterSettings, RangeFormatConfig, RangePolicy},
};

/// Formats date ranges according to a policy.
///
/// Holds no mutable state; build once and share by reference.
#[derive(Debug, Clone)]
pub struct DateRangeFormatter<R = FormatRegistry> {
    classifier: Classifier,
    resolver: R,
    settings: FormatterSettings,
}

impl<R: FormatResolver> DateRangeFormatter<R> {
    /// Creates a formatter around any resolver.
    pub fn with_resolver(resolver: R, settings: FormatterSettings) -> Self {
        Self {
            classifier: Classifier::new(),
            resolver,
            settings,
        }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn settings(&self) -> &FormatterSettings {
        &self.settings
    }

    /// Proximity class of a pair.
    pub fn classify(&self, start: &Instant, end: &Instant) -> ProximityClass {
        self.classifier.classify(start, end)
    }

    /// Formats a pair with the formatter's own settings.
    ///
    /// # Errors
    ///
    /// Propagates rendering errors, see [`Self::format_range`].
    pub fn format(&self, start: &Instant, end: &Instant) -> Result<FormattedRange> {
        self.format_range(start, end, &self.settings.policy, self.settings.timezone())
    }

    /// Formats a pair with an explicit policy and zone override.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::Format` or `RangeError::TimeZone` when an
    /// instant cannot be rendered. Unset formats never error; they produce
    /// an empty side.
    pub fn format_range(
        &self,
        start: &Instant,
        end: &Instant,
        policy: &RangePolicy,
        timezone: Option<&str>,
    ) -> Result<FormattedRange> {
        let class = self.classify(start, end);
        debug!("Formatting {} range with {} policy", class, policy.name());
        match policy {
            RangePolicy::Cascade(formats) => self.format_cascade(start, end, class, formats, timezone),
            RangePolicy::PerClass(config) => self.format_per_class(start, end, class, config, timezone),
        }
    }

    /// Renders one instant.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::Format` for a malformed pattern and
    /// `RangeError::TimeZone` for an unknown zone.
    pub fn render(&self, instant: &Instant, spec: &FormatSpec, timezone: Option<&str>) -> Result<String> {
        let pattern = match spec {
            FormatSpec::Named(name) => self.resolver.resolve_or_fallback(name),
            FormatSpec::Custom(pattern) => pattern.as_str(),
        };
        instant.format(pattern, timezone)
    }

    /// One line per configured slot showing `sample` rendered with it, plus
    /// the zone override when set.
    ///
    /// # Errors
    ///
    /// Propagates rendering errors from the configured formats.
    pub fn settings_summary(&self, sample: &Instant) -> Result<Vec<String>> {
        let timezone = self.settings.timezone();
        let mut summary = match &self.settings.policy {
            RangePolicy::PerClass(config) => ProximityClass::ALL
                .iter()
                .map(|class| -> Result<String> {
                    let (start_spec, end_spec, separator) = config.specs_for(*class);
                    let range = FormattedRange::new(
                        self.render_optional(sample, start_spec.as_ref(), timezone)?,
                        self.render_optional(sample, end_spec.as_ref(), timezone)?,
                        separator,
                    );
                    Ok(format!("{class}: {range}"))
                })
                .collect::<Result<Vec<_>>>()?,
            RangePolicy::Cascade(formats) => cascade_slots(formats)
                .into_iter()
                .map(|(slot, pattern)| -> Result<String> {
                    let text = self.render_optional(sample, custom(pattern).as_ref(), timezone)?;
                    Ok(format!("{slot}: {text}"))
                })
                .collect::<Result<Vec<_>>>()?,
        };
        if let Some(timezone) = timezone {
            summary.push(format!("Time zone: {timezone}"));
        }
        Ok(summary)
    }

    fn format_cascade(
        &self,
        start: &Instant,
        end: &Instant,
        class: ProximityClass,
        formats: &CascadeFormats,
        timezone: Option<&str>,
    ) -> Result<FormattedRange> {
        // Hour granularity is not distinguished here; same-hour pairs take
        // the same-day slot.
        let (start_pattern, end_pattern) = match class {
            ProximityClass::Exact => (formats.single_time.as_str(), ""),
            ProximityClass::SameHour | ProximityClass::SameDay => (formats.same_day.as_str(), ""),
            ProximityClass::SameMonth => (formats.same_month_start.as_str(), formats.end_date.as_str()),
            ProximityClass::SameYear => (formats.same_year_start.as_str(), formats.end_date.as_str()),
            ProximityClass::Distinct => (formats.end_date.as_str(), formats.end_date.as_str()),
        };
        Ok(FormattedRange::new(
            self.render_optional(start, custom(start_pattern).as_ref(), timezone)?,
            self.render_optional(end, custom(end_pattern).as_ref(), timezone)?,
            formats.separator.as_str(),
        ))
    }

    fn format_per_class(
        &self,
        start: &Instant,
        end: &Instant,
        class: ProximityClass,
        config: &RangeFormatConfig,
        timezone: Option<&str>,
    ) -> Result<FormattedRange> {
        let (start_spec, end_spec, separator) = config.specs_for(class);
        Ok(FormattedRange::new(
            self.render_optional(start, start_spec.as_ref(), timezone)?,
            self.render_optional(end, end_spec.as_ref(), timezone)?,
            separator,
        ))
    }

    fn render_optional(
        &self,
        instant: &Instant,
        spec: Option<&FormatSpec>,
        timezone: Option<&str>,
    ) -> Result<String> {
        match spec {
            Some(spec) => self.render(instant, spec, timezone),
            None => Ok(String::new()),
        }
    }
}

impl DateRangeFormatter<FormatRegistry> {
    /// Creates a formatter with the standard registry extended by any named
    /// formats in `settings`.
    ///
    /// Unlike [`DateRangeFormatterBuilder::build`], this does not call
    /// [`FormatterSettings::validate`]: an unknown zone override surfaces as
    /// `RangeError::TimeZone` from each format call instead.
    pub fn new(settings: FormatterSettings) -> Self {
        let mut registry = FormatRegistry::default();
        registry.extend_from_settings(&settings);
        Self::with_resolver(registry, settings)
    }
}

impl Default for DateRangeFormatter<FormatRegistry> {
    fn default() -> Self {
        Self::new(FormatterSettings::default())
    }
}

fn custom(pattern: &str) -> Option<FormatSpec> {
    FormatKind::Custom.spec(pattern)
}

fn cascade_slots(formats: &CascadeFormats) -> [(&'static str, &str); 5] {
    [
        ("single_time", formats.single_time.as_str()),
        ("same_day", formats.same_day.as_str()),
        ("same_month_start", formats.same_month_start.as_str()),
        ("same_year_start", formats.same_year_start.as_str()),
        ("end_date", formats.end_date.as_str()),
    ]
}
