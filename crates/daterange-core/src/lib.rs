//! Core library for compact, proximity-aware date range formatting.
//!
//! Given a start and end instant, this crate decides how close together they
//! are (same second, hour, day, month, year, or none of these) and renders
//! the pair with formats chosen for that closeness, e.g. `5 - 25 Jun 2023`
//! instead of `5 Jun 2023 - 25 Jun 2023`.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): instants, proximity classes, format specs and
//!   formatted output, all plain immutable values
//! - **Classifier** ([`classifier`]): the ordered proximity predicates
//! - **Registry** ([`registry`]): named formats behind the
//!   [`FormatResolver`] seam
//! - **Settings** ([`settings`]): serde-backed policy and format tables
//! - **Formatter** ([`formatter`]): the cascade and per-class strategies
//! - **Display** ([`display`]): markdown and HTML presentation wrappers
//!
//! Everything is synchronous and side-effect free apart from optional
//! settings file IO in the builder.
//!
//! # Quick Start
//!
//! ```rust
//! use daterange_core::{
//!     DateRangeFormatterBuilder, ProximityClass,
//!     models::Instant,
//!     settings::{CascadeFormats, FormatterSettings, RangePolicy},
//! };
//!
//! let formatter = DateRangeFormatterBuilder::new()
//!     .with_settings(FormatterSettings::new(RangePolicy::Cascade(CascadeFormats::default())))
//!     .build()?;
//!
//! let start = Instant::parse("2023-01-01T00:00:00Z")?;
//! let end = Instant::parse("2023-12-31T00:00:00Z")?;
//!
//! assert_eq!(formatter.classify(&start, &end), ProximityClass::SameYear);
//! assert_eq!(formatter.format(&start, &end)?.to_string(), "1 Jan - 31 Dec 2023");
//! # Ok::<(), daterange_core::RangeError>(())
//! ```

pub mod classifier;
pub mod display;
pub mod error;
pub mod formatter;
pub mod models;
pub mod registry;
pub mod settings;

// Re-export commonly used types
pub use classifier::Classifier;
pub use display::{ClassList, RangeMarkup, SettingsSummary, TimeElement};
pub use error::{RangeError, Result};
pub use formatter::{DateRangeFormatter, DateRangeFormatterBuilder};
pub use models::{FormatKind, FormatSpec, FormattedRange, Instant, ProximityClass};
pub use registry::{FormatOption, FormatRegistry, FormatResolver, NamedFormat};
pub use settings::{
    CascadeFormats, ClassFormats, FormatterSettings, RangeFormatConfig, RangePolicy,
};
