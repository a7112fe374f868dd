//! Display wrappers for presenting classes, summaries and rendered ranges.
//!
//! Domain values ([`ProximityClass`](crate::models::ProximityClass),
//! [`FormattedRange`](crate::models::FormattedRange)) implement
//! [`std::fmt::Display`] for their plain text form. The wrappers here add
//! context-specific output:
//!
//! - [`ClassList`]: markdown list of proximity classes and their labels
//! - [`SettingsSummary`]: markdown list of summary lines with an optional title
//! - [`TimeElement`] / [`RangeMarkup`]: HTML `<time>` elements carrying the
//!   UTC timestamp in their `datetime` attribute
//!
//! All wrappers hold references and render through `Display`, so they can be
//! written to any formatter without intermediate allocation.

pub mod classes;
pub mod summary;
pub mod time_element;

pub use classes::ClassList;
pub use summary::SettingsSummary;
pub use time_element::{RangeMarkup, TimeElement};
