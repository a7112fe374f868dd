//! Data models for instants, proximity classes and formatted ranges.
//!
//! These are plain values constructed per call. Nothing here caches or
//! mutates shared state, so every type can be freely cloned and sent across
//! threads.
//!
//! - [`Instant`]: a point in time carrying its own zone
//! - [`ProximityClass`]: the six buckets a start/end pair can fall into
//! - [`FormatSpec`] / [`FormatKind`]: named or literal format descriptors
//! - [`FormattedRange`]: the rendered start and end text
//!
//! # Examples
//!
//! ```rust
//! use daterange_core::models::{Instant, ProximityClass};
//!
//! let start = Instant::parse("2023-06-05T00:00:00Z").unwrap();
//! assert_eq!(start.month(), 6);
//! assert_eq!(ProximityClass::ALL.len(), 6);
//! ```

pub mod format;
pub mod instant;
pub mod proximity;
pub mod range;

#[cfg(test)]
mod tests;

pub use format::{FormatKind, FormatSpec};
pub use instant::{resolve_time_zone, Instant};
pub use proximity::ProximityClass;
pub use range::FormattedRange;
