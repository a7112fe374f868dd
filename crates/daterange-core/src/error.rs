//! Error types for the date range library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all date range operations.
///
/// Classification never fails; every variant here comes from rendering an
/// instant, resolving a time zone, or loading settings.
#[derive(Error, Debug)]
pub enum RangeError {
    /// A strftime pattern could not be rendered
    #[error("Invalid format pattern '{pattern}': {source}")]
    Format {
        pattern: String,
        #[source]
        source: jiff::Error,
    },
    /// Unknown or unloadable time zone
    #[error("Unknown time zone '{name}': {source}")]
    TimeZone {
        name: String,
        #[source]
        source: jiff::Error,
    },
    /// Text that could not be read as the expected value
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Settings file could not be read or written
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Settings JSON did not match the expected shape
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Settings parsed but are unusable, e.g. an unknown override zone
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for [`RangeError::InvalidInput`], naming the field first.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Finishes the error.
    pub fn with_reason(self, reason: impl Into<String>) -> RangeError {
        RangeError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl RangeError {
    /// Starts an `InvalidInput` error for `field`.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a jiff error raised while rendering `pattern`.
    pub fn format(pattern: impl Into<String>, source: jiff::Error) -> Self {
        RangeError::Format {
            pattern: pattern.into(),
            source,
        }
    }

    /// Wraps a jiff error raised while loading the zone `name`.
    pub fn time_zone(name: impl Into<String>, source: jiff::Error) -> Self {
        RangeError::TimeZone {
            name: name.into(),
            source,
        }
    }
}

/// Result type alias for date range operations
pub type Result<T> = std::result::Result<T, RangeError>;
