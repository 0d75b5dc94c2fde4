//! Error types for configuration and replay.
//!
//! The interaction engine never fails: invalid requests are absorbed as
//! no-ops. Errors only arise when loading configuration or replay scripts.

use thiserror::Error;

/// Errors that can occur while loading configuration or replay input
#[derive(Error, Debug)]
pub enum CarouselError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is out of its allowed range
    #[error("Invalid config value for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

/// Result type alias for configuration and replay operations
pub type CarouselResult<T> = Result<T, CarouselError>;

impl CarouselError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CarouselError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
