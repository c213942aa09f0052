//! Error types for analysis controller operations.

use sag_core::ValidationMessage;
use thiserror::Error;

/// Result type for analysis controller operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from analysis controller operations.
///
/// Per-job solver failures are not errors at this level; they are reported
/// through [`crate::AnalysisSummary`] and sentinel results.
#[derive(Debug, Error)]
pub enum Error {
    /// No span is bound to the controller.
    #[error("no span bound")]
    NoSpanBound,

    /// The bound span failed validation, so no job was generated.
    #[error("span failed validation with {} message(s)", .0.len())]
    InvalidSpan(Vec<ValidationMessage>),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
