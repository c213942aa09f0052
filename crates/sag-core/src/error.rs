//! Error type for model and solver operations.
//!
//! Solver backends report a failed configure/validate step as
//! [`SagError::Validation`] carrying the same [`ValidationMessage`] shape the
//! span model uses, so callers can log both kinds uniformly.
//!
//! # Example
//!
//! ```
//! use sag_core::{SagError, SagResult, ValidationMessage};
//!
//! fn solve() -> SagResult<f64> {
//!     Err(SagError::Validation(vec![ValidationMessage::error(
//!         "CATENARY",
//!         "Horizontal tension did not converge",
//!     )]))
//! }
//!
//! assert!(solve().is_err());
//! ```

use thiserror::Error;

use crate::diagnostics::ValidationMessage;

#[derive(Error, Debug)]
pub enum SagError {
    /// One or more validation checks failed
    #[error("Validation error: {}", join_messages(.0))]
    Validation(Vec<ValidationMessage>),

    /// Numeric solver failure outside of validation
    #[error("Solver error: {0}")]
    Solver(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

impl SagError {
    /// Flatten into one display string per underlying message.
    pub fn messages(&self) -> Vec<String> {
        match self {
            SagError::Validation(messages) => messages.iter().map(ToString::to_string).collect(),
            other => vec![other.to_string()],
        }
    }
}

fn join_messages(messages: &[ValidationMessage]) -> String {
    messages
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience type alias for Results using SagError.
pub type SagResult<T> = Result<T, SagError>;

impl From<anyhow::Error> for SagError {
    fn from(err: anyhow::Error) -> Self {
        SagError::Other(err.to_string())
    }
}

impl From<String> for SagError {
    fn from(s: String) -> Self {
        SagError::Other(s)
    }
}

impl From<&str> for SagError {
    fn from(s: &str) -> Self {
        SagError::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_joins_messages() {
        let err = SagError::Validation(vec![
            ValidationMessage::error("CATENARY", "no convergence"),
            ValidationMessage::error("CABLE", "bad polynomial"),
        ]);
        let text = err.to_string();
        assert!(text.contains("Validation error"));
        assert!(text.contains("no convergence"));
        assert!(text.contains("; [error] CABLE"));
    }

    #[test]
    fn test_messages_flattens_each_entry() {
        let err = SagError::Validation(vec![
            ValidationMessage::error("A", "one"),
            ValidationMessage::error("B", "two"),
        ]);
        assert_eq!(err.messages().len(), 2);

        let err = SagError::Solver("diverged".into());
        assert_eq!(err.messages(), vec!["Solver error: diverged".to_string()]);
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: SagError = anyhow::anyhow!("external failure").into();
        assert!(matches!(err, SagError::Other(_)));
    }
}
