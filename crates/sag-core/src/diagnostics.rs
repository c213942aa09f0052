//! Validation messages produced by model and solver checks.
//!
//! Every `validate` method in this workspace collects all of its failures
//! into a `Vec<ValidationMessage>` rather than returning at the first one, so
//! that a user fixing a span sees the complete list in one pass.
//!
//! # Example
//!
//! ```
//! use sag_core::diagnostics::{Severity, ValidationMessage};
//!
//! let msg = ValidationMessage::error("SPAN", "Invalid horizontal spacing");
//! assert_eq!(msg.severity, Severity::Error);
//! assert_eq!(msg.to_string(), "[error] SPAN: Invalid horizontal spacing");
//! ```

use serde::{Deserialize, Serialize};

/// Severity level for validation messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Only reported when warnings are included in validation
    Warning,
    /// Always fails validation
    Error,
}

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationMessage {
    /// Severity of the failed check
    pub severity: Severity,
    /// Component that failed (e.g., "SPAN", "CABLE", "WEATHER LOAD CASE")
    pub title: String,
    /// Human-readable description of the failure
    pub description: String,
}

impl ValidationMessage {
    pub fn new(
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, description)
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Warning, title, description)
    }
}

impl std::fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let severity = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "[{}] {}: {}", severity, self.title, self.description)
    }
}

/// Turn a collected message list into the `validate` return shape.
pub(crate) fn into_result(messages: Vec<ValidationMessage>) -> Result<(), Vec<ValidationMessage>> {
    if messages.is_empty() {
        Ok(())
    } else {
        Err(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_severity_and_title() {
        let msg = ValidationMessage::warning("CABLE", "Limit exceeds rated strength");
        assert_eq!(
            msg.to_string(),
            "[warning] CABLE: Limit exceeds rated strength"
        );
    }

    #[test]
    fn empty_list_is_ok() {
        assert!(into_result(Vec::new()).is_ok());
        let err = into_result(vec![ValidationMessage::error("SPAN", "x")]).unwrap_err();
        assert_eq!(err.len(), 1);
    }
}
