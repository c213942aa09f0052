use serde::{Deserialize, Serialize};

use crate::cable::LineCable;
use crate::diagnostics::{into_result, ValidationMessage};
use crate::geometry::Vector3d;

/// A single span of line cable between two attachment points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub name: String,
    pub line_cable: LineCable,
    /// Offset from the back attachment to the ahead attachment.
    pub spacing_attachments: Vector3d,
}

impl Span {
    /// Validate the span and its line cable.
    ///
    /// Warning-tier checks only run when `include_warnings` is set; a failed
    /// warning check still fails validation.
    pub fn validate(&self, include_warnings: bool) -> Result<(), Vec<ValidationMessage>> {
        const TITLE: &str = "SPAN";
        let mut messages = Vec::new();

        if self.name.trim().is_empty() {
            messages.push(ValidationMessage::error(TITLE, "Invalid name"));
        }
        if self.spacing_attachments.x <= 0.0 {
            messages.push(ValidationMessage::error(
                TITLE,
                "Invalid horizontal attachment spacing",
            ));
        }
        messages.extend(self.line_cable.collect_messages(include_warnings));

        if include_warnings && self.spacing_attachments.z.abs() > self.spacing_attachments.x {
            messages.push(ValidationMessage::warning(
                TITLE,
                "Vertical attachment spacing exceeds horizontal spacing",
            ));
        }

        into_result(messages)
    }
}
