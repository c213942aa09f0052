//! Cable and line-cable definitions.
//!
//! A [`LineCable`] is the cable as strung on a line: the catalog [`Cable`],
//! the design constraint that fixes its tension, and the two weathercases
//! whose loading defines creep and load stretch.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::condition::Condition;
use crate::diagnostics::{into_result, ValidationMessage};
use crate::weather::WeatherLoadCase;

/// Catalog cable properties consumed by solvers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cable {
    pub name: String,
    pub diameter: f64,
    pub area_physical: f64,
    /// Bare weight per unit length.
    pub weight_unit: f64,
    pub strength_rated: f64,
}

impl Cable {
    pub fn validate(&self, _include_warnings: bool) -> Result<(), Vec<ValidationMessage>> {
        into_result(self.collect_messages())
    }

    fn collect_messages(&self) -> Vec<ValidationMessage> {
        const TITLE: &str = "CABLE";
        let mut messages = Vec::new();
        if self.name.trim().is_empty() {
            messages.push(ValidationMessage::error(TITLE, "Invalid name"));
        }
        if self.diameter <= 0.0 {
            messages.push(ValidationMessage::error(TITLE, "Invalid diameter"));
        }
        if self.area_physical <= 0.0 {
            messages.push(ValidationMessage::error(TITLE, "Invalid physical area"));
        }
        if self.weight_unit <= 0.0 {
            messages.push(ValidationMessage::error(TITLE, "Invalid unit weight"));
        }
        if self.strength_rated <= 0.0 {
            messages.push(ValidationMessage::error(TITLE, "Invalid rated strength"));
        }
        messages
    }
}

/// Quantity the constraint limit is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstraintLimitKind {
    CatenaryConstant,
    HorizontalTension,
    SupportTension,
}

/// Design limit that sets the cable tension for one weathercase and condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableConstraint {
    pub case_weather: Option<Arc<WeatherLoadCase>>,
    pub condition: Condition,
    pub limit: f64,
    pub kind: ConstraintLimitKind,
}

/// Cable as strung on a line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineCable {
    pub cable: Arc<Cable>,
    pub constraint: CableConstraint,
    pub weathercase_stretch_creep: Option<Arc<WeatherLoadCase>>,
    pub weathercase_stretch_load: Option<Arc<WeatherLoadCase>>,
}

impl LineCable {
    pub fn validate(&self, include_warnings: bool) -> Result<(), Vec<ValidationMessage>> {
        into_result(self.collect_messages(include_warnings))
    }

    pub(crate) fn collect_messages(&self, include_warnings: bool) -> Vec<ValidationMessage> {
        const TITLE: &str = "LINE CABLE";
        let mut messages = self.cable.collect_messages();

        match &self.constraint.case_weather {
            Some(case) => {
                if let Err(case_messages) = case.validate(include_warnings) {
                    messages.extend(case_messages);
                }
            }
            None => messages.push(ValidationMessage::error(
                TITLE,
                "Invalid constraint weathercase",
            )),
        }
        if self.constraint.condition.is_null() {
            messages.push(ValidationMessage::error(TITLE, "Invalid constraint condition"));
        }
        if self.constraint.limit <= 0.0 {
            messages.push(ValidationMessage::error(TITLE, "Invalid constraint limit"));
        }
        if self.weathercase_stretch_creep.is_none() {
            messages.push(ValidationMessage::error(
                TITLE,
                "Invalid creep stretch weathercase",
            ));
        }
        if self.weathercase_stretch_load.is_none() {
            messages.push(ValidationMessage::error(
                TITLE,
                "Invalid load stretch weathercase",
            ));
        }

        if include_warnings
            && self.constraint.kind != ConstraintLimitKind::CatenaryConstant
            && self.constraint.limit > self.cable.strength_rated
        {
            messages.push(ValidationMessage::warning(
                TITLE,
                "Constraint limit exceeds cable rated strength",
            ));
        }

        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_span;

    #[test]
    fn sample_line_cable_is_valid() {
        let span = sample_span();
        assert!(span.line_cable.validate(true).is_ok());
    }

    #[test]
    fn missing_stretch_cases_are_reported() {
        let mut line_cable = sample_span().line_cable;
        line_cable.weathercase_stretch_creep = None;
        line_cable.weathercase_stretch_load = None;
        let messages = line_cable.validate(false).unwrap_err();
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn overstrength_limit_is_a_warning() {
        let mut line_cable = sample_span().line_cable;
        line_cable.constraint.kind = ConstraintLimitKind::HorizontalTension;
        line_cable.constraint.limit = line_cable.cable.strength_rated * 2.0;
        assert!(line_cable.validate(false).is_ok());
        assert!(line_cable.validate(true).is_err());
    }
}
