use serde::{Deserialize, Serialize};

use crate::diagnostics::{into_result, ValidationMessage};

/// Named ice/wind/temperature loading scenario.
///
/// Analysis code holds these behind `Arc` and refers to them by position in
/// the bound weathercase list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherLoadCase {
    pub description: String,
    /// Radial ice thickness.
    pub thickness_ice: f64,
    /// Ice density (weight per unit volume).
    pub density_ice: f64,
    /// Wind pressure on the iced projected area.
    pub pressure_wind: f64,
    /// Cable temperature.
    pub temperature_cable: f64,
}

impl WeatherLoadCase {
    /// Bare-cable case at the given temperature.
    pub fn new(description: impl Into<String>, temperature_cable: f64) -> Self {
        Self {
            description: description.into(),
            thickness_ice: 0.0,
            density_ice: 0.0,
            pressure_wind: 0.0,
            temperature_cable,
        }
    }

    pub fn with_ice(mut self, thickness: f64, density: f64) -> Self {
        self.thickness_ice = thickness;
        self.density_ice = density;
        self
    }

    pub fn with_wind(mut self, pressure: f64) -> Self {
        self.pressure_wind = pressure;
        self
    }

    pub fn validate(&self, include_warnings: bool) -> Result<(), Vec<ValidationMessage>> {
        const TITLE: &str = "WEATHER LOAD CASE";
        let mut messages = Vec::new();

        if self.description.trim().is_empty() {
            messages.push(ValidationMessage::error(TITLE, "Invalid description"));
        }
        if self.thickness_ice < 0.0 {
            messages.push(ValidationMessage::error(TITLE, "Invalid ice thickness"));
        }
        if self.density_ice < 0.0 {
            messages.push(ValidationMessage::error(TITLE, "Invalid ice density"));
        }
        if self.pressure_wind < 0.0 {
            messages.push(ValidationMessage::error(TITLE, "Invalid wind pressure"));
        }

        if include_warnings && !(-50.0..=250.0).contains(&self.temperature_cable) {
            messages.push(ValidationMessage::warning(
                TITLE,
                format!(
                    "Cable temperature {} is outside the expected range",
                    self.temperature_cable
                ),
            ));
        }

        into_result(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_case_validates() {
        let case = WeatherLoadCase::new("0-0-60", 60.0);
        assert!(case.validate(true).is_ok());
    }

    #[test]
    fn collects_all_errors() {
        let mut case = WeatherLoadCase::new("", 60.0).with_ice(-0.5, 57.0);
        case.pressure_wind = -4.0;
        let messages = case.validate(false).unwrap_err();
        assert_eq!(messages.len(), 3);
    }

    #[test]
    fn temperature_check_only_with_warnings() {
        let case = WeatherLoadCase::new("hot", 400.0);
        assert!(case.validate(false).is_ok());
        assert_eq!(case.validate(true).unwrap_err().len(), 1);
    }
}
