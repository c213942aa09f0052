//! Sample data and a deterministic solver double for tests.
//!
//! [`StubBackend`] produces tensions from simple closed-form expressions of
//! the weathercase loading. It is not a catenary model; it exists so that
//! analysis services can be exercised end to end without linking a physical
//! solver.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::cable::{Cable, CableConstraint, ConstraintLimitKind, LineCable};
use crate::condition::Condition;
use crate::diagnostics::ValidationMessage;
use crate::error::{SagError, SagResult};
use crate::geometry::Vector3d;
use crate::result::{CableState, PolynomialKind, StretchState, TensionComponents};
use crate::solver::{ReloadOutput, Reloader, SolverBackend, SolverInputs, UnloadOutput, Unloader};
use crate::span::Span;
use crate::weather::WeatherLoadCase;

/// A valid level span strung with a Drake-sized conductor.
pub fn sample_span() -> Span {
    let cable = Cable {
        name: "Drake ACSR".to_string(),
        diameter: 1.108,
        area_physical: 0.7264,
        weight_unit: 1.094,
        strength_rated: 31_200.0,
    };
    let constraint = CableConstraint {
        case_weather: Some(Arc::new(WeatherLoadCase::new("Constraint 60", 60.0))),
        condition: Condition::Initial,
        limit: 6_000.0,
        kind: ConstraintLimitKind::HorizontalTension,
    };
    Span {
        name: "Span 1".to_string(),
        line_cable: LineCable {
            cable: Arc::new(cable),
            constraint,
            weathercase_stretch_creep: Some(Arc::new(WeatherLoadCase::new("Creep 60", 60.0))),
            weathercase_stretch_load: Some(Arc::new(
                WeatherLoadCase::new("NESC Heavy", 0.0)
                    .with_ice(0.5, 57.0)
                    .with_wind(4.0),
            )),
        },
        spacing_attachments: Vector3d::new(1200.0, 0.0, 0.0),
    }
}

/// `count` distinct weathercases named `"Case 0"`, `"Case 1"`, ...
pub fn sample_weathercases(count: usize) -> Vec<Arc<WeatherLoadCase>> {
    (0..count)
        .map(|i| {
            let temperature = -20.0 + 20.0 * i as f64;
            let case = WeatherLoadCase::new(format!("Case {i}"), temperature);
            let case = if i % 2 == 1 {
                case.with_ice(0.25, 57.0).with_wind(2.0)
            } else {
                case
            };
            Arc::new(case)
        })
        .collect()
}

/// Deterministic [`SolverBackend`] with scripted failures.
#[derive(Debug, Clone, Default)]
pub struct StubBackend {
    failures: Arc<Vec<(String, Condition)>>,
    panic_on: Option<Arc<str>>,
    instances: Arc<AtomicUsize>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail validation for one weathercase description and condition.
    pub fn failing_on(mut self, description: impl Into<String>, condition: Condition) -> Self {
        let mut failures = (*self.failures).clone();
        failures.push((description.into(), condition));
        self.failures = Arc::new(failures);
        self
    }

    /// Panic inside the reloader when this weathercase is solved.
    pub fn panicking_on(mut self, description: &str) -> Self {
        self.panic_on = Some(Arc::from(description));
        self
    }

    /// Number of reloader instances built so far.
    pub fn instances(&self) -> usize {
        self.instances.load(Ordering::SeqCst)
    }
}

impl SolverBackend for StubBackend {
    type Reloader = StubReloader;
    type Unloader = StubUnloader;

    fn name(&self) -> &str {
        "stub"
    }

    fn reloader(&self, inputs: SolverInputs<'_>) -> StubReloader {
        self.instances.fetch_add(1, Ordering::SeqCst);
        let line_cable = inputs.line_cable;
        StubReloader {
            limit: line_cable.constraint.limit,
            diameter: line_cable.cable.diameter,
            weight_bare: line_cable.cable.weight_unit,
            temperature_creep: line_cable
                .weathercase_stretch_creep
                .as_ref()
                .map_or(0.0, |case| case.temperature_cable),
            temperature_load: line_cable
                .weathercase_stretch_load
                .as_ref()
                .map_or(0.0, |case| case.temperature_cable),
            failures: Arc::clone(&self.failures),
            panic_on: self.panic_on.clone(),
        }
    }

    fn unloader(&self, inputs: SolverInputs<'_>) -> StubUnloader {
        StubUnloader {
            length_span: inputs.spacing.magnitude(),
        }
    }
}

#[derive(Debug)]
pub struct StubReloader {
    limit: f64,
    diameter: f64,
    weight_bare: f64,
    temperature_creep: f64,
    temperature_load: f64,
    failures: Arc<Vec<(String, Condition)>>,
    panic_on: Option<Arc<str>>,
}

fn condition_factor(condition: Condition) -> f64 {
    match condition {
        Condition::Creep => 0.90,
        Condition::Initial => 1.00,
        Condition::Load => 0.95,
        Condition::Null => 0.0,
    }
}

impl Reloader for StubReloader {
    fn solve(
        &mut self,
        weathercase: &WeatherLoadCase,
        condition: Condition,
    ) -> SagResult<ReloadOutput> {
        if self.panic_on.as_deref() == Some(weathercase.description.as_str()) {
            panic!("stub reloader asked to panic on {}", weathercase.description);
        }
        let scripted = self
            .failures
            .iter()
            .any(|(description, c)| *description == weathercase.description && *c == condition);
        if scripted || condition.is_null() {
            return Err(SagError::Validation(vec![ValidationMessage::error(
                "CATENARY CABLE RELOADER",
                format!(
                    "{} {}: horizontal tension did not converge",
                    weathercase.description, condition
                ),
            )]));
        }

        let t = weathercase.thickness_ice;
        let weight_ice =
            weathercase.density_ice * std::f64::consts::PI * t * (self.diameter + t) / 144.0;
        let weight_wind = weathercase.pressure_wind * (self.diameter + 2.0 * t) / 12.0;
        let weight_unit = Vector3d::new(0.0, weight_wind, self.weight_bare + weight_ice);

        let total = self.limit
            * condition_factor(condition)
            * (weight_unit.magnitude() / self.weight_bare)
            - 10.0 * weathercase.temperature_cable;
        let horizontal = TensionComponents {
            total,
            core: total * 0.3,
            shell: total * 0.7,
        };
        let average = TensionComponents {
            total: horizontal.total * 1.01,
            core: horizontal.core * 1.01,
            shell: horizontal.shell * 1.01,
        };

        Ok(ReloadOutput {
            tension_horizontal: horizontal,
            tension_average: average,
            weight_unit,
            state: CableState {
                temperature: weathercase.temperature_cable,
                polynomial: if condition == Condition::Creep {
                    PolynomialKind::Creep
                } else {
                    PolynomialKind::LoadStrain
                },
            },
        })
    }

    fn stretch_state(&self, condition: Condition) -> StretchState {
        match condition {
            Condition::Creep => StretchState {
                load: self.limit * 0.6,
                temperature: self.temperature_creep,
                polynomial: PolynomialKind::Creep,
            },
            Condition::Load => StretchState {
                load: self.limit * 1.4,
                temperature: self.temperature_load,
                polynomial: PolynomialKind::LoadStrain,
            },
            Condition::Initial | Condition::Null => StretchState::default(),
        }
    }
}

#[derive(Debug)]
pub struct StubUnloader {
    length_span: f64,
}

impl Unloader for StubUnloader {
    fn solve(
        &mut self,
        weathercase: &WeatherLoadCase,
        condition: Condition,
    ) -> SagResult<UnloadOutput> {
        let stretch = match condition {
            Condition::Creep => 0.0008,
            Condition::Load => 0.0005,
            _ => 0.0,
        };
        Ok(UnloadOutput {
            length_unloaded: self.length_span
                * (1.0 + stretch - 1.0e-5 * weathercase.temperature_cable),
        })
    }
}
