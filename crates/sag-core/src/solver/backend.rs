use crate::cable::LineCable;
use crate::condition::Condition;
use crate::error::SagResult;
use crate::geometry::Vector3d;
use crate::result::{CableState, StretchState, TensionComponents};
use crate::weather::WeatherLoadCase;

/// Read-only inputs every solver instance for a span is built from.
///
/// Shared by reference across all worker threads of a run.
#[derive(Debug, Clone, Copy)]
pub struct SolverInputs<'a> {
    pub line_cable: &'a LineCable,
    pub spacing: &'a Vector3d,
}

/// Loaded-cable quantities for one weathercase and condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReloadOutput {
    pub tension_horizontal: TensionComponents,
    pub tension_average: TensionComponents,
    pub weight_unit: Vector3d,
    pub state: CableState,
}

/// Never-loaded cable quantities for one weathercase and condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnloadOutput {
    pub length_unloaded: f64,
}

/// Solves the cable reloaded to a weathercase from the constraint state.
///
/// An instance is owned by exactly one worker and reused for that worker's
/// jobs, so implementations may keep internal caches between calls. Each
/// call must still behave as a function of its arguments and the inputs the
/// instance was built from.
pub trait Reloader: Send {
    /// Configure for the weathercase and condition, validate, and solve.
    ///
    /// A failed validation is reported as [`crate::SagError::Validation`]
    /// whose messages name the weathercase description and condition.
    fn solve(&mut self, weathercase: &WeatherLoadCase, condition: Condition)
        -> SagResult<ReloadOutput>;

    /// Stretch accumulated for `condition` by the span's stretch weathercases.
    fn stretch_state(&self, condition: Condition) -> StretchState;
}

/// Solves the unloaded (zero tension) cable length.
pub trait Unloader: Send {
    fn solve(&mut self, weathercase: &WeatherLoadCase, condition: Condition)
        -> SagResult<UnloadOutput>;
}

/// Factory for the per-worker solver pair.
pub trait SolverBackend: Send + Sync {
    type Reloader: Reloader;
    type Unloader: Unloader;

    /// Short identifier used in logs and reports.
    fn name(&self) -> &str;

    fn reloader(&self, inputs: SolverInputs<'_>) -> Self::Reloader;

    fn unloader(&self, inputs: SolverInputs<'_>) -> Self::Unloader;
}
