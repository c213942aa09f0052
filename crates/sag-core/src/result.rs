//! Per-weathercase result records.
//!
//! A [`SagTensionResult`] is either fully populated for one condition or a
//! sentinel. Sentinels keep their slot in a result vector so that index `i`
//! always lines up with weathercase `i`, but they must never be shown as a
//! valid solution.

use serde::{Deserialize, Serialize};

use crate::condition::Condition;
use crate::geometry::Vector3d;

/// Out-of-range marker written into every numeric field of a sentinel.
pub const INVALID_VALUE: f64 = -999999.0;

/// Tension split between the whole cable and its core/shell materials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TensionComponents {
    pub total: f64,
    pub core: f64,
    pub shell: f64,
}

impl TensionComponents {
    pub const INVALID: Self = Self {
        total: INVALID_VALUE,
        core: INVALID_VALUE,
        shell: INVALID_VALUE,
    };
}

/// Which elongation polynomial governs a stretched state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolynomialKind {
    Creep,
    #[default]
    LoadStrain,
}

/// Thermal/elongation state of the cable at a solved weathercase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CableState {
    pub temperature: f64,
    pub polynomial: PolynomialKind,
}

/// Accumulated permanent stretch for a condition.
///
/// The default value is the unstretched cable.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StretchState {
    /// Load that produced the stretch.
    pub load: f64,
    /// Temperature at which the stretching load was applied.
    pub temperature: f64,
    pub polynomial: PolynomialKind,
}

/// Solved sag-tension quantities for one weathercase and condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SagTensionResult {
    pub condition: Condition,
    pub length_unloaded: f64,
    pub state: CableState,
    pub tension_horizontal: TensionComponents,
    pub tension_average: TensionComponents,
    /// Unit load including ice and wind.
    pub weight_unit: Vector3d,
}

impl SagTensionResult {
    /// Placeholder for a slot whose solve failed or has not run.
    pub fn sentinel() -> Self {
        Self {
            condition: Condition::Null,
            length_unloaded: INVALID_VALUE,
            state: CableState {
                temperature: INVALID_VALUE,
                polynomial: PolynomialKind::LoadStrain,
            },
            tension_horizontal: TensionComponents::INVALID,
            tension_average: TensionComponents::INVALID,
            weight_unit: Vector3d::zeros(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.condition.is_null()
    }
}

impl Default for SagTensionResult {
    fn default() -> Self {
        Self::sentinel()
    }
}
