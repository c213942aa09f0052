//! Result store for the last completed run.
//!
//! Three parallel vectors, one per analyzed condition, each indexed by
//! weathercase position. Sentinel entries stay in place so indices line up;
//! point queries filter them out, bulk queries return them as-is.

use sag_core::{Condition, SagTensionResult, StretchState};
use serde::{Deserialize, Serialize};

use crate::job::Job;

/// Per-condition result vectors, always of equal length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub creep: Vec<SagTensionResult>,
    pub initial: Vec<SagTensionResult>,
    pub load: Vec<SagTensionResult>,
}

impl ResultSet {
    /// Vectors of `count` sentinels each.
    pub fn sentinels(count: usize) -> Self {
        Self {
            creep: vec![SagTensionResult::sentinel(); count],
            initial: vec![SagTensionResult::sentinel(); count],
            load: vec![SagTensionResult::sentinel(); count],
        }
    }

    /// Length shared by all three vectors.
    pub fn len(&self) -> usize {
        self.creep.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn for_condition(&self, condition: Condition) -> Option<&Vec<SagTensionResult>> {
        match condition {
            Condition::Creep => Some(&self.creep),
            Condition::Initial => Some(&self.initial),
            Condition::Load => Some(&self.load),
            Condition::Null => None,
        }
    }

    fn for_condition_mut(&mut self, condition: Condition) -> Option<&mut Vec<SagTensionResult>> {
        match condition {
            Condition::Creep => Some(&mut self.creep),
            Condition::Initial => Some(&mut self.initial),
            Condition::Load => Some(&mut self.load),
            Condition::Null => None,
        }
    }

    /// Write a result into the slot owned by `job`.
    ///
    /// Returns false if the job names a slot outside the vectors.
    pub fn write(&mut self, job: &Job, result: SagTensionResult) -> bool {
        match self
            .for_condition_mut(job.condition)
            .and_then(|results| results.get_mut(job.slot))
        {
            Some(slot) => {
                *slot = result;
                true
            }
            None => false,
        }
    }

    /// Number of sentinel entries across all conditions.
    pub fn sentinel_count(&self) -> usize {
        [&self.creep, &self.initial, &self.load]
            .iter()
            .flat_map(|results| results.iter())
            .filter(|result| !result.is_valid())
            .count()
    }
}

/// Stretch states sampled from one reloader after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StretchSample {
    pub creep: StretchState,
    pub initial: StretchState,
    pub load: StretchState,
}

impl StretchSample {
    pub fn for_condition(&self, condition: Condition) -> Option<StretchState> {
        match condition {
            Condition::Creep => Some(self.creep),
            Condition::Initial => Some(self.initial),
            Condition::Load => Some(self.load),
            Condition::Null => None,
        }
    }
}

/// Cached results of the most recent completed run.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    results: ResultSet,
    stretch: StretchSample,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all contents with a finished run. Nothing is merged.
    pub fn replace(&mut self, results: ResultSet, stretch: Option<StretchSample>) {
        self.results = results;
        self.stretch = stretch.unwrap_or_default();
    }

    /// Empty all vectors and reset stretch states to defaults.
    pub fn clear(&mut self) {
        self.results = ResultSet::default();
        self.stretch = StretchSample::default();
    }

    /// Length of each condition vector.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Valid result for a weathercase and condition.
    ///
    /// `None` for an out-of-range index, the `Null` condition, or a sentinel.
    pub fn result(&self, index: usize, condition: Condition) -> Option<&SagTensionResult> {
        self.results
            .for_condition(condition)?
            .get(index)
            .filter(|result| result.is_valid())
    }

    /// Whole vector for a condition, sentinels included.
    pub fn results(&self, condition: Condition) -> Option<&[SagTensionResult]> {
        self.results.for_condition(condition).map(Vec::as_slice)
    }

    /// Cached stretch state, if the store is sized for `weathercase_count`.
    pub fn stretch_state(
        &self,
        condition: Condition,
        weathercase_count: usize,
    ) -> Option<StretchState> {
        if self.len() != weathercase_count {
            return None;
        }
        self.stretch.for_condition(condition)
    }

    pub fn result_set(&self) -> &ResultSet {
        &self.results
    }

    pub fn stretch_sample(&self) -> &StretchSample {
        &self.stretch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sag_core::{CableState, PolynomialKind, TensionComponents, Vector3d};

    fn valid(condition: Condition, tension: f64) -> SagTensionResult {
        SagTensionResult {
            condition,
            length_unloaded: 1200.0,
            state: CableState {
                temperature: 60.0,
                polynomial: PolynomialKind::LoadStrain,
            },
            tension_horizontal: TensionComponents {
                total: tension,
                core: tension * 0.3,
                shell: tension * 0.7,
            },
            tension_average: TensionComponents {
                total: tension,
                core: tension * 0.3,
                shell: tension * 0.7,
            },
            weight_unit: Vector3d::new(0.0, 0.0, 1.094),
        }
    }

    fn populated() -> ResultStore {
        let mut set = ResultSet::sentinels(2);
        let job = Job {
            weathercase: 1,
            condition: Condition::Load,
            slot: 1,
        };
        assert!(set.write(&job, valid(Condition::Load, 5000.0)));
        let mut store = ResultStore::new();
        store.replace(
            set,
            Some(StretchSample {
                creep: StretchState {
                    load: 3600.0,
                    temperature: 60.0,
                    polynomial: PolynomialKind::Creep,
                },
                ..StretchSample::default()
            }),
        );
        store
    }

    #[test]
    fn point_query_filters_sentinels_and_bounds() {
        let store = populated();
        assert!(store.result(1, Condition::Load).is_some());
        assert!(store.result(0, Condition::Load).is_none());
        assert!(store.result(2, Condition::Load).is_none());
        assert!(store.result(1, Condition::Null).is_none());
    }

    #[test]
    fn bulk_query_keeps_sentinels() {
        let store = populated();
        let load = store.results(Condition::Load).unwrap();
        assert_eq!(load.len(), 2);
        assert!(!load[0].is_valid());
        assert!(store.results(Condition::Null).is_none());
    }

    #[test]
    fn stretch_state_requires_matching_size() {
        let store = populated();
        assert_eq!(store.stretch_state(Condition::Creep, 2).unwrap().load, 3600.0);
        assert!(store.stretch_state(Condition::Creep, 3).is_none());
        assert!(store.stretch_state(Condition::Null, 2).is_none());
    }

    #[test]
    fn clear_resets_everything() {
        let mut store = populated();
        store.clear();
        assert!(store.is_empty());
        assert!(store.results(Condition::Creep).unwrap().is_empty());
        assert_eq!(store.stretch_sample(), &StretchSample::default());
    }

    #[test]
    fn write_rejects_out_of_range_slot() {
        let mut set = ResultSet::sentinels(1);
        let job = Job {
            weathercase: 3,
            condition: Condition::Creep,
            slot: 3,
        };
        assert!(!set.write(&job, valid(Condition::Creep, 1.0)));
        assert_eq!(set.sentinel_count(), 3);
    }
}
