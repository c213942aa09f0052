//! Job descriptors and job generation.
//!
//! A run analyzes every bound weathercase under every condition in
//! [`Condition::ANALYZED`]. Jobs are plain indices into the weathercase list
//! and the pre-sized result vectors, so no two jobs can name the same slot.

use std::sync::Arc;

use sag_core::{Condition, Span, WeatherLoadCase};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::store::ResultSet;

/// Unique identifier for one `run_analysis` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(Uuid);

impl RunId {
    /// Create a new random run ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One (weathercase, condition) solve and the slot it writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Job {
    /// Position in the bound weathercase list.
    pub weathercase: usize,
    pub condition: Condition,
    /// Position in the result vector for `condition`.
    pub slot: usize,
}

/// Jobs for a run plus the sentinel-filled result vectors they write into.
#[derive(Debug, Clone)]
pub struct JobPlan {
    pub jobs: Vec<Job>,
    pub results: ResultSet,
}

impl JobPlan {
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// Validate `span` and build the job list for `weathercases`.
///
/// Jobs are ordered weathercase-major, condition-minor; the scheduler deals
/// them out in this order. A span that fails validation produces no jobs.
pub fn generate_jobs(
    span: &Span,
    weathercases: &[Arc<WeatherLoadCase>],
    include_warnings: bool,
) -> Result<JobPlan> {
    span.validate(include_warnings).map_err(Error::InvalidSpan)?;

    let jobs = weathercases
        .iter()
        .enumerate()
        .flat_map(|(index, _)| {
            Condition::ANALYZED.into_iter().map(move |condition| Job {
                weathercase: index,
                condition,
                slot: index,
            })
        })
        .collect();

    Ok(JobPlan {
        jobs,
        results: ResultSet::sentinels(weathercases.len()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sag_core::test_utils::{sample_span, sample_weathercases};

    #[test]
    fn generates_three_jobs_per_weathercase_in_order() {
        let plan = generate_jobs(&sample_span(), &sample_weathercases(2), false).unwrap();
        let order: Vec<(usize, Condition)> = plan
            .jobs
            .iter()
            .map(|job| (job.weathercase, job.condition))
            .collect();
        assert_eq!(
            order,
            vec![
                (0, Condition::Creep),
                (0, Condition::Initial),
                (0, Condition::Load),
                (1, Condition::Creep),
                (1, Condition::Initial),
                (1, Condition::Load),
            ]
        );
        assert_eq!(plan.results.len(), 2);
    }

    #[test]
    fn slots_are_unique_per_condition() {
        let plan = generate_jobs(&sample_span(), &sample_weathercases(5), false).unwrap();
        let mut seen = std::collections::HashSet::new();
        for job in &plan.jobs {
            assert!(seen.insert((job.condition, job.slot)));
        }
        assert_eq!(seen.len(), 15);
    }

    #[test]
    fn invalid_span_generates_nothing() {
        let mut span = sample_span();
        span.spacing_attachments.x = -1.0;
        let err = generate_jobs(&span, &sample_weathercases(3), false).unwrap_err();
        match err {
            Error::InvalidSpan(messages) => assert_eq!(messages.len(), 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_weathercase_list_is_an_empty_plan() {
        let plan = generate_jobs(&sample_span(), &[], false).unwrap();
        assert!(plan.is_empty());
        assert!(plan.results.is_empty());
    }
}
