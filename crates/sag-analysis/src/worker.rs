//! Worker: solves an assigned job slice with a private solver pair.
//!
//! **Algorithm:**
//! 1. Build one reloader and one unloader from the shared span inputs.
//! 2. For each job, in assignment order, solve both roles for the job's
//!    weathercase and condition.
//! 3. If either role fails, record a contextual message plus the solver's
//!    own messages and emit a sentinel for the slot.
//! 4. After the last job, sample the reloader's stretch states.
//!
//! The worker never touches shared mutable state. Its results and error list
//! are handed back by value and merged by the scheduler after the join.

use std::sync::Arc;

use sag_core::{
    Condition, Reloader, SagTensionResult, SolverBackend, SolverInputs, Unloader, WeatherLoadCase,
};
use tracing::debug;

use crate::job::Job;
use crate::store::StretchSample;

/// Everything a worker hands back after its last job.
#[derive(Debug, Clone)]
pub struct WorkerOutput {
    /// Position of the worker in start order.
    pub id: usize,
    /// One entry per assigned job, in assignment order.
    pub results: Vec<(Job, SagTensionResult)>,
    /// Private error list, in the order failures occurred.
    pub errors: Vec<String>,
    pub stretch: StretchSample,
}

/// Execution unit for one slice of a run's jobs.
pub struct Worker<'a, B: SolverBackend> {
    id: usize,
    backend: &'a B,
    inputs: SolverInputs<'a>,
    weathercases: &'a [Arc<WeatherLoadCase>],
    jobs: Vec<Job>,
}

impl<'a, B: SolverBackend> Worker<'a, B> {
    pub fn new(
        id: usize,
        backend: &'a B,
        inputs: SolverInputs<'a>,
        weathercases: &'a [Arc<WeatherLoadCase>],
        jobs: Vec<Job>,
    ) -> Self {
        Self {
            id,
            backend,
            inputs,
            weathercases,
            jobs,
        }
    }

    /// Process every assigned job and return the private output.
    pub fn run(self) -> WorkerOutput {
        let mut reloader = self.backend.reloader(self.inputs);
        let mut unloader = self.backend.unloader(self.inputs);

        let mut results = Vec::with_capacity(self.jobs.len());
        let mut errors = Vec::new();

        for job in &self.jobs {
            let Some(weathercase) = self.weathercases.get(job.weathercase) else {
                errors.push(format!(
                    "Job references weathercase {} but only {} are bound.",
                    job.weathercase,
                    self.weathercases.len()
                ));
                results.push((*job, SagTensionResult::sentinel()));
                continue;
            };

            let result = match solve_job(&mut reloader, &mut unloader, weathercase, job.condition)
            {
                Ok(result) => {
                    debug!(
                        "worker {} solved {} {}",
                        self.id, weathercase.description, job.condition
                    );
                    result
                }
                Err(messages) => {
                    debug!(
                        "worker {} found no solution for {} {}",
                        self.id, weathercase.description, job.condition
                    );
                    errors.push(format!(
                        "No solution for {} {}.",
                        weathercase.description, job.condition
                    ));
                    errors.extend(messages);
                    SagTensionResult::sentinel()
                }
            };
            results.push((*job, result));
        }

        let stretch = StretchSample {
            creep: reloader.stretch_state(Condition::Creep),
            initial: reloader.stretch_state(Condition::Initial),
            load: reloader.stretch_state(Condition::Load),
        };

        WorkerOutput {
            id: self.id,
            results,
            errors,
            stretch,
        }
    }
}

/// Solve both roles for one job.
///
/// Both roles are always attempted so that the error list carries every
/// underlying message, not just the first role's.
fn solve_job<R: Reloader, U: Unloader>(
    reloader: &mut R,
    unloader: &mut U,
    weathercase: &WeatherLoadCase,
    condition: Condition,
) -> Result<SagTensionResult, Vec<String>> {
    let reloaded = reloader.solve(weathercase, condition);
    let unloaded = unloader.solve(weathercase, condition);

    match (reloaded, unloaded) {
        (Ok(reloaded), Ok(unloaded)) => Ok(SagTensionResult {
            condition,
            length_unloaded: unloaded.length_unloaded,
            state: reloaded.state,
            tension_horizontal: reloaded.tension_horizontal,
            tension_average: reloaded.tension_average,
            weight_unit: reloaded.weight_unit,
        }),
        (reloaded, unloaded) => {
            let mut messages = Vec::new();
            if let Err(err) = reloaded {
                messages.extend(err.messages());
            }
            if let Err(err) = unloaded {
                messages.extend(err.messages());
            }
            Err(messages)
        }
    }
}
