//! Fork-join scheduler for one analysis run.
//!
//! Workers are fresh scoped OS threads per run, each owning its own solver
//! pair. Jobs are dealt round-robin so per-worker load differs by at most
//! one job. Nothing a worker produces is visible until every worker has been
//! joined; results are then written into their pre-assigned slots and error
//! lists are merged in worker start order.

use std::any::Any;
use std::sync::Arc;
use std::thread;

use sag_core::{SolverBackend, SolverInputs, WeatherLoadCase};
use tracing::{error, info};

use crate::config::AnalysisConfig;
use crate::job::{Job, JobPlan};
use crate::store::{ResultSet, StretchSample};
use crate::worker::{Worker, WorkerOutput};

/// Merged output of a scheduled run.
#[derive(Debug, Clone, Default)]
pub struct ScheduleOutcome {
    /// Result vectors with every slot written (sentinel on failure).
    pub results: ResultSet,
    /// Consolidated error log, worker start order.
    pub errors: Vec<String>,
    /// Stretch states from the first worker, when it finished.
    pub stretch: Option<StretchSample>,
    /// Jobs assigned to each worker, in worker order.
    pub jobs_per_worker: Vec<usize>,
}

impl ScheduleOutcome {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn worker_count(&self) -> usize {
        self.jobs_per_worker.len()
    }
}

/// How a worker thread ended.
enum WorkerJoin {
    Finished(WorkerOutput),
    Panicked { id: usize, jobs: usize, message: String },
    NotStarted { id: usize, jobs: usize, message: String },
}

/// Partitions jobs across workers and joins them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduler {
    max_threads: usize,
}

impl Scheduler {
    /// Scheduler with a fixed thread ceiling (at least one).
    pub fn new(max_threads: usize) -> Self {
        Self {
            max_threads: max_threads.max(1),
        }
    }

    /// Scheduler using the configured ceiling, auto-detecting when unset.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.resolved_threads())
    }

    pub fn max_threads(&self) -> usize {
        self.max_threads
    }

    /// `min(job_count, max_threads)`; zero only when there are no jobs.
    pub fn worker_count(&self, job_count: usize) -> usize {
        job_count.min(self.max_threads)
    }

    /// Run every job in `plan` and block until all workers are joined.
    pub fn run<B: SolverBackend>(
        &self,
        backend: &B,
        inputs: SolverInputs<'_>,
        weathercases: &[Arc<WeatherLoadCase>],
        plan: JobPlan,
    ) -> ScheduleOutcome {
        let JobPlan { jobs, mut results } = plan;
        let worker_count = self.worker_count(jobs.len());
        let queues = partition_round_robin(&jobs, worker_count);
        let jobs_per_worker: Vec<usize> = queues.iter().map(Vec::len).collect();

        if worker_count == 0 {
            return ScheduleOutcome {
                results,
                ..ScheduleOutcome::default()
            };
        }

        info!(
            "dispatching {} jobs across {} workers using backend '{}'",
            jobs.len(),
            worker_count,
            backend.name()
        );

        let joined: Vec<WorkerJoin> = thread::scope(|scope| {
            // Start every worker before joining any of them.
            let handles: Vec<_> = queues
                .into_iter()
                .enumerate()
                .map(|(id, queue)| {
                    let jobs = queue.len();
                    let worker = Worker::new(id, backend, inputs, weathercases, queue);
                    let spawned = thread::Builder::new()
                        .name(format!("sag-worker-{id}"))
                        .spawn_scoped(scope, move || worker.run());
                    (id, jobs, spawned)
                })
                .collect();

            handles
                .into_iter()
                .map(|(id, jobs, spawned)| match spawned {
                    Ok(handle) => match handle.join() {
                        Ok(output) => WorkerJoin::Finished(output),
                        Err(payload) => WorkerJoin::Panicked {
                            id,
                            jobs,
                            message: panic_message(payload.as_ref()),
                        },
                    },
                    Err(err) => WorkerJoin::NotStarted {
                        id,
                        jobs,
                        message: err.to_string(),
                    },
                })
                .collect()
        });

        let mut errors = Vec::new();
        let mut stretch = None;
        for worker in joined {
            match worker {
                WorkerJoin::Finished(output) => {
                    for (job, result) in output.results {
                        if !results.write(&job, result) {
                            errors.push(format!(
                                "Result for weathercase {} {} has no slot.",
                                job.weathercase, job.condition
                            ));
                        }
                    }
                    if output.id == 0 {
                        stretch = Some(output.stretch);
                    }
                    errors.extend(output.errors);
                }
                WorkerJoin::Panicked { id, jobs, message } => {
                    error!("worker {} panicked: {}", id, message);
                    errors.push(format!(
                        "Worker {id} stopped before finishing its {jobs} jobs: {message}"
                    ));
                }
                WorkerJoin::NotStarted { id, jobs, message } => {
                    error!("worker {} could not be started: {}", id, message);
                    errors.push(format!(
                        "Worker {id} could not be started for its {jobs} jobs: {message}"
                    ));
                }
            }
        }

        ScheduleOutcome {
            results,
            errors,
            stretch,
            jobs_per_worker,
        }
    }
}

/// Deal jobs to workers: job `k` goes to worker `k % worker_count`.
///
/// Relative job order is preserved inside each queue.
pub fn partition_round_robin(jobs: &[Job], worker_count: usize) -> Vec<Vec<Job>> {
    if worker_count == 0 {
        return Vec::new();
    }
    let mut queues: Vec<Vec<Job>> = (0..worker_count)
        .map(|_| Vec::with_capacity(jobs.len() / worker_count + 1))
        .collect();
    for (k, job) in jobs.iter().enumerate() {
        queues[k % worker_count].push(*job);
    }
    queues
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::generate_jobs;
    use sag_core::test_utils::{sample_span, sample_weathercases, StubBackend};
    use sag_core::Condition;

    #[test]
    fn worker_count_is_capped_by_jobs_and_threads() {
        let scheduler = Scheduler::new(4);
        assert_eq!(scheduler.worker_count(15), 4);
        assert_eq!(scheduler.worker_count(3), 3);
        assert_eq!(scheduler.worker_count(0), 0);
        assert_eq!(Scheduler::new(0).max_threads(), 1);
    }

    #[test]
    fn round_robin_balances_within_one_job() {
        let plan = generate_jobs(&sample_span(), &sample_weathercases(5), false).unwrap();
        let queues = partition_round_robin(&plan.jobs, 4);
        let sizes: Vec<usize> = queues.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![4, 4, 4, 3]);

        // Worker 1 gets jobs 1, 5, 9, 13 in that order.
        let expected: Vec<Job> = [1, 5, 9, 13].iter().map(|&k| plan.jobs[k]).collect();
        assert_eq!(queues[1], expected);
    }

    #[test]
    fn run_fills_every_slot() {
        let span = sample_span();
        let cases = sample_weathercases(5);
        let backend = StubBackend::new();
        let plan = generate_jobs(&span, &cases, false).unwrap();
        let inputs = SolverInputs {
            line_cable: &span.line_cable,
            spacing: &span.spacing_attachments,
        };

        let outcome = Scheduler::new(4).run(&backend, inputs, &cases, plan);
        assert_eq!(outcome.worker_count(), 4);
        assert_eq!(backend.instances(), 4);
        assert!(!outcome.has_errors());
        assert_eq!(outcome.results.len(), 5);
        assert_eq!(outcome.results.sentinel_count(), 0);
        assert!(outcome.stretch.is_some());
    }

    #[test]
    fn panicking_worker_degrades_to_sentinels() {
        let span = sample_span();
        let cases = sample_weathercases(2);
        let backend = StubBackend::new().panicking_on("Case 1");
        let plan = generate_jobs(&span, &cases, false).unwrap();
        let inputs = SolverInputs {
            line_cable: &span.line_cable,
            spacing: &span.spacing_attachments,
        };

        // Single worker: the panic loses every slot of the run.
        let outcome = Scheduler::new(1).run(&backend, inputs, &cases, plan);
        assert!(outcome.has_errors());
        assert!(outcome.errors[0].contains("Worker 0"));
        assert_eq!(outcome.results.sentinel_count(), 6);
        assert!(outcome.stretch.is_none());
        assert!(outcome.results.creep.iter().all(|r| r.condition == Condition::Null));
    }

    #[test]
    fn empty_plan_starts_no_workers() {
        let span = sample_span();
        let backend = StubBackend::new();
        let plan = generate_jobs(&span, &[], false).unwrap();
        let inputs = SolverInputs {
            line_cable: &span.line_cable,
            spacing: &span.spacing_attachments,
        };
        let outcome = Scheduler::new(8).run(&backend, inputs, &[], plan);
        assert_eq!(outcome.worker_count(), 0);
        assert_eq!(backend.instances(), 0);
        assert!(outcome.stretch.is_none());
    }
}
