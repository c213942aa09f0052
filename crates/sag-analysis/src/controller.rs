//! Analysis controller façade.
//!
//! The [`AnalysisController`] owns the span binding, the bound weathercase
//! list and the [`ResultStore`]. `run_analysis` drives job generation and the
//! scheduler synchronously; consumers read results through the query methods
//! and can follow state changes through [`AnalysisEvent`]s.
//!
//! ```text
//! Idle ──set_span──► Stale ──run_analysis──► Ready
//!  ▲                  ▲                        │
//!  └──set_span(None)──┴──────clear_results─────┘
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use sag_core::{
    Condition, SagTensionResult, SolverBackend, SolverInputs, Span, StretchState, WeatherLoadCase,
};
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use crate::config::AnalysisConfig;
use crate::error::{Error, Result};
use crate::events::AnalysisEvent;
use crate::job::{generate_jobs, RunId};
use crate::report::AnalysisReport;
use crate::scheduler::Scheduler;
use crate::store::ResultStore;

/// Lifecycle state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No span bound.
    Idle,
    /// Span bound, cached results missing or out of date.
    Stale,
    /// Results of the last run match the current binding.
    Ready,
}

/// Summary returned after a run so callers can report failures and timing.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSummary {
    pub run_id: RunId,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
    pub job_count: usize,
    pub worker_count: usize,
    pub jobs_per_worker: Vec<usize>,
    /// Result slots left as sentinels.
    pub failure_count: usize,
    /// Consolidated error log in worker start order.
    pub errors: Vec<String>,
}

impl AnalysisSummary {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Turns a span and weathercase list into cached sag-tension results.
pub struct AnalysisController<B: SolverBackend> {
    backend: B,
    config: AnalysisConfig,
    scheduler: Scheduler,
    span: Option<Arc<Span>>,
    weathercases: Vec<Arc<WeatherLoadCase>>,
    store: ResultStore,
    last_run: Option<AnalysisSummary>,
    ready: bool,
    events_tx: broadcast::Sender<AnalysisEvent>,
}

impl<B: SolverBackend> AnalysisController<B> {
    /// Create a controller with an explicit configuration.
    pub fn new(backend: B, config: AnalysisConfig) -> Self {
        let (events_tx, _) = broadcast::channel(64);
        let scheduler = Scheduler::from_config(&config);
        Self {
            backend,
            config,
            scheduler,
            span: None,
            weathercases: Vec::new(),
            store: ResultStore::new(),
            last_run: None,
            ready: false,
            events_tx,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    // ─────────────────────────────────────────────────────────────────────
    // Binding
    // ─────────────────────────────────────────────────────────────────────

    /// Bind (or unbind) the span. Clears cached results; does not run.
    pub fn set_span(&mut self, span: Option<Arc<Span>>) {
        self.reset_results();
        self.span = span;

        let event = match &self.span {
            Some(span) => AnalysisEvent::SpanBound {
                name: span.name.clone(),
            },
            None => AnalysisEvent::SpanCleared,
        };
        let _ = self.events_tx.send(event);
    }

    pub fn span(&self) -> Option<&Arc<Span>> {
        self.span.as_ref()
    }

    /// Bind the ordered weathercase list used by the next run.
    ///
    /// Cached results are kept, but the controller is no longer `Ready`.
    pub fn set_weathercases(&mut self, weathercases: Vec<Arc<WeatherLoadCase>>) {
        self.weathercases = weathercases;
        self.ready = false;
    }

    pub fn weathercases(&self) -> &[Arc<WeatherLoadCase>] {
        &self.weathercases
    }

    pub fn state(&self) -> ControllerState {
        match (&self.span, self.ready) {
            (None, _) => ControllerState::Idle,
            (Some(_), false) => ControllerState::Stale,
            (Some(_), true) => ControllerState::Ready,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Running
    // ─────────────────────────────────────────────────────────────────────

    /// Recompute every (weathercase, condition) result for the bound span.
    ///
    /// Prior results are always discarded first. Returns
    /// [`Error::NoSpanBound`] or [`Error::InvalidSpan`] with the store left
    /// empty when there is nothing valid to analyze. Per-job solver failures
    /// do not fail the run; they show up in the summary.
    pub fn run_analysis(&mut self) -> Result<AnalysisSummary> {
        self.reset_results();

        let Some(span) = self.span.clone() else {
            debug!("no span bound, skipping analysis");
            let _ = self.events_tx.send(AnalysisEvent::AnalysisAborted {
                reason: Error::NoSpanBound.to_string(),
            });
            return Err(Error::NoSpanBound);
        };

        let plan = match generate_jobs(&span, &self.weathercases, self.config.include_warnings) {
            Ok(plan) => plan,
            Err(Error::InvalidSpan(messages)) => {
                for message in &messages {
                    error!("span '{}': {}", span.name, message);
                }
                let err = Error::InvalidSpan(messages);
                let _ = self.events_tx.send(AnalysisEvent::AnalysisAborted {
                    reason: err.to_string(),
                });
                return Err(err);
            }
            Err(other) => return Err(other),
        };

        let run_id = RunId::new();
        let started_at = Utc::now();
        let clock = Instant::now();
        let job_count = plan.len();
        let worker_count = self.scheduler.worker_count(job_count);

        info!(
            "analyzing span '{}' for {} weathercases ({} jobs, {} workers)",
            span.name,
            self.weathercases.len(),
            job_count,
            worker_count
        );
        let _ = self.events_tx.send(AnalysisEvent::AnalysisStarted {
            run_id,
            job_count,
            worker_count,
        });

        let inputs = SolverInputs {
            line_cable: &span.line_cable,
            spacing: &span.spacing_attachments,
        };
        let outcome = self
            .scheduler
            .run(&self.backend, inputs, &self.weathercases, plan);

        for message in &outcome.errors {
            warn!("{}", message);
        }
        let failure_count = outcome.results.sentinel_count();
        let summary = AnalysisSummary {
            run_id,
            started_at,
            elapsed: clock.elapsed(),
            job_count,
            worker_count: outcome.worker_count(),
            jobs_per_worker: outcome.jobs_per_worker.clone(),
            failure_count,
            errors: outcome.errors,
        };
        self.store.replace(outcome.results, outcome.stretch);

        info!(
            "analysis of span '{}' finished in {:.3}s with {} of {} jobs failed",
            span.name,
            summary.elapsed.as_secs_f64(),
            failure_count,
            job_count
        );
        let _ = self.events_tx.send(AnalysisEvent::AnalysisComplete {
            run_id,
            failure_count,
        });
        if summary.has_errors() {
            warn!("errors occurred during analysis of span '{}'", span.name);
            let _ = self.events_tx.send(AnalysisEvent::ErrorsOccurred {
                run_id,
                failure_count,
            });
        }

        self.last_run = Some(summary.clone());
        self.ready = true;
        Ok(summary)
    }

    /// Empty the result store. Span binding and configuration are untouched.
    pub fn clear_results(&mut self) {
        self.reset_results();
        let _ = self.events_tx.send(AnalysisEvent::ResultsCleared);
    }

    fn reset_results(&mut self) {
        self.store.clear();
        self.last_run = None;
        self.ready = false;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────

    /// Valid result for a weathercase index and condition, if any.
    pub fn result(&self, index: usize, condition: Condition) -> Option<&SagTensionResult> {
        self.store.result(index, condition)
    }

    /// Full result vector for a condition, sentinels included.
    pub fn results(&self, condition: Condition) -> Option<&[SagTensionResult]> {
        self.store.results(condition)
    }

    /// Cached stretch state, if results match the bound weathercase count.
    pub fn stretch_state(&self, condition: Condition) -> Option<StretchState> {
        self.store.stretch_state(condition, self.weathercases.len())
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    pub fn last_summary(&self) -> Option<&AnalysisSummary> {
        self.last_run.as_ref()
    }

    /// Snapshot of the current results, only while `Ready`.
    pub fn report(&self) -> Option<AnalysisReport> {
        if self.state() != ControllerState::Ready {
            return None;
        }
        let span = self.span.as_ref()?;
        let summary = self.last_run.as_ref()?;
        Some(AnalysisReport {
            created_at: Utc::now(),
            run_id: summary.run_id,
            span: span.name.clone(),
            backend: self.backend.name().to_string(),
            weathercases: self
                .weathercases
                .iter()
                .map(|case| case.description.clone())
                .collect(),
            job_count: summary.job_count,
            failure_count: summary.failure_count,
            errors: summary.errors.clone(),
            results: self.store.result_set().clone(),
            stretch: *self.store.stretch_sample(),
        })
    }

    /// Subscribe to controller events.
    pub fn subscribe(&self) -> broadcast::Receiver<AnalysisEvent> {
        self.events_tx.subscribe()
    }
}
