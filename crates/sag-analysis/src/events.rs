//! Event types for reactive consumers of the controller.

use crate::job::RunId;

/// Events emitted by the analysis controller when its state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisEvent {
    /// A span was bound; cached results were cleared.
    SpanBound { name: String },

    /// The span binding was removed.
    SpanCleared,

    /// Cached results were cleared without touching the span binding.
    ResultsCleared,

    /// Workers are about to be started.
    AnalysisStarted {
        run_id: RunId,
        job_count: usize,
        worker_count: usize,
    },

    /// The run ended before any job was generated.
    AnalysisAborted { reason: String },

    /// All workers joined and results are cached.
    AnalysisComplete { run_id: RunId, failure_count: usize },

    /// At least one error was logged; emitted once per run.
    ErrorsOccurred {
        run_id: RunId,
        /// Result slots left as sentinels.
        failure_count: usize,
    },
}
