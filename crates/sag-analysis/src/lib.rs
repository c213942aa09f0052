//! # sag-analysis
//!
//! Analysis controller for transmission-line sag-tension studies.
//!
//! Given a bound [`sag_core::Span`] and an ordered weathercase list, the
//! controller generates one job per (weathercase, condition) pair, deals the
//! jobs round-robin to a set of worker threads that each own a private solver
//! pair, joins them, and caches the merged results for UI panes and report
//! builders.
//!
//! ## Architecture
//!
//! ```text
//! AnalysisController::run_analysis
//!   ├─► generate_jobs      validate span, 3 × N jobs, sentinel-filled slots
//!   ├─► Scheduler::run     round-robin partition, scoped threads, join
//!   │     └─► Worker::run  reloader + unloader per worker, private errors
//!   └─► ResultStore        three condition vectors + stretch states
//! ```
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use sag_analysis::{AnalysisConfig, AnalysisController};
//! use sag_core::test_utils::{sample_span, sample_weathercases, StubBackend};
//! use sag_core::Condition;
//!
//! let mut controller = AnalysisController::new(StubBackend::new(), AnalysisConfig::default());
//! controller.set_span(Some(Arc::new(sample_span())));
//! controller.set_weathercases(sample_weathercases(4));
//!
//! let summary = controller.run_analysis().unwrap();
//! assert_eq!(summary.job_count, 12);
//! assert!(controller.result(2, Condition::Load).is_some());
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod job;
pub mod logging;
pub mod report;
pub mod scheduler;
pub mod store;
pub mod worker;

// Re-exports for convenience
pub use config::AnalysisConfig;
pub use controller::{AnalysisController, AnalysisSummary, ControllerState};
pub use error::{Error, Result};
pub use events::AnalysisEvent;
pub use job::{generate_jobs, Job, JobPlan, RunId};
pub use report::{load_report, write_report, AnalysisReport};
pub use scheduler::{partition_round_robin, ScheduleOutcome, Scheduler};
pub use store::{ResultSet, ResultStore, StretchSample};
pub use worker::{Worker, WorkerOutput};
