//! # sag-core: Transmission Line Sag-Tension Model
//!
//! Provides the data structures shared by every sag-tension consumer: spans,
//! cables, weathercases, result records, and the solver seam that physical
//! models plug into.
//!
//! ## Design Philosophy
//!
//! A span is analyzed by applying a list of weathercases to its line cable
//! under three stretch-history conditions (creep, initial, load). The numeric
//! model that turns a weathercase into tensions is **not** part of this crate;
//! it is reached through the [`SolverBackend`] trait so that analysis services
//! stay independent of any particular catenary implementation.
//!
//! - Weathercases and cables are shared by `Arc` and never copied by analysis code
//! - Validation collects every [`ValidationMessage`] instead of stopping at the first
//! - Failed solves are represented by a sentinel [`SagTensionResult`] with a
//!   [`Condition::Null`] tag
//!
//! ## Quick Start
//!
//! ```rust
//! use sag_core::test_utils::{sample_span, sample_weathercases};
//!
//! let span = sample_span();
//! assert!(span.validate(false).is_ok());
//!
//! let weathercases = sample_weathercases(3);
//! assert_eq!(weathercases.len(), 3);
//! ```
//!
//! ## Modules
//!
//! - [`condition`] - Stretch-history conditions
//! - [`span`], [`cable`], [`weather`] - Span model consumed by solvers
//! - [`result`] - Result records and stretch states
//! - [`solver`] - Reloader/unloader traits and backend factory
//! - [`diagnostics`] - Validation messages

pub mod cable;
pub mod condition;
pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod result;
pub mod solver;
pub mod span;
pub mod test_utils;
pub mod weather;

pub use cable::{Cable, CableConstraint, ConstraintLimitKind, LineCable};
pub use condition::Condition;
pub use diagnostics::{Severity, ValidationMessage};
pub use error::{SagError, SagResult};
pub use geometry::Vector3d;
pub use result::{
    CableState, PolynomialKind, SagTensionResult, StretchState, TensionComponents, INVALID_VALUE,
};
pub use solver::*;
pub use span::Span;
pub use weather::WeatherLoadCase;
