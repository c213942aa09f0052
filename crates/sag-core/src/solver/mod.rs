//! Seam between analysis services and the numeric sag-tension model.

pub mod backend;

pub use backend::{ReloadOutput, Reloader, SolverBackend, SolverInputs, UnloadOutput, Unloader};
