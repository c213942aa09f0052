//! Tracing setup for hosts embedding the controller.
//!
//! The library only emits `tracing` events; applications call [`init`] once
//! (or install their own subscriber) to see them.

use std::io;

/// Install a stderr fmt subscriber filtered by `RUST_LOG`, defaulting to
/// `level` for directives the environment does not set.
///
/// Returns false if a global subscriber was already installed.
pub fn init(level: tracing::Level) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(io::stderr)
        .try_init()
        .is_ok()
}
