//! Simulation driver and program loading.
//!
//! [`Simulator`] runs the guest; [`loader`] puts a program in its RAM first.

pub mod loader;

/// Execution engine and run-state bookkeeping.
pub mod simulator;

pub use simulator::{MAX_INST_TO_PRINT, RUN_UNBOUNDED, Simulator};
