//! Common types shared across the reference machine.
//!
//! This module provides:
//! 1. **Error Handling:** The [`SimError`] type and the [`SimResult`] alias.
//! 2. **Run State:** The [`RunState`] machine observed by the monitor and the binary.

/// Error types.
pub mod error;

/// Simulator run state.
pub mod state;

pub use error::{SimError, SimResult};
pub use state::{RunState, SimState};
