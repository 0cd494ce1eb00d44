//! Monitor error definitions.
//!
//! Argument errors abort the current command only; the mainloop prints them and
//! reads the next line. I/O errors on the output stream end the shell.

use std::io;

use rvmon_core::common::SimError;
use thiserror::Error;

/// Errors raised while executing a monitor command.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// The token is empty, has no digits, or has characters after the number.
    #[error("N must be number")]
    NotANumber,

    /// The number does not fit in 64 bits.
    #[error("N is too large")]
    TooLarge,

    /// A collaborator on the machine side failed (e.g. a memory read out of range).
    #[error(transparent)]
    Machine(#[from] SimError),

    /// Writing to the operator's output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl MonitorError {
    /// Returns true if the shell can keep reading commands after this error.
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
