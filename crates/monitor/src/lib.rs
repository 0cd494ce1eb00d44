//! NEMU-style simple debugger (sdb) for the rvmon reference machine.
//!
//! This crate provides the operator shell with the following:
//! 1. **Tokenizer:** In-place `strtok`/`strtok_r` splitting and the command/argument split.
//! 2. **Numeric parsing:** `strtoull`-compatible unsigned parsing with base detection.
//! 3. **Commands:** A static, ordered table of `help`, `c`, `q`, `si`, `info` and `x`.
//! 4. **Mainloop:** Interactive and batch execution over any [`LineSource`].
//! 5. **Machine seams:** Traits the handlers call, implemented for
//!    [`rvmon_core::Simulator`].

/// Command flow, context and descriptor types.
pub mod command;
/// Built-in command handlers.
pub mod commands;
/// Monitor errors.
pub mod error;
/// Collaborator traits.
pub mod machine;
/// Numeric argument parsing.
pub mod parse;
/// Static command table.
pub mod registry;
/// The mainloop.
pub mod sdb;
/// Line sources.
pub mod source;
/// In-place tokenizer.
pub mod tokenizer;

pub use crate::command::{CmdResult, CommandContext, CommandDescriptor, Flow};
pub use crate::error::MonitorError;
pub use crate::machine::Machine;
pub use crate::sdb::{MonitorState, Sdb};
pub use crate::source::{BufReadSource, LineSource};
