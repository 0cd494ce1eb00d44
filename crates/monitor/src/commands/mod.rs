//! Built-in command handlers.
//!
//! Each handler tokenizes its own arguments with [`strtok_r`](crate::tokenizer::strtok_r)
//! and reaches the machine only through [`CommandContext`](crate::command::CommandContext).

/// `help`.
pub mod help;
/// `info`.
pub mod info;
/// `x`.
pub mod memory;
/// `c`, `q`, `si`.
pub mod run;
