//! Core processor implementation.
//!
//! A single-issue interpreter: architectural state in [`arch`], the fetch/decode/execute
//! step in [`cpu`].

/// Architecture-specific components (register file).
pub mod arch;

/// CPU state and single-instruction execution.
pub mod cpu;

pub use self::cpu::Cpu;
