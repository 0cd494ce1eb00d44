//! RISC-V architectural state.
//!
//! The reference machine only models the integer register file; the program
//! counter lives on [`Cpu`](crate::core::Cpu).

/// General-Purpose Register file implementation.
pub mod gpr;
