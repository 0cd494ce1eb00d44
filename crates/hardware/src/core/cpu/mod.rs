//! CPU Core Definition and Initialization.
//!
//! This module defines the `Cpu` structure, the architectural state of the
//! reference machine:
//! 1. **State Management:** Integer registers and the program counter.
//! 2. **Execution:** One-instruction-at-a-time interpretation (see [`execution`]).
//! 3. **Display:** Register lookup and formatting for the monitor.

/// Fetch, decode and execute of a single instruction.
pub mod execution;

use std::io::{self, Write};

use crate::core::arch::gpr::Gpr;
use crate::isa::abi;

pub use execution::Retire;

/// Architectural CPU state.
#[derive(Clone, Debug, Default)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Program counter.
    pub pc: u64,
}

impl Cpu {
    /// Creates a CPU with zeroed registers and the PC at `reset_pc`.
    pub fn new(reset_pc: u64) -> Self {
        Self {
            regs: Gpr::new(),
            pc: reset_pc,
        }
    }

    /// Resolves a register name to its current value.
    ///
    /// Accepts everything [`abi::reg_index`] does, plus `pc`.
    ///
    /// # Returns
    ///
    /// `None` if `name` is not a register of this machine.
    pub fn reg_str2val(&self, name: &str) -> Option<u64> {
        if name.strip_prefix('$').unwrap_or(name) == "pc" {
            return Some(self.pc);
        }
        abi::reg_index(name).map(|idx| self.regs.read(idx))
    }

    /// Writes the whole register file followed by the PC.
    pub fn reg_display(&self, out: &mut dyn Write) -> io::Result<()> {
        self.regs.display(out)?;
        writeln!(out, "{:<4}{:#018x}", "pc", self.pc)
    }

    /// Writes a single register, or a diagnostic if `name` is unknown.
    pub fn target_reg_display(&self, out: &mut dyn Write, name: &str) -> io::Result<()> {
        if name.strip_prefix('$').unwrap_or(name) == "pc" {
            return writeln!(out, "{:<4}{:#018x}", "pc", self.pc);
        }
        match abi::reg_index(name) {
            Some(idx) => self.regs.display_one(out, idx),
            None => writeln!(out, "Unknown register '{name}'"),
        }
    }
}
