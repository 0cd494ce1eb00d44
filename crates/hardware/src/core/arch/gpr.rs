//! RISC-V General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file for the RISC-V architecture.
//! It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 3. **Display:** Formats the register file for the monitor's `info r` command.

use std::io::{self, Write};

use crate::isa::abi::REG_NAMES;

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers used for integer operations. Register `x0`
/// is hardwired to zero and cannot be modified.
#[derive(Clone, Debug, Default)]
pub struct Gpr {
    regs: [u64; 32],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The 64-bit value stored in the specified register. Register `x0` always returns 0.
    #[inline]
    pub const fn read(&self, idx: usize) -> u64 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a general-purpose register. Writes to `x0` are dropped.
    #[inline]
    pub const fn write(&mut self, idx: usize, val: u64) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Writes one register as `name  0x%016x  %d`.
    ///
    /// # Arguments
    ///
    /// * `out` - Destination stream.
    /// * `idx` - Register index (0-31).
    pub fn display_one(&self, out: &mut dyn Write, idx: usize) -> io::Result<()> {
        let val = self.read(idx);
        writeln!(out, "{:<4}{:#018x}  {}", REG_NAMES[idx], val, val as i64)
    }

    /// Writes every register, one per line, in index order.
    pub fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        for idx in 0..REG_NAMES.len() {
            self.display_one(out, idx)?;
        }
        Ok(())
    }
}
