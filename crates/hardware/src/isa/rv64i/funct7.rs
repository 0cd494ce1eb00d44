//! `funct7` (bits 31-25) for register-register ALU operations and shift-immediates.

/// ADD, SLL, SRL and the other base operations.
pub const BASE: u32 = 0b000_0000;

/// Bit 30 set: SUB instead of ADD, SRA instead of SRL.
pub const ALT: u32 = 0b010_0000;

/// `funct7` with bit 25 dropped. RV64 shift-immediates use bit 25 as `shamt[5]`,
/// so only these six bits select the shift kind.
pub const fn shift_kind(funct7: u32) -> u32 {
    funct7 >> 1
}
