//! RV64I encodings: major opcodes and the `funct3`/`funct7` fields that refine them.

/// `funct3` values, grouped by opcode.
pub mod funct3;

/// `funct7` values and the shift-immediate helper.
pub mod funct7;

/// Major opcodes.
pub mod opcodes;
