//! RV64I Instruction Decoder.
//!
//! Splits a 32-bit encoding into its register, function-code and immediate
//! fields. Immediates are reassembled and sign-extended per format:
//!
//! ```text
//! I  imm[11:0]            | rs1 | funct3 | rd          | opcode
//! S  imm[11:5] | rs2      | rs1 | funct3 | imm[4:0]    | opcode
//! B  imm[12|10:5] | rs2   | rs1 | funct3 | imm[4:1|11] | opcode
//! U  imm[31:12]                          | rd          | opcode
//! J  imm[20|10:1|11|19:12]               | rd          | opcode
//! ```

use crate::isa::rv64i::opcodes;

/// Instruction encoding format, selected by the major opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Register-register (no immediate).
    R,
    /// Short immediate: loads, JALR, OP-IMM, OP-IMM-32, SYSTEM.
    I,
    /// Stores.
    S,
    /// Conditional branches.
    B,
    /// LUI, AUIPC.
    U,
    /// JAL.
    J,
}

impl Format {
    /// Returns the format used by `opcode`.
    pub const fn of(opcode: u32) -> Self {
        match opcode {
            opcodes::OP_LOAD
            | opcodes::OP_IMM
            | opcodes::OP_IMM_32
            | opcodes::OP_JALR
            | opcodes::OP_MISC_MEM
            | opcodes::OP_SYSTEM => Self::I,
            opcodes::OP_STORE => Self::S,
            opcodes::OP_BRANCH => Self::B,
            opcodes::OP_LUI | opcodes::OP_AUIPC => Self::U,
            opcodes::OP_JAL => Self::J,
            _ => Self::R,
        }
    }
}

/// Fields extracted from one instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Major opcode (bits 6-0).
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code field 3 (bits 14-12).
    pub funct3: u32,
    /// Function code field 7 (bits 31-25).
    pub funct7: u32,
    /// Sign-extended immediate; zero for R-type.
    pub imm: i64,
}

/// Returns `inst[hi:lo]` shifted down to bit 0.
#[inline]
const fn bits(inst: u32, hi: u32, lo: u32) -> u32 {
    (inst >> lo) & ((1 << (hi - lo + 1)) - 1)
}

/// Sign-extends the low `width` bits of `val`.
#[inline]
const fn sign_extend(val: u32, width: u32) -> i64 {
    let shift = 32 - width;
    (((val << shift) as i32) >> shift) as i64
}

/// Decodes a 32-bit instruction.
///
/// # Arguments
///
/// * `inst` - The raw encoding as fetched from memory.
///
/// # Returns
///
/// A [`Decoded`] with every field filled in; fields a format does not use are
/// still extracted from their fixed bit positions.
pub const fn decode(inst: u32) -> Decoded {
    let opcode = bits(inst, 6, 0);
    let imm = match Format::of(opcode) {
        Format::R => 0,
        Format::I => sign_extend(bits(inst, 31, 20), 12),
        Format::S => sign_extend((bits(inst, 31, 25) << 5) | bits(inst, 11, 7), 12),
        Format::B => sign_extend(
            (bits(inst, 31, 31) << 12)
                | (bits(inst, 7, 7) << 11)
                | (bits(inst, 30, 25) << 5)
                | (bits(inst, 11, 8) << 1),
            13,
        ),
        Format::U => (inst & 0xFFFF_F000) as i32 as i64,
        Format::J => sign_extend(
            (bits(inst, 31, 31) << 20)
                | (bits(inst, 19, 12) << 12)
                | (bits(inst, 20, 20) << 11)
                | (bits(inst, 30, 21) << 1),
            21,
        ),
    };

    Decoded {
        raw: inst,
        opcode,
        rd: bits(inst, 11, 7) as usize,
        rs1: bits(inst, 19, 15) as usize,
        rs2: bits(inst, 24, 20) as usize,
        funct3: bits(inst, 14, 12),
        funct7: bits(inst, 31, 25),
        imm,
    }
}
