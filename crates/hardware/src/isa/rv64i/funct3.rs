//! `funct3` (bits 14-12), grouped by the major opcode that gives it meaning.

/// `OP_LOAD`: access width and signedness.
pub mod load {
    /// Byte, sign-extended.
    pub const LB: u32 = 0b000;
    /// Halfword, sign-extended.
    pub const LH: u32 = 0b001;
    /// Word, sign-extended.
    pub const LW: u32 = 0b010;
    /// Doubleword.
    pub const LD: u32 = 0b011;
    /// Byte, zero-extended.
    pub const LBU: u32 = 0b100;
    /// Halfword, zero-extended.
    pub const LHU: u32 = 0b101;
    /// Word, zero-extended.
    pub const LWU: u32 = 0b110;
}

/// `OP_STORE`: `log2` of the access width.
pub mod store {
    /// 1 byte.
    pub const SB: u32 = 0b000;
    /// 2 bytes.
    pub const SH: u32 = 0b001;
    /// 4 bytes.
    pub const SW: u32 = 0b010;
    /// 8 bytes.
    pub const SD: u32 = 0b011;
}

/// `OP_BRANCH`: comparison.
pub mod branch {
    /// `==`.
    pub const BEQ: u32 = 0b000;
    /// `!=`.
    pub const BNE: u32 = 0b001;
    /// Signed `<`.
    pub const BLT: u32 = 0b100;
    /// Signed `>=`.
    pub const BGE: u32 = 0b101;
    /// Unsigned `<`.
    pub const BLTU: u32 = 0b110;
    /// Unsigned `>=`.
    pub const BGEU: u32 = 0b111;
}

/// `OP_IMM`, `OP_REG` and their 32-bit forms: ALU operation.
pub mod alu {
    /// ADD, or SUB with the alternate `funct7`.
    pub const ADD: u32 = 0b000;
    /// Shift left.
    pub const SLL: u32 = 0b001;
    /// Signed set-less-than.
    pub const SLT: u32 = 0b010;
    /// Unsigned set-less-than.
    pub const SLTU: u32 = 0b011;
    /// XOR.
    pub const XOR: u32 = 0b100;
    /// Logical shift right, or arithmetic with the alternate `funct7`.
    pub const SRL: u32 = 0b101;
    /// OR.
    pub const OR: u32 = 0b110;
    /// AND.
    pub const AND: u32 = 0b111;
}

/// `OP_MISC_MEM`.
pub mod fence {
    /// FENCE.
    pub const FENCE: u32 = 0b000;
    /// FENCE.I.
    pub const FENCE_I: u32 = 0b001;
}
