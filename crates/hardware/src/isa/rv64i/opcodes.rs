//! Major opcodes (bits 6-0) executed by the reference machine.

/// LB, LH, LW, LD and the unsigned variants.
pub const OP_LOAD: u32 = 0b000_0011;
/// FENCE, FENCE.I.
pub const OP_MISC_MEM: u32 = 0b000_1111;
/// ADDI, SLTI, ANDI, SLLI and the rest of the register-immediate ALU group.
pub const OP_IMM: u32 = 0b001_0011;
/// AUIPC.
pub const OP_AUIPC: u32 = 0b001_0111;
/// ADDIW, SLLIW, SRLIW, SRAIW.
pub const OP_IMM_32: u32 = 0b001_1011;
/// SB, SH, SW, SD.
pub const OP_STORE: u32 = 0b010_0011;
/// ADD, SUB, SLL and the rest of the register-register ALU group.
pub const OP_REG: u32 = 0b011_0011;
/// LUI.
pub const OP_LUI: u32 = 0b011_0111;
/// ADDW, SUBW, SLLW, SRLW, SRAW.
pub const OP_REG_32: u32 = 0b011_1011;
/// BEQ, BNE, BLT, BGE, BLTU, BGEU.
pub const OP_BRANCH: u32 = 0b110_0011;
/// JALR.
pub const OP_JALR: u32 = 0b110_0111;
/// JAL.
pub const OP_JAL: u32 = 0b110_1111;
/// SYSTEM. Only `EBREAK` is executed.
pub const OP_SYSTEM: u32 = 0b111_0011;

/// `ebreak`: halts the machine with `a0` as the guest's return code.
pub const EBREAK: u32 = 0x0010_0073;
