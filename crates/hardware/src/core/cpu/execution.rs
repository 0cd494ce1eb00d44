//! Instruction Execution.
//!
//! Interprets one RV64I instruction per call:
//! 1. **Fetch:** A 32-bit little-endian word at `pc`.
//! 2. **Decode:** Field extraction via [`decode`].
//! 3. **Execute:** ALU, branch, load/store, and the `ebreak` halt trap.
//!
//! The machine has no trap vector: anything it cannot execute is reported as an
//! error and the caller aborts the run.

use super::Cpu;
use crate::common::{SimError, SimResult};
use crate::isa::abi;
use crate::isa::decode::{Decoded, decode};
use crate::isa::rv64i::funct3::{alu, branch, fence, load, store};
use crate::isa::rv64i::{funct7, opcodes};
use crate::soc::Memory;

/// Outcome of a successfully executed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Retire {
    /// The instruction retired and the PC advanced.
    Next,
    /// The guest executed `ebreak`; carries `a0`.
    Halt(u64),
}

impl Cpu {
    /// Executes the instruction at `pc`.
    ///
    /// # Arguments
    ///
    /// * `mem` - Physical memory used for fetch, loads and stores.
    ///
    /// # Returns
    ///
    /// The raw instruction and how it retired. On error the PC and registers are
    /// left as they were before the faulting instruction.
    pub fn exec_once(&mut self, mem: &mut Memory) -> SimResult<(u32, Retire)> {
        let pc = self.pc;
        let inst = mem.paddr_read(pc, 4)? as u32;
        if inst == opcodes::EBREAK {
            return Ok((inst, Retire::Halt(self.regs.read(abi::REG_A0))));
        }

        let d = decode(inst);
        let illegal = SimError::IllegalInstruction { pc, inst };
        let mut next_pc = pc.wrapping_add(4);

        match d.opcode {
            opcodes::OP_LUI => self.regs.write(d.rd, d.imm as u64),
            opcodes::OP_AUIPC => self.regs.write(d.rd, pc.wrapping_add(d.imm as u64)),
            opcodes::OP_JAL => {
                self.regs.write(d.rd, next_pc);
                next_pc = pc.wrapping_add(d.imm as u64);
            }
            opcodes::OP_JALR => {
                if d.funct3 != 0 {
                    return Err(illegal);
                }
                let target = self.regs.read(d.rs1).wrapping_add(d.imm as u64) & !1;
                self.regs.write(d.rd, next_pc);
                next_pc = target;
            }
            opcodes::OP_BRANCH => {
                let a = self.regs.read(d.rs1);
                let b = self.regs.read(d.rs2);
                let taken = match d.funct3 {
                    branch::BEQ => a == b,
                    branch::BNE => a != b,
                    branch::BLT => (a as i64) < (b as i64),
                    branch::BGE => (a as i64) >= (b as i64),
                    branch::BLTU => a < b,
                    branch::BGEU => a >= b,
                    _ => return Err(illegal),
                };
                if taken {
                    next_pc = pc.wrapping_add(d.imm as u64);
                }
            }
            opcodes::OP_LOAD => {
                let addr = self.regs.read(d.rs1).wrapping_add(d.imm as u64);
                let val = match d.funct3 {
                    load::LB => mem.paddr_read(addr, 1)? as i8 as u64,
                    load::LH => mem.paddr_read(addr, 2)? as i16 as u64,
                    load::LW => mem.paddr_read(addr, 4)? as i32 as u64,
                    load::LD => mem.paddr_read(addr, 8)?,
                    load::LBU => mem.paddr_read(addr, 1)?,
                    load::LHU => mem.paddr_read(addr, 2)?,
                    load::LWU => mem.paddr_read(addr, 4)?,
                    _ => return Err(illegal),
                };
                self.regs.write(d.rd, val);
            }
            opcodes::OP_STORE => {
                let addr = self.regs.read(d.rs1).wrapping_add(d.imm as u64);
                let len = match d.funct3 {
                    store::SB => 1,
                    store::SH => 2,
                    store::SW => 4,
                    store::SD => 8,
                    _ => return Err(illegal),
                };
                mem.paddr_write(addr, len, self.regs.read(d.rs2))?;
            }
            opcodes::OP_IMM => {
                let val = alu_imm(&d, self.regs.read(d.rs1)).ok_or(illegal)?;
                self.regs.write(d.rd, val);
            }
            opcodes::OP_IMM_32 => {
                let val = alu_imm_32(&d, self.regs.read(d.rs1)).ok_or(illegal)?;
                self.regs.write(d.rd, val);
            }
            opcodes::OP_REG => {
                let val = alu_reg(&d, self.regs.read(d.rs1), self.regs.read(d.rs2))
                    .ok_or(illegal)?;
                self.regs.write(d.rd, val);
            }
            opcodes::OP_REG_32 => {
                let val = alu_reg_32(&d, self.regs.read(d.rs1), self.regs.read(d.rs2))
                    .ok_or(illegal)?;
                self.regs.write(d.rd, val);
            }
            // Single hart, no caches: FENCE and FENCE.I have nothing to order.
            opcodes::OP_MISC_MEM if matches!(d.funct3, fence::FENCE | fence::FENCE_I) => {}
            _ => return Err(illegal),
        }

        self.pc = next_pc;
        Ok((inst, Retire::Next))
    }
}

fn alu_imm(d: &Decoded, a: u64) -> Option<u64> {
    let imm = d.imm as u64;
    let shamt = (d.imm & 0x3F) as u32;
    let kind = funct7::shift_kind(d.funct7);
    Some(match d.funct3 {
        alu::ADD => a.wrapping_add(imm),
        alu::SLT => u64::from((a as i64) < d.imm),
        alu::SLTU => u64::from(a < imm),
        alu::XOR => a ^ imm,
        alu::OR => a | imm,
        alu::AND => a & imm,
        alu::SLL if kind == funct7::shift_kind(funct7::BASE) => a << shamt,
        alu::SRL if kind == funct7::shift_kind(funct7::BASE) => a >> shamt,
        alu::SRL if kind == funct7::shift_kind(funct7::ALT) => ((a as i64) >> shamt) as u64,
        _ => return None,
    })
}

fn alu_imm_32(d: &Decoded, a: u64) -> Option<u64> {
    let a = a as u32;
    let shamt = (d.imm & 0x1F) as u32;
    let val = match (d.funct3, d.funct7) {
        (alu::ADD, _) => a.wrapping_add(d.imm as u32),
        (alu::SLL, funct7::BASE) => a << shamt,
        (alu::SRL, funct7::BASE) => a >> shamt,
        (alu::SRL, funct7::ALT) => ((a as i32) >> shamt) as u32,
        _ => return None,
    };
    Some(val as i32 as u64)
}

fn alu_reg(d: &Decoded, a: u64, b: u64) -> Option<u64> {
    let shamt = (b & 0x3F) as u32;
    Some(match (d.funct3, d.funct7) {
        (alu::ADD, funct7::BASE) => a.wrapping_add(b),
        (alu::ADD, funct7::ALT) => a.wrapping_sub(b),
        (alu::SLL, funct7::BASE) => a << shamt,
        (alu::SLT, funct7::BASE) => u64::from((a as i64) < (b as i64)),
        (alu::SLTU, funct7::BASE) => u64::from(a < b),
        (alu::XOR, funct7::BASE) => a ^ b,
        (alu::SRL, funct7::BASE) => a >> shamt,
        (alu::SRL, funct7::ALT) => ((a as i64) >> shamt) as u64,
        (alu::OR, funct7::BASE) => a | b,
        (alu::AND, funct7::BASE) => a & b,
        _ => return None,
    })
}

fn alu_reg_32(d: &Decoded, a: u64, b: u64) -> Option<u64> {
    let (a, b) = (a as u32, b as u32);
    let shamt = b & 0x1F;
    let val = match (d.funct3, d.funct7) {
        (alu::ADD, funct7::BASE) => a.wrapping_add(b),
        (alu::ADD, funct7::ALT) => a.wrapping_sub(b),
        (alu::SLL, funct7::BASE) => a << shamt,
        (alu::SRL, funct7::BASE) => a >> shamt,
        (alu::SRL, funct7::ALT) => ((a as i32) >> shamt) as u32,
        _ => return None,
    };
    Some(val as i32 as u64)
}
