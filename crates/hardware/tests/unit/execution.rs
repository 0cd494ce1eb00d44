//! Instruction semantics tests.

use rvmon_core::common::{RunState, SimError};
use rvmon_core::core::cpu::Retire;
use rvmon_core::isa::rv64i::opcodes;

use crate::common::asm::{self, EBREAK};
use crate::common::harness::{BASE, TestContext};

fn step(ctx: &mut TestContext) -> Result<Retire, SimError> {
    ctx.sim.cpu.exec_once(&mut ctx.sim.mem).map(|(_, r)| r)
}

#[test]
fn addi_writes_sign_extended_result() {
    let mut ctx = TestContext::new().load_program(&[asm::addi(1, 0, -5)]);
    assert_eq!(step(&mut ctx).unwrap(), Retire::Next);
    assert_eq!(ctx.get_reg(1), (-5i64) as u64);
    assert_eq!(ctx.sim.cpu.pc, BASE + 4);
}

#[test]
fn writes_to_x0_are_dropped() {
    let mut ctx = TestContext::new().load_program(&[asm::addi(0, 0, 7)]);
    assert_eq!(step(&mut ctx).unwrap(), Retire::Next);
    assert_eq!(ctx.get_reg(0), 0);
}

#[test]
fn sub_and_sra() {
    let mut ctx = TestContext::new().load_program(&[
        asm::r_type(0b0100000, 2, 1, 0b000, 3, opcodes::OP_REG), // sub x3, x1, x2
        asm::r_type(0b0100000, 4, 1, 0b101, 5, opcodes::OP_REG), // sra x5, x1, x4
    ]);
    ctx.set_reg(1, (-16i64) as u64);
    ctx.set_reg(2, 4);
    ctx.set_reg(4, 2);
    assert_eq!(step(&mut ctx).unwrap(), Retire::Next);
    assert_eq!(step(&mut ctx).unwrap(), Retire::Next);
    assert_eq!(ctx.get_reg(3), (-20i64) as u64);
    assert_eq!(ctx.get_reg(5), (-4i64) as u64);
}

#[test]
fn srai_uses_six_bit_shamt() {
    // srai x2, x1, 33
    let inst = asm::i_type(0x400 | 33, 1, 0b101, 2, opcodes::OP_IMM);
    let mut ctx = TestContext::new().load_program(&[inst]);
    ctx.set_reg(1, 0x8000_0000_0000_0000);
    assert_eq!(step(&mut ctx).unwrap(), Retire::Next);
    assert_eq!(ctx.get_reg(2), 0xFFFF_FFFF_C000_0000);
}

#[test]
fn addiw_sign_extends_low_word() {
    let inst = asm::i_type(1, 1, 0b000, 2, opcodes::OP_IMM_32);
    let mut ctx = TestContext::new().load_program(&[inst]);
    ctx.set_reg(1, 0x7FFF_FFFF);
    assert_eq!(step(&mut ctx).unwrap(), Retire::Next);
    assert_eq!(ctx.get_reg(2), 0xFFFF_FFFF_8000_0000);
}

#[test]
fn taken_branch_moves_pc() {
    let inst = asm::b_type(-8, 2, 1, 0b001, opcodes::OP_BRANCH); // bne x1, x2, -8
    let mut ctx = TestContext::new().load_program(&[asm::addi(0, 0, 0), asm::addi(0, 0, 0), inst]);
    ctx.sim.cpu.pc = BASE + 8;
    ctx.set_reg(1, 1);
    assert_eq!(step(&mut ctx).unwrap(), Retire::Next);
    assert_eq!(ctx.sim.cpu.pc, BASE);
}

#[test]
fn jal_links_and_jumps() {
    let mut ctx = TestContext::new().load_program(&[asm::j_type(16, 1, opcodes::OP_JAL)]);
    assert_eq!(step(&mut ctx).unwrap(), Retire::Next);
    assert_eq!(ctx.get_reg(1), BASE + 4);
    assert_eq!(ctx.sim.cpu.pc, BASE + 16);
}

#[test]
fn jalr_clears_low_bit() {
    let inst = asm::i_type(3, 5, 0b000, 1, opcodes::OP_JALR);
    let mut ctx = TestContext::new().load_program(&[inst]);
    ctx.set_reg(5, BASE + 0x100);
    assert_eq!(step(&mut ctx).unwrap(), Retire::Next);
    assert_eq!(ctx.sim.cpu.pc, BASE + 0x102);
    assert_eq!(ctx.get_reg(1), BASE + 4);
}

#[test]
fn store_then_signed_and_unsigned_loads() {
    let mut ctx = TestContext::new().load_program(&[
        asm::s_type(0x40, 2, 1, 0b010, opcodes::OP_STORE), // sw x2, 0x40(x1)
        asm::i_type(0x40, 1, 0b000, 3, opcodes::OP_LOAD),  // lb x3, 0x40(x1)
        asm::i_type(0x40, 1, 0b100, 4, opcodes::OP_LOAD),  // lbu x4, 0x40(x1)
        asm::i_type(0x40, 1, 0b010, 5, opcodes::OP_LOAD),  // lw x5, 0x40(x1)
    ]);
    ctx.set_reg(1, BASE);
    ctx.set_reg(2, 0xFFFF_FF80);
    for _ in 0..4 {
        assert_eq!(step(&mut ctx).unwrap(), Retire::Next);
    }
    assert_eq!(ctx.get_reg(3), (-128i64) as u64);
    assert_eq!(ctx.get_reg(4), 0x80);
    assert_eq!(ctx.get_reg(5), (-128i64) as u64);
}

#[test]
fn ebreak_halts_with_a0() {
    let mut ctx = TestContext::new().load_program(&[EBREAK]);
    ctx.set_reg(10, 3);
    assert_eq!(step(&mut ctx).unwrap(), Retire::Halt(3));
    assert_eq!(ctx.sim.cpu.pc, BASE);
}

#[test]
fn unknown_opcode_is_illegal_and_keeps_pc() {
    let mut ctx = TestContext::new().load_program(&[0xFFFF_FFFF]);
    let err = step(&mut ctx).unwrap_err();
    assert!(matches!(err, SimError::IllegalInstruction { pc, inst: 0xFFFF_FFFF } if pc == BASE));
    assert_eq!(ctx.sim.cpu.pc, BASE);
    assert_eq!(ctx.sim.state.state, RunState::Stop);
}

#[test]
fn load_outside_ram_faults() {
    let inst = asm::i_type(0, 1, 0b011, 2, opcodes::OP_LOAD); // ld x2, 0(x1)
    let mut ctx = TestContext::new().load_program(&[inst]);
    ctx.set_reg(1, 0x1000);
    let err = step(&mut ctx).unwrap_err();
    assert!(matches!(err, SimError::AddressOutOfBounds { addr: 0x1000, len: 8, .. }));
}
