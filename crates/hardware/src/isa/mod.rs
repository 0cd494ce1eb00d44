//! Instruction set definitions for the reference machine.
//!
//! Only the RV64I base set is executed; `ebreak` doubles as the halt trap.

/// ABI register names and name lookup.
pub mod abi;

/// Field extraction and immediate decoding.
pub mod decode;

/// RV64I opcodes and function codes.
pub mod rv64i;
