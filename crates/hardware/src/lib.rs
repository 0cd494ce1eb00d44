//! RV64I reference machine for the rvmon monitor.
//!
//! This crate implements a small NEMU-style machine with the following:
//! 1. **Core:** 64-bit integer registers, PC, and a single-step RV64I interpreter.
//! 2. **Memory:** Flat, bounds-checked little-endian RAM.
//! 3. **ISA:** Field decoding and encodings for the base integer set.
//! 4. **Simulation:** `cpu_exec` run control, run state, image loader, statistics.
//! 5. **Configuration:** JSON-backed settings shared with the monitor and CLI.

/// Common types (errors, run state).
pub mod common;
/// Run configuration (defaults, JSON loading).
pub mod config;
/// CPU core (registers, execution).
pub mod core;
/// Instruction set (decode, ABI names, RV64I encodings).
pub mod isa;
/// Simulation driver and loader.
pub mod sim;
/// System-on-chip (RAM).
pub mod soc;
/// Execution statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or load JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers and PC.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
