//! System-on-Chip (SoC) Components.
//!
//! The reference machine has no MMIO devices; the SoC is just its RAM.

/// Physical RAM.
pub mod memory;

pub use memory::Memory;
