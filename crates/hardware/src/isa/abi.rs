//! RISC-V Application Binary Interface (ABI) register names.
//!
//! Defines the standard ABI register names, the indices the simulator itself
//! relies on (the trap return code lives in `a0`), and name lookup used by the
//! monitor's `info` command.

/// Register x0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register x10 (first argument/return value, a0). Carries the `ebreak` return code.
pub const REG_A0: usize = 10;

/// ABI names indexed by register number.
///
/// `x0` is spelled `$0`, matching the NEMU register dump.
pub const REG_NAMES: [&str; 32] = [
    "$0", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4", "a5",
    "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4", "t5",
    "t6",
];

/// Resolves a register name to its index.
///
/// Accepts the ABI names in [`REG_NAMES`], `zero` and `fp` aliases, and the
/// architectural `x0`..`x31` spelling. A leading `$` is ignored so that both
/// `$a0` and `a0` work.
///
/// # Arguments
///
/// * `name` - Register name as typed by the operator.
///
/// # Returns
///
/// The register index, or `None` if the name is not a general-purpose register.
pub fn reg_index(name: &str) -> Option<usize> {
    if name == "$0" {
        return Some(REG_ZERO);
    }
    let name = name.strip_prefix('$').unwrap_or(name);
    match name {
        "zero" => return Some(REG_ZERO),
        "fp" => return Some(8),
        _ => {}
    }
    if let Some(idx) = REG_NAMES.iter().position(|&n| n == name) {
        return Some(idx);
    }
    let num = name.strip_prefix('x')?;
    // Reject "x01" and friends so every register has exactly one numeric spelling.
    if num.len() > 1 && num.starts_with('0') {
        return None;
    }
    num.parse::<usize>().ok().filter(|&idx| idx < REG_NAMES.len())
}
