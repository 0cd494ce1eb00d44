//! Simulator: owns the CPU, its memory and the run state side-by-side.
//!
//! `cpu_exec` is the execution engine the monitor drives. It follows the NEMU
//! contract: refuse to resume a finished program, run up to `n` instructions,
//! then report how execution stopped.

use std::io::{self, Write};
use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::common::{RunState, SimState};
use crate::config::Config;
use crate::core::{Cpu, cpu::Retire};
use crate::soc::Memory;
use crate::stats::SimStats;

/// `cpu_exec` echoes each instruction when asked to run fewer than this many.
pub const MAX_INST_TO_PRINT: u64 = 10;

/// `cpu_exec` argument meaning "run until the guest stops on its own".
pub const RUN_UNBOUNDED: u64 = u64::MAX;

/// Top-level simulator: CPU architectural state + RAM + run state.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state.
    pub cpu: Cpu,
    /// Physical RAM.
    pub mem: Memory,
    /// Run state and last halt.
    pub state: SimState,
    /// Accumulated statistics.
    pub stats: SimStats,
    /// Log every executed instruction at `trace` level.
    pub trace: bool,
}

impl Simulator {
    /// Creates a simulator with empty RAM and the PC at the RAM base.
    pub fn new(config: &Config) -> Self {
        let base = config.memory.ram_base;
        debug!(
            ram_base = format_args!("{base:#x}"),
            ram_size = config.memory.ram_size,
            "creating simulator"
        );
        Self {
            cpu: Cpu::new(base),
            mem: Memory::new(base, config.memory.ram_size),
            state: SimState::default(),
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
        }
    }

    /// Runs up to `n` instructions, writing progress and verdicts to `out`.
    ///
    /// [`RUN_UNBOUNDED`] runs until the guest halts or faults.
    ///
    /// # Arguments
    ///
    /// * `n` - Maximum number of instructions to execute.
    /// * `out` - Destination for per-instruction echo, trap verdicts and statistics.
    pub fn cpu_exec(&mut self, n: u64, out: &mut dyn Write) -> io::Result<()> {
        if self.state.state.has_ended() {
            writeln!(
                out,
                "Program execution has ended. To restart the program, exit NEMU and run again."
            )?;
            return Ok(());
        }
        self.state.state = RunState::Running;

        let start = Instant::now();
        let result = self.execute(n, n < MAX_INST_TO_PRINT, out);
        self.stats.host_time += start.elapsed();
        result?;

        match self.state.state {
            RunState::Running => self.state.state = RunState::Stop,
            RunState::End | RunState::Abort => {
                let verdict = match (self.state.state, self.state.halt_ret) {
                    (RunState::Abort, _) => "ABORT",
                    (_, 0) => "HIT GOOD TRAP",
                    _ => "HIT BAD TRAP",
                };
                writeln!(out, "nemu: {verdict} at pc = {:#018x}", self.state.halt_pc)?;
                writeln!(out, "{}", self.stats)?;
            }
            RunState::Quit => writeln!(out, "{}", self.stats)?,
            RunState::Stop => {}
        }
        Ok(())
    }

    fn execute(&mut self, n: u64, print_step: bool, out: &mut dyn Write) -> io::Result<()> {
        for _ in 0..n {
            let pc = self.cpu.pc;
            match self.cpu.exec_once(&mut self.mem) {
                Ok((inst, retire)) => {
                    self.stats.instructions_retired += 1;
                    if self.trace {
                        trace!(pc = format_args!("{pc:#x}"), inst = format_args!("{inst:#010x}"));
                    }
                    if print_step {
                        writeln!(out, "{pc:#018x}: {inst:08x}")?;
                    }
                    if let Retire::Halt(code) = retire {
                        self.state.set(RunState::End, pc, code as i64);
                    }
                }
                Err(e) => {
                    warn!(pc = format_args!("{pc:#x}"), error = %e, "execution aborted");
                    writeln!(out, "{e}")?;
                    self.state.set(RunState::Abort, pc, -1);
                }
            }
            if self.state.state != RunState::Running {
                break;
            }
        }
        Ok(())
    }
}
