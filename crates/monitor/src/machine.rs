//! Collaborator seams between the shell and the machine it controls.
//!
//! Handlers never touch a concrete simulator. They go through these traits, which
//! [`Simulator`] implements and the test suite fakes. It covers:
//! 1. **Execution:** [`ExecutionEngine::cpu_exec`].
//! 2. **Memory:** [`PhysMemory::paddr_read`].
//! 3. **Registers:** [`RegisterDisplay`].
//! 4. **Process state:** [`ProcessState`], read by the binary for the exit code.
//! 5. **Devices:** [`DeviceEvents`], drained before each dispatched command.

use std::io::{self, Write};

use rvmon_core::Simulator;
use rvmon_core::common::{RunState, SimError};
use tracing::trace;

/// Advances the simulated CPU.
pub trait ExecutionEngine {
    /// Runs up to `n` instructions; [`RUN_UNBOUNDED`](rvmon_core::sim::RUN_UNBOUNDED)
    /// runs until the machine stops itself. Progress goes to `out`.
    fn cpu_exec(&mut self, n: u64, out: &mut dyn Write) -> io::Result<()>;
}

/// Physical memory as seen by the monitor.
pub trait PhysMemory {
    /// Reads `len` (1, 2, 4 or 8) bytes at `addr`.
    fn paddr_read(&self, addr: u64, len: usize) -> Result<u64, SimError>;
}

/// Register dumps.
pub trait RegisterDisplay {
    /// Writes every register.
    fn reg_display(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Writes one register by name; unknown names are reported on `out`.
    fn target_reg_display(&self, out: &mut dyn Write, name: &str) -> io::Result<()>;
}

/// Global run state of the simulated process.
pub trait ProcessState {
    /// Current state.
    fn state(&self) -> RunState;

    /// Moves to `state`.
    fn set_state(&mut self, state: RunState);
}

/// Host-side device event queue.
pub trait DeviceEvents {
    /// Discards pending host events. Machines without devices keep the default.
    fn clear_event_queue(&mut self) {}
}

/// Everything a command handler may call.
pub trait Machine: ExecutionEngine + PhysMemory + RegisterDisplay + ProcessState + DeviceEvents {}

impl<T> Machine for T where
    T: ExecutionEngine + PhysMemory + RegisterDisplay + ProcessState + DeviceEvents + ?Sized
{
}

impl ExecutionEngine for Simulator {
    fn cpu_exec(&mut self, n: u64, out: &mut dyn Write) -> io::Result<()> {
        Self::cpu_exec(self, n, out)
    }
}

impl PhysMemory for Simulator {
    fn paddr_read(&self, addr: u64, len: usize) -> Result<u64, SimError> {
        self.mem.paddr_read(addr, len)
    }
}

impl RegisterDisplay for Simulator {
    fn reg_display(&self, out: &mut dyn Write) -> io::Result<()> {
        self.cpu.reg_display(out)
    }

    fn target_reg_display(&self, out: &mut dyn Write, name: &str) -> io::Result<()> {
        self.cpu.target_reg_display(out, name)
    }
}

impl ProcessState for Simulator {
    fn state(&self) -> RunState {
        self.state.state
    }

    fn set_state(&mut self, state: RunState) {
        self.state.state = state;
    }
}

impl DeviceEvents for Simulator {
    fn clear_event_queue(&mut self) {
        trace!("no devices attached, event queue empty");
    }
}
