//! Simulator run state.
//!
//! Tracks whether the machine is executing, paused between monitor commands,
//! halted by the guest, aborted by a fault, or shut down by the operator.

use std::fmt;

/// Coarse state of the simulated machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// Executing instructions inside `cpu_exec`.
    Running,
    /// Paused; `cpu_exec` may resume it.
    #[default]
    Stop,
    /// The guest executed `ebreak`; `halt_ret` holds its return code.
    End,
    /// Execution hit an illegal instruction or a memory fault.
    Abort,
    /// The operator quit from the monitor.
    Quit,
}

impl RunState {
    /// Returns true once execution can no longer be resumed.
    pub const fn has_ended(self) -> bool {
        matches!(self, Self::End | Self::Abort | Self::Quit)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Running => "running",
            Self::Stop => "stop",
            Self::End => "end",
            Self::Abort => "abort",
            Self::Quit => "quit",
        };
        f.write_str(name)
    }
}

/// Run state plus the location and code of the last halt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimState {
    /// Current state.
    pub state: RunState,
    /// PC of the instruction that ended or aborted execution.
    pub halt_pc: u64,
    /// Guest return code (`a0` at `ebreak`), or -1 after an abort.
    pub halt_ret: i64,
}

impl SimState {
    /// Moves to `state`, recording where and why execution halted.
    pub const fn set(&mut self, state: RunState, halt_pc: u64, halt_ret: i64) {
        self.state = state;
        self.halt_pc = halt_pc;
        self.halt_ret = halt_ret;
    }

    /// Returns true if the process should exit with a failure status.
    ///
    /// Only a guest that halted with return code 0, or an explicit quit from the
    /// monitor, counts as success.
    pub const fn is_exit_status_bad(&self) -> bool {
        let good = matches!(self.state, RunState::End) && self.halt_ret == 0
            || matches!(self.state, RunState::Quit);
        !good
    }
}
