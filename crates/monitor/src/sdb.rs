//! Simple debugger mainloop.
//!
//! [`Sdb`] ties a machine, a line source and an output stream together. Each
//! iteration performs:
//! 1. **Read:** Pull a line from the [`LineSource`]; end of input stops the shell.
//! 2. **Split:** Separate the command word from its arguments; blank lines are skipped.
//! 3. **Drain:** Clear the device event queue when devices are enabled.
//! 4. **Dispatch:** Look the word up in the registry and run its handler.
//!
//! Batch mode skips all of this and runs the program once with `c`.

use std::io::Write;

use rvmon_core::config::Config;
use tracing::{debug, info};

use crate::command::{CommandContext, Flow};
use crate::error::MonitorError;
use crate::machine::Machine;
use crate::registry::find_command;
use crate::source::LineSource;
use crate::tokenizer::split_command;

/// Lifecycle of the mainloop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MonitorState {
    /// Reading and dispatching commands.
    #[default]
    Running,
    /// Input ended or a command asked to stop.
    Stopped,
}

/// The interactive shell.
#[derive(Debug)]
pub struct Sdb<M, S, W> {
    machine: M,
    source: S,
    out: W,
    prompt: String,
    batch_mode: bool,
    drain_events: bool,
    state: MonitorState,
}

impl<M: Machine, S: LineSource, W: Write> Sdb<M, S, W> {
    /// Creates a shell over `machine`, reading from `source` and printing to `out`.
    ///
    /// # Arguments
    ///
    /// * `machine` - The machine commands act on.
    /// * `source` - Where command lines come from.
    /// * `out` - Where command output goes.
    /// * `config` - Supplies the prompt, batch mode and whether device events are drained.
    pub fn new(machine: M, source: S, out: W, config: &Config) -> Self {
        Self {
            machine,
            source,
            out,
            prompt: config.general.prompt.clone(),
            batch_mode: config.general.batch_mode,
            drain_events: config.device.enabled,
            state: MonitorState::Running,
        }
    }

    /// Makes [`Sdb::mainloop`] run the program once instead of reading commands.
    pub const fn set_batch_mode(&mut self) {
        self.batch_mode = true;
    }

    /// Current mainloop state.
    pub const fn state(&self) -> MonitorState {
        self.state
    }

    /// The machine under control.
    pub const fn machine(&self) -> &M {
        &self.machine
    }

    /// Output written so far (for in-memory writers).
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Releases the machine, line source and output.
    pub fn into_parts(self) -> (M, S, W) {
        (self.machine, self.source, self.out)
    }

    /// Reads and runs commands until `q` or end of input.
    ///
    /// Command errors are printed and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Io`] if the output stream fails.
    pub fn mainloop(&mut self) -> Result<(), MonitorError> {
        if self.batch_mode {
            info!("batch mode, running to completion");
            let _ = self.dispatch("c", None)?;
            self.state = MonitorState::Stopped;
            return Ok(self.out.flush()?);
        }

        while self.state == MonitorState::Running {
            let Some(mut line) = self.source.read_line(&self.prompt) else {
                debug!("end of input");
                self.state = MonitorState::Stopped;
                break;
            };
            let _ = self.execute_line(&mut line)?;
        }
        Ok(self.out.flush()?)
    }

    /// Runs a single command line.
    ///
    /// # Returns
    ///
    /// [`Flow::StopShell`] if the command ended the shell (the state is then
    /// [`MonitorState::Stopped`]), otherwise [`Flow::Continue`]; blank lines are
    /// a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Io`] if the output stream fails.
    pub fn execute_line(&mut self, line: &mut str) -> Result<Flow, MonitorError> {
        let Some(parsed) = split_command(line) else {
            return Ok(Flow::Continue);
        };
        if self.drain_events {
            self.machine.clear_event_queue();
        }
        let flow = self.dispatch(parsed.command, parsed.remainder)?;
        if flow == Flow::StopShell {
            self.state = MonitorState::Stopped;
        }
        self.out.flush()?;
        Ok(flow)
    }

    fn dispatch(&mut self, name: &str, args: Option<&mut str>) -> Result<Flow, MonitorError> {
        let Some(cmd) = find_command(name) else {
            debug!(command = name, "unknown command");
            writeln!(self.out, "Unknown command '{name}'")?;
            return Ok(Flow::Continue);
        };
        debug!(
            command = name,
            args = args.as_deref(),
            state = %self.machine.state(),
            "dispatch"
        );

        let mut ctx = CommandContext {
            machine: &mut self.machine,
            out: &mut self.out,
        };
        match (cmd.handler)(&mut ctx, args) {
            Ok(flow) => Ok(flow),
            Err(e) if e.is_recoverable() => {
                debug!(command = name, error = %e, "command failed");
                writeln!(self.out, "{e}")?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }
}
