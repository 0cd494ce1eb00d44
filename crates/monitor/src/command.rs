//! Command types shared by the registry, the handlers and the mainloop.

use std::fmt;
use std::io::Write;

use crate::error::MonitorError;
use crate::machine::Machine;

/// What the mainloop does after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Leave the mainloop.
    StopShell,
}

/// Result of a command handler.
pub type CmdResult = Result<Flow, MonitorError>;

/// What a handler runs against.
pub struct CommandContext<'a> {
    /// The machine under control.
    pub machine: &'a mut dyn Machine,
    /// Operator-facing output.
    pub out: &'a mut dyn Write,
}

impl fmt::Debug for CommandContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandContext")
            .field("state", &self.machine.state())
            .finish_non_exhaustive()
    }
}

/// A command handler.
///
/// `args` is the text after the command word, still untokenized, or `None` when
/// the line held only the command.
pub type Handler = fn(ctx: &mut CommandContext<'_>, args: Option<&mut str>) -> CmdResult;

/// One row of the command table.
#[derive(Clone, Copy, Debug)]
pub struct CommandDescriptor {
    /// Exact word typed by the operator.
    pub name: &'static str,
    /// One-line help text.
    pub description: &'static str,
    /// Implementation.
    pub handler: Handler,
}
