//! Execution control: `c`, `q` and `si`.

use rvmon_core::common::RunState;
use rvmon_core::sim::RUN_UNBOUNDED;
use tracing::debug;

use crate::command::{CmdResult, CommandContext, Flow};
use crate::parse::parse_ull;
use crate::tokenizer::{SavePtr, WHITESPACE, strtok_r};

/// `c`: runs until the machine stops on its own.
pub fn cmd_c(ctx: &mut CommandContext<'_>, _args: Option<&mut str>) -> CmdResult {
    ctx.machine.cpu_exec(RUN_UNBOUNDED, ctx.out)?;
    Ok(Flow::Continue)
}

/// `q`: marks the process as quit and leaves the shell.
pub fn cmd_q(ctx: &mut CommandContext<'_>, _args: Option<&mut str>) -> CmdResult {
    ctx.machine.set_state(RunState::Quit);
    Ok(Flow::StopShell)
}

/// `si [N]`: executes `N` instructions, one by default.
///
/// A malformed `N` aborts the command before anything executes.
pub fn cmd_si(ctx: &mut CommandContext<'_>, args: Option<&mut str>) -> CmdResult {
    let mut save = SavePtr::default();
    let steps = match strtok_r(args, WHITESPACE, &mut save) {
        Some(tok) => parse_ull(tok)?,
        None => 1,
    };
    debug!(steps, "single step");
    ctx.machine.cpu_exec(steps, ctx.out)?;
    Ok(Flow::Continue)
}
