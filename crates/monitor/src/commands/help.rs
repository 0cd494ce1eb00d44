//! Command listing: `help`.

use std::io;

use crate::command::{CmdResult, CommandContext, CommandDescriptor, Flow};
use crate::registry::{COMMANDS, find_command};
use crate::tokenizer::{SavePtr, WHITESPACE, strtok_r};

/// `help [name]`: lists every command, or describes one.
pub fn cmd_help(ctx: &mut CommandContext<'_>, args: Option<&mut str>) -> CmdResult {
    let mut save = SavePtr::default();
    match strtok_r(args, WHITESPACE, &mut save) {
        None => {
            for cmd in COMMANDS {
                describe(ctx, cmd)?;
            }
        }
        Some(name) => match find_command(name) {
            Some(cmd) => describe(ctx, cmd)?,
            None => writeln!(ctx.out, "Unknown command '{name}'")?,
        },
    }
    Ok(Flow::Continue)
}

fn describe(ctx: &mut CommandContext<'_>, cmd: &CommandDescriptor) -> io::Result<()> {
    writeln!(ctx.out, "{} - {}", cmd.name, cmd.description)
}
