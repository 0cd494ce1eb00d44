//! Register inspection: `info`.

use crate::command::{CmdResult, CommandContext, Flow};
use crate::tokenizer::{SavePtr, WHITESPACE, strtok_r};

/// `info r | info <reg>`: dumps all registers or a single one.
///
/// Without an argument this does nothing.
pub fn cmd_info(ctx: &mut CommandContext<'_>, args: Option<&mut str>) -> CmdResult {
    let mut save = SavePtr::default();
    match strtok_r(args, WHITESPACE, &mut save) {
        None => {}
        Some("r") => ctx.machine.reg_display(ctx.out)?,
        Some(reg) => ctx.machine.target_reg_display(ctx.out, reg)?,
    }
    Ok(Flow::Continue)
}
