//! Memory examination: `x N ADDR`.

use crate::command::{CmdResult, CommandContext, Flow};
use crate::parse::parse_ull;
use crate::tokenizer::{SavePtr, WHITESPACE, strtok_r};

/// Bytes printed per output row.
pub const BYTES_PER_ROW: u64 = 4;

/// `x N ADDR`: dumps `N` bytes starting at `ADDR`.
///
/// Each row starts with its address and holds up to four bytes:
///
/// ```text
/// 0x80000000: 97  02  00  00
/// 0x80000004: 23  88
/// ```
///
/// Both numbers are parsed before any memory is read. A missing argument or
/// `N == 0` does nothing. The dump stops after address `u64::MAX`.
pub fn cmd_x(ctx: &mut CommandContext<'_>, args: Option<&mut str>) -> CmdResult {
    let mut save = SavePtr::default();
    let Some(count) = strtok_r(args, WHITESPACE, &mut save) else {
        return Ok(Flow::Continue);
    };
    let count = parse_ull(count)?;
    let Some(addr) = strtok_r(None, WHITESPACE, &mut save) else {
        return Ok(Flow::Continue);
    };
    let mut addr = parse_ull(addr)?;

    let mut open_row = false;
    for i in 0..count {
        let col = i % BYTES_PER_ROW;
        if col == 0 {
            write!(ctx.out, "{addr:#010x}: ")?;
            open_row = true;
        }
        let byte = match ctx.machine.paddr_read(addr, 1) {
            Ok(byte) => byte,
            Err(e) => {
                writeln!(ctx.out)?;
                return Err(e.into());
            }
        };
        write!(ctx.out, "{byte:02x}  ")?;
        if col == BYTES_PER_ROW - 1 {
            writeln!(ctx.out)?;
            open_row = false;
        }
        // The dump ends at the top of the address space.
        let Some(next) = addr.checked_add(1) else {
            break;
        };
        addr = next;
    }
    if open_row {
        writeln!(ctx.out)?;
    }
    Ok(Flow::Continue)
}
