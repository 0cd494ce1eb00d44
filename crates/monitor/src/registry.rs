//! Command registry: the static command table and lookup.

use crate::command::CommandDescriptor;
use crate::commands;

/// Every command the shell understands, in `help` order.
///
/// To add a command, write its handler under `commands/` and add a row here.
/// Names must be unique.
pub static COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor {
        name: "help",
        description: "Display information about all supported commands",
        handler: commands::help::cmd_help,
    },
    CommandDescriptor {
        name: "c",
        description: "Continue the execution of the program",
        handler: commands::run::cmd_c,
    },
    CommandDescriptor {
        name: "q",
        description: "Exit NEMU",
        handler: commands::run::cmd_q,
    },
    CommandDescriptor {
        name: "si",
        description: "[N]\n  Execute N instructions (default: 1), then stop",
        handler: commands::run::cmd_si,
    },
    CommandDescriptor {
        name: "info",
        description: "[r | <reg>]\n  display register info",
        handler: commands::info::cmd_info,
    },
    CommandDescriptor {
        name: "x",
        description: "[N] [Addr]  display memory data, N is number of Byte",
        handler: commands::memory::cmd_x,
    },
];

/// Finds a command by exact name; the first match wins.
pub fn find_command(name: &str) -> Option<&'static CommandDescriptor> {
    COMMANDS.iter().find(|cmd| cmd.name == name)
}
