//! rvmon: the NEMU-style monitor for the RV64I reference machine.
//!
//! This binary wires the pieces together. It performs:
//! 1. **Setup:** Parses flags, installs logging, loads the JSON config and applies
//!    flag overrides.
//! 2. **Loading:** Places the program image (or the built-in one) in RAM.
//! 3. **Monitor:** Runs the sdb mainloop on a rustyline terminal, on piped stdin,
//!    or once in batch mode.
//! 4. **Exit status:** 0 if the guest hit a good trap or the operator quit, 1 otherwise.

mod editor;
mod logging;

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rustyline::error::ReadlineError;
use rvmon_core::Simulator;
use rvmon_core::common::SimError;
use rvmon_core::config::Config;
use rvmon_core::sim::loader;
use rvmon_sdb::{BufReadSource, LineSource, MonitorError, Sdb};
use thiserror::Error;
use tracing::{debug, error};

use crate::editor::Editor;

#[derive(Parser, Debug)]
#[command(
    name = "rvmon",
    author,
    version,
    about = "RV64I reference machine with a NEMU-style monitor",
    long_about = "Load a raw RV64I image at the RAM base and control it from the sdb shell.\n\nWithout IMAGE a built-in program is used.\n\nExamples:\n  rvmon prog.bin\n  rvmon --batch prog.bin\n  echo 'x 16 0x80000000' | rvmon"
)]
struct Cli {
    /// Run the program to completion without reading commands.
    #[arg(short, long)]
    batch: bool,

    /// JSON configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write logs to FILE instead of stderr.
    #[arg(short, long, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Log every executed instruction (needs RUST_LOG=trace).
    #[arg(short, long)]
    trace: bool,

    /// Raw binary loaded at the RAM base.
    image: Option<PathBuf>,
}

impl Cli {
    /// Loads the config file, if any, and applies flag overrides.
    fn config(&self) -> Result<Config, SimError> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        config.general.batch_mode |= self.batch;
        config.general.trace_instructions |= self.trace;
        Ok(config)
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Sim(#[from] SimError),
    #[error(transparent)]
    Monitor(#[from] MonitorError),
    #[error("cannot open terminal: {0}")]
    Terminal(#[from] ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.log.as_deref()) {
        eprintln!("rvmon: cannot open log file: {e}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(sim) if sim.state.is_exit_status_bad() => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "fatal");
            eprintln!("rvmon: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Simulator, CliError> {
    let config = cli.config()?;
    let mut sim = Simulator::new(&config);
    let size = loader::load_img(&mut sim, cli.image.as_deref())?;
    debug!(size, batch = config.general.batch_mode, "image loaded");

    if !config.general.batch_mode {
        welcome(&mut io::stdout())?;
    }

    let stdin = io::stdin();
    if !config.general.batch_mode && stdin.is_terminal() {
        Ok(monitor(sim, Editor::new()?, &config)?)
    } else {
        Ok(monitor(sim, BufReadSource::new(stdin.lock()), &config)?)
    }
}

fn welcome(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Welcome to riscv64-NEMU!")?;
    writeln!(out, "For help, type \"help\"")
}

/// Runs the shell to completion and hands the machine back for the exit status.
fn monitor<S: LineSource>(
    sim: Simulator,
    source: S,
    config: &Config,
) -> Result<Simulator, MonitorError> {
    let mut sdb = Sdb::new(sim, source, io::stdout(), config);
    sdb.mainloop()?;
    let (sim, _, _) = sdb.into_parts();
    Ok(sim)
}
