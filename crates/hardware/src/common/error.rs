//! Simulator error definitions.
//!
//! This module defines the failures the reference machine reports to its callers:
//! 1. **Execution faults:** Illegal instructions, physical accesses outside RAM or
//!    with an unsupported width.
//! 2. **Image loading:** I/O failures and images that do not fit in RAM.
//! 3. **Configuration:** Malformed JSON configuration files.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the reference machine.
#[derive(Debug, Error)]
pub enum SimError {
    /// A physical access fell (partly) outside `[ram_base, ram_base + ram_size)`.
    #[error("address {addr:#010x} (len {len}) is out of bound [{base:#010x}, {end:#010x}]")]
    AddressOutOfBounds {
        /// First byte of the access.
        addr: u64,
        /// Access width in bytes.
        len: usize,
        /// First valid RAM address.
        base: u64,
        /// Last valid RAM address.
        end: u64,
    },

    /// The fetched word is not an instruction the machine implements.
    #[error("invalid instruction {inst:#010x} at pc = {pc:#018x}")]
    IllegalInstruction {
        /// Address of the instruction.
        pc: u64,
        /// Raw encoding.
        inst: u32,
    },

    /// A physical access used a width other than 1, 2, 4 or 8 bytes.
    #[error("invalid access size {0}, expected 1, 2, 4 or 8")]
    InvalidAccessSize(usize),

    /// The program image could not be read.
    #[error("cannot read image '{path}': {source}")]
    ImageRead {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The program image is larger than RAM.
    #[error("image of {size} bytes does not fit in {ram_size} bytes of RAM")]
    ImageTooLarge {
        /// Image size in bytes.
        size: usize,
        /// Configured RAM size in bytes.
        ram_size: usize,
    },

    /// A configuration file could not be read.
    #[error("cannot read config '{path}': {source}")]
    ConfigRead {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A configuration file is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type SimResult<T> = Result<T, SimError>;
