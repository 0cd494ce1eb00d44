//! Configuration for the reference machine and its monitor.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline constants (RAM placement and size, prompt).
//! 2. **Structures:** General, memory and device sections.
//! 3. **Loading:** JSON files via [`Config::from_file`]; `Config::default()` when no file is given.
//!
//! Every field is optional in JSON; missing fields take the defaults below.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::{SimError, SimResult};

/// Default configuration constants.
mod defaults {
    /// Base address of main system RAM (2 GiB).
    ///
    /// This is also the reset PC: images are loaded here and execution starts
    /// at their first byte.
    pub const RAM_BASE: u64 = 0x8000_0000;

    /// Total size of main system RAM (128 MiB).
    pub const RAM_SIZE: usize = 128 * 1024 * 1024;

    /// Prompt printed by the interactive line editor.
    pub const PROMPT: &str = "(nemu) ";
}

/// Root configuration.
///
/// # Example
///
/// ```
/// use rvmon_core::config::Config;
///
/// let json = r#"{
///     "general": { "batch_mode": true },
///     "memory": { "ram_size": 4096 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.batch_mode);
/// assert_eq!(config.memory.ram_size, 4096);
/// assert_eq!(config.memory.ram_base, 0x8000_0000);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General run settings.
    pub general: GeneralConfig,
    /// Physical memory layout.
    pub memory: MemoryConfig,
    /// Device emulation.
    pub device: DeviceConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file.
    ///
    /// # Returns
    ///
    /// The parsed configuration, or [`SimError::ConfigRead`] / [`SimError::ConfigParse`].
    pub fn from_file(path: &Path) -> SimResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General run settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log every executed instruction at `trace` level.
    pub trace_instructions: bool,

    /// Run the guest to completion without reading monitor commands.
    pub batch_mode: bool,

    /// Interactive prompt.
    pub prompt: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            batch_mode: false,
            prompt: defaults::PROMPT.to_string(),
        }
    }
}

/// Physical memory layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Main RAM base address; also the reset PC.
    pub ram_base: u64,

    /// Main RAM size in bytes.
    pub ram_size: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_base: defaults::RAM_BASE,
            ram_size: defaults::RAM_SIZE,
        }
    }
}

/// Device emulation settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Drain the host device event queue before each monitor command.
    pub enabled: bool,
}
