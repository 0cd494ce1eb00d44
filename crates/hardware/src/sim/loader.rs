//! Program Image Loader.
//!
//! This module places the guest program in RAM. It performs:
//! 1. **Image loading:** Reads a raw binary from disk and copies it to the RAM base.
//! 2. **Built-in fallback:** Without an image, installs a tiny program that
//!    stores and reloads a byte and then halts with a good trap.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::{SimError, SimResult};
use crate::sim::Simulator;

/// Program used when no image is given.
///
/// ```text
/// auipc t0, 0
/// sb    zero, 16(t0)
/// lbu   a0, 16(t0)
/// ebreak
/// .word 0xdeadbeef
/// ```
pub const BUILTIN_IMAGE: [u32; 5] = [0x0000_0297, 0x0002_8823, 0x0102_c503, 0x0010_0073, 0xdead_beef];

/// Returns the built-in image as little-endian bytes.
pub fn builtin_image() -> Vec<u8> {
    BUILTIN_IMAGE.iter().flat_map(|w| w.to_le_bytes()).collect()
}

/// Loads `path` (or the built-in image) at the RAM base.
///
/// # Arguments
///
/// * `sim` - Simulator whose RAM receives the image.
/// * `path` - Raw binary to load; `None` selects [`BUILTIN_IMAGE`].
///
/// # Returns
///
/// The image size in bytes.
pub fn load_img(sim: &mut Simulator, path: Option<&Path>) -> SimResult<usize> {
    let image = match path {
        Some(path) => fs::read(path).map_err(|source| SimError::ImageRead {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            info!("No image is given. Use the default build-in image.");
            builtin_image()
        }
    };
    sim.mem.load_image(&image)?;
    info!(
        size = image.len(),
        base = format_args!("{:#x}", sim.mem.base()),
        "image loaded"
    );
    Ok(image.len())
}
