//! Physical System Memory (DRAM).
//!
//! Flat little-endian RAM mapped at a configurable physical base. Every access
//! is bounds-checked; a stray guest pointer or a monitor `x` on an unmapped
//! address yields [`SimError::AddressOutOfBounds`] instead of a panic.

use crate::common::{SimError, SimResult};

/// Main memory mapped at `[base, base + size)`.
#[derive(Debug)]
pub struct Memory {
    data: Vec<u8>,
    base: u64,
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes at physical address `base`.
    pub fn new(base: u64, size: usize) -> Self {
        Self {
            data: vec![0; size],
            base,
        }
    }

    /// First mapped physical address.
    pub const fn base(&self) -> u64 {
        self.base
    }

    /// Size in bytes.
    pub const fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns true if `[addr, addr + len)` lies entirely inside RAM.
    pub fn in_pmem(&self, addr: u64, len: usize) -> bool {
        self.offset(addr, len).is_some()
    }

    fn offset(&self, addr: u64, len: usize) -> Option<usize> {
        let off = usize::try_from(addr.checked_sub(self.base)?).ok()?;
        (off.checked_add(len)? <= self.data.len()).then_some(off)
    }

    fn check(&self, addr: u64, len: usize) -> SimResult<usize> {
        if !matches!(len, 1 | 2 | 4 | 8) {
            return Err(SimError::InvalidAccessSize(len));
        }
        self.offset(addr, len)
            .ok_or_else(|| SimError::AddressOutOfBounds {
                addr,
                len,
                base: self.base,
                end: self
                    .base
                    .wrapping_add(self.data.len() as u64)
                    .wrapping_sub(1),
            })
    }

    /// Reads `len` bytes at physical address `addr`, zero-extended to 64 bits.
    ///
    /// # Arguments
    ///
    /// * `addr` - Physical address of the first byte.
    /// * `len` - Access width: 1, 2, 4 or 8.
    ///
    /// # Returns
    ///
    /// The little-endian value, or an error for bad widths and unmapped addresses.
    pub fn paddr_read(&self, addr: u64, len: usize) -> SimResult<u64> {
        let off = self.check(addr, len)?;
        let mut buf = [0u8; 8];
        buf[..len].copy_from_slice(&self.data[off..off + len]);
        Ok(u64::from_le_bytes(buf))
    }

    /// Writes the low `len` bytes of `val` at physical address `addr`.
    pub fn paddr_write(&mut self, addr: u64, len: usize, val: u64) -> SimResult<()> {
        let off = self.check(addr, len)?;
        self.data[off..off + len].copy_from_slice(&val.to_le_bytes()[..len]);
        Ok(())
    }

    /// Copies `image` into RAM starting at the base address.
    pub fn load_image(&mut self, image: &[u8]) -> SimResult<()> {
        if image.len() > self.data.len() {
            return Err(SimError::ImageTooLarge {
                size: image.len(),
                ram_size: self.data.len(),
            });
        }
        self.data[..image.len()].copy_from_slice(image);
        Ok(())
    }
}
