//! A memory-backed block device.

use alloc::vec;
use alloc::vec::Vec;

use thorn_io::{BlockDevice, Error, Result};

/// A block device storing its blocks in a `Vec<u8>`: the ramdisk.
///
/// Geometry is fixed at construction; the backing vector always holds
/// exactly `block_size * block_count` bytes.
pub struct MemDevice {
    block_size: usize,
    data: Vec<u8>,
}

impl MemDevice {
    /// Create a zero-filled device. `block_size` must be non-zero.
    pub fn new(block_size: usize, block_count: usize) -> Self {
        debug_assert!(block_size > 0, "block size must be non-zero");
        Self {
            block_size,
            data: vec![0_u8; block_size * block_count],
        }
    }

    /// Take ownership of `bytes` as the device contents.
    ///
    /// The length must be a multiple of `block_size`, otherwise
    /// `Err(Error::InvalidInput)`.
    pub fn from_vec(block_size: usize, bytes: Vec<u8>) -> Result<Self> {
        if block_size == 0 || bytes.len() % block_size != 0 {
            return Err(Error::InvalidInput);
        }
        Ok(Self {
            block_size,
            data: bytes,
        })
    }

    /// Consume the device, returning the raw contents.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    fn offset_of(&self, index: u64) -> Result<usize> {
        let index = usize::try_from(index).map_err(|_| Error::NoSuchBlock)?;
        if index >= self.block_count() {
            return Err(Error::NoSuchBlock);
        }
        Ok(index * self.block_size)
    }
}

impl BlockDevice for MemDevice {
    fn block_size(&self) -> usize {
        self.block_size
    }

    fn block_count(&self) -> usize {
        self.data.len() / self.block_size
    }

    fn read_block(&self, index: u64, buf: &mut [u8]) -> Result<usize> {
        if buf.len() < self.block_size {
            return Err(Error::BufferTooSmall);
        }
        let start = self.offset_of(index)?;
        buf[..self.block_size].copy_from_slice(&self.data[start..start + self.block_size]);
        Ok(self.block_size)
    }

    fn write_block(&mut self, index: u64, buf: &[u8]) -> Result<usize> {
        if buf.len() < self.block_size {
            return Err(Error::BufferTooSmall);
        }
        let start = self.offset_of(index)?;
        self.data[start..start + self.block_size].copy_from_slice(&buf[..self.block_size]);
        Ok(self.block_size)
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
