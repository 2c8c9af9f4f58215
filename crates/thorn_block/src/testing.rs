//! Instrumented devices for cache and overlay tests.
//!
//! Not gated behind `cfg(test)`: integration tests and downstream crates
//! assert on these counters too.

use core::sync::atomic::{AtomicUsize, Ordering};

use thorn_io::{BlockDevice, Error, Result};

/// A device whose blocks all read as one constant byte, counting every
/// trait call.
///
/// The counters make caching observable: a block cache in front of a
/// `FillDevice` should absorb repeated reads and leave the counters
/// still. Writes are accepted, counted and discarded.
pub struct FillDevice {
    block_size: usize,
    block_count: usize,
    fill: u8,
    size_queries: AtomicUsize,
    count_queries: AtomicUsize,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl FillDevice {
    /// Create a device with the given geometry whose blocks read as
    /// `fill`.
    pub fn new(block_size: usize, block_count: usize, fill: u8) -> Self {
        debug_assert!(block_size > 0, "block size must be non-zero");
        Self {
            block_size,
            block_count,
            fill,
            size_queries: AtomicUsize::new(0),
            count_queries: AtomicUsize::new(0),
            reads: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
        }
    }

    /// How often `block_size` was called.
    pub fn size_queries(&self) -> usize {
        self.size_queries.load(Ordering::SeqCst)
    }

    /// How often `block_count` was called.
    pub fn count_queries(&self) -> usize {
        self.count_queries.load(Ordering::SeqCst)
    }

    /// How often `read_block` was called, including rejected calls.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// How often `write_block` was called, including rejected calls.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl BlockDevice for FillDevice {
    fn block_size(&self) -> usize {
        self.size_queries.fetch_add(1, Ordering::SeqCst);
        self.block_size
    }

    fn block_count(&self) -> usize {
        self.count_queries.fetch_add(1, Ordering::SeqCst);
        self.block_count
    }

    fn read_block(&self, index: u64, buf: &mut [u8]) -> Result<usize> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if buf.len() < self.block_size {
            return Err(Error::BufferTooSmall);
        }
        if index >= self.block_count as u64 {
            return Err(Error::NoSuchBlock);
        }
        buf[..self.block_size].fill(self.fill);
        Ok(self.block_size)
    }

    fn write_block(&mut self, index: u64, buf: &[u8]) -> Result<usize> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if buf.len() < self.block_size {
            return Err(Error::BufferTooSmall);
        }
        if index >= self.block_count as u64 {
            return Err(Error::NoSuchBlock);
        }
        Ok(self.block_size)
    }
}
