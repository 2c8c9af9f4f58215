//! A write-back LRU cache in front of a block device.

use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;

use spin::{Mutex, RwLock};
use thorn_collections::LruCache;
use thorn_io::{BlockDevice, Error, Result};
use tracing::{debug, trace, warn};

/// One cached block, holding a handle to its device for write-back.
struct CacheEntry<D>
where
    D: BlockDevice,
{
    device: Rc<RwLock<D>>,
    index: u64,
    data: Vec<u8>,
    dirty: bool,
}

impl<D> Drop for CacheEntry<D>
where
    D: BlockDevice,
{
    /// Write a dirty block back to its device.
    ///
    /// Runs when the entry leaves the cache (LRU eviction,
    /// [`BlockCache::flush`] or cache teardown). Failures must not panic
    /// in a drop path; they are logged and the block contents are lost.
    fn drop(&mut self) {
        if !self.dirty {
            return;
        }
        if self.device.write().write_block(self.index, &self.data).is_err() {
            warn!(block = self.index, "write-back failed, block contents lost");
        }
    }
}

/// A write-back LRU cache over any [`BlockDevice`].
///
/// Reads are served from cached copies where possible; writes only touch
/// the cache and mark the block dirty. Dirty blocks reach the device when
/// their entry leaves the cache: pushed out by a full insert, dropped with
/// the cache, or explicitly via [`flush`](BlockCache::flush).
///
/// # Invariant
///
/// - At most `capacity` blocks are cached at any time.
/// - Every cached block holds exactly `block_size` bytes.
/// - A dirty block is written back exactly once, with its latest bytes.
pub struct BlockCache<D>
where
    D: BlockDevice,
{
    entries: Mutex<LruCache<Rc<RwLock<CacheEntry<D>>>>>,
    block_size: usize,
    device: Rc<RwLock<D>>,
}

impl<D> BlockCache<D>
where
    D: BlockDevice,
{
    /// Put a cache holding up to `capacity` blocks in front of `device`.
    ///
    /// The block size is captured here, with a single device call, and
    /// reused for every later transfer.
    pub fn new(device: D, capacity: usize) -> Self {
        let block_size = device.block_size();
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            block_size,
            device: Rc::new(RwLock::new(device)),
        }
    }

    /// Write every dirty block back to the device and empty the cache.
    ///
    /// Write-back runs in the entries' drop path, so failures surface in
    /// the log only.
    pub fn flush(&self) {
        let mut entries = self.entries.lock();
        let capacity = entries.capacity();
        *entries = LruCache::new(capacity);
    }

    fn lookup(&self, index: u64) -> Option<Rc<RwLock<CacheEntry<D>>>> {
        self.entries
            .lock()
            .find(|entry| entry.read().index == index)
            .cloned()
    }
}

impl<D> BlockDevice for BlockCache<D>
where
    D: BlockDevice,
{
    fn block_size(&self) -> usize {
        self.block_size
    }

    fn block_count(&self) -> usize {
        self.device.read().block_count()
    }

    fn read_block(&self, index: u64, buf: &mut [u8]) -> Result<usize> {
        if buf.len() < self.block_size {
            return Err(Error::BufferTooSmall);
        }

        let entry = match self.lookup(index) {
            Some(entry) => {
                trace!(block = index, "read hit");
                entry
            }
            None => {
                trace!(block = index, "read miss");
                let mut data = vec![0_u8; self.block_size];
                self.device.read().read_block(index, &mut data)?;

                let entry = Rc::new(RwLock::new(CacheEntry {
                    device: Rc::clone(&self.device),
                    index,
                    data,
                    dirty: false,
                }));
                self.entries.lock().insert(Rc::clone(&entry));
                debug!(block = index, "block cached");
                entry
            }
        };
        buf[..self.block_size].copy_from_slice(&entry.read().data);

        Ok(self.block_size)
    }

    fn write_block(&mut self, index: u64, buf: &[u8]) -> Result<usize> {
        if buf.len() < self.block_size {
            return Err(Error::BufferTooSmall);
        }
        if index >= self.device.read().block_count() as u64 {
            return Err(Error::NoSuchBlock);
        }

        match self.lookup(index) {
            Some(entry) => {
                trace!(block = index, "write hit");
                let mut entry = entry.write();
                entry.data[..].copy_from_slice(&buf[..self.block_size]);
                entry.dirty = true;
            }
            None => {
                // the whole block is replaced, so nothing is read from
                // the device
                let entry = Rc::new(RwLock::new(CacheEntry {
                    device: Rc::clone(&self.device),
                    index,
                    data: buf[..self.block_size].to_vec(),
                    dirty: true,
                }));
                self.entries.lock().insert(entry);
                debug!(block = index, "dirty block cached");
            }
        }

        Ok(self.block_size)
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
