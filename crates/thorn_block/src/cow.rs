//! A copy-on-write overlay over a read-only base device.

use alloc::collections::btree_map::Entry;
use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;

use spin::Mutex;
use thorn_io::{BlockDevice, Error, Result};
use tracing::debug;

/// Shadows writes over a base device that is never written.
///
/// Reads prefer the shadow copy of a block and fall through to the base;
/// the first write to a block copies it up from the base before applying
/// the change. Dropping the overlay discards every shadowed block, which
/// is how snapshots are thrown away.
pub struct CowDevice<D>
where
    D: BlockDevice,
{
    base: D,
    shadow: Mutex<BTreeMap<u64, Vec<u8>>>,
}

impl<D> CowDevice<D>
where
    D: BlockDevice,
{
    /// Overlay `base` with an empty shadow.
    pub fn new(base: D) -> Self {
        Self {
            base,
            shadow: Mutex::new(BTreeMap::new()),
        }
    }

    /// Discard the overlay, returning the unmodified base.
    pub fn into_base(self) -> D {
        self.base
    }

    /// `true` when block `index` has a shadow copy.
    pub fn is_shadowed(&self, index: u64) -> bool {
        self.shadow.lock().contains_key(&index)
    }

    /// The number of shadowed blocks.
    pub fn shadowed_len(&self) -> usize {
        self.shadow.lock().len()
    }
}

impl<D> BlockDevice for CowDevice<D>
where
    D: BlockDevice,
{
    fn block_size(&self) -> usize {
        self.base.block_size()
    }

    fn block_count(&self) -> usize {
        self.base.block_count()
    }

    fn read_block(&self, index: u64, buf: &mut [u8]) -> Result<usize> {
        let block_size = self.base.block_size();
        if buf.len() < block_size {
            return Err(Error::BufferTooSmall);
        }

        if let Some(shadowed) = self.shadow.lock().get(&index) {
            buf[..block_size].copy_from_slice(shadowed);
            return Ok(block_size);
        }

        self.base.read_block(index, buf)
    }

    /// Copy-up on first write: the block is read from the base before the
    /// change is applied to the shadow. A block missing on the base
    /// propagates `Err(Error::NoSuchBlock)` and leaves no shadow entry.
    fn write_block(&mut self, index: u64, buf: &[u8]) -> Result<usize> {
        let block_size = self.base.block_size();
        if buf.len() < block_size {
            return Err(Error::BufferTooSmall);
        }

        let mut shadow = self.shadow.lock();
        let shadowed = match shadow.entry(index) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let mut copied = vec![0_u8; block_size];
                self.base.read_block(index, &mut copied)?;
                debug!(block = index, "copied up into the overlay");
                entry.insert(copied)
            }
        };
        shadowed[..block_size].copy_from_slice(&buf[..block_size]);

        Ok(block_size)
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
