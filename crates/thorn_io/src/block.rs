//! Block devices and byte-addressed access on top of them.

use alloc::vec;

use crate::{Error, ReadAt, Result};

/// A device that transfers fixed-size blocks of bytes.
///
/// # Contract
///
/// - `block_size()` is non-zero and constant for the life of the device.
/// - `read_block`/`write_block` transfer exactly one whole block. `buf`
///   must hold at least `block_size()` bytes, otherwise
///   `Err(Error::BufferTooSmall)`; on success exactly `block_size()` bytes
///   are transferred, the tail of a larger `buf` is untouched, and
///   `Ok(block_size())` is returned.
/// - An index at or past `block_count()` yields `Err(Error::NoSuchBlock)`.
pub trait BlockDevice {
    /// The size of one block in bytes.
    fn block_size(&self) -> usize;

    /// The number of blocks on the device.
    fn block_count(&self) -> usize;

    /// Read block `index` into the front of `buf`.
    fn read_block(&self, index: u64, buf: &mut [u8]) -> Result<usize>;

    /// Write the front of `buf` to block `index`.
    fn write_block(&mut self, index: u64, buf: &[u8]) -> Result<usize>;
}

/// Byte-addressed reads for every block device.
///
/// The covering blocks are fetched whole into a scratch buffer and the
/// requested window is copied out; an aligned read of exactly one block
/// delegates to the device without copying. For a non-empty read the
/// covering range is `offset / bs ..= (offset + len - 1) / bs`, so a read
/// ending exactly on a block boundary never touches the following block.
impl<D> ReadAt<u8> for D
where
    D: BlockDevice,
{
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset % block_size is below block_size, which is a usize"
    )]
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        let block_size = self.block_size();
        let bs = block_size as u64;

        if offset % bs == 0 && buf.len() == block_size {
            return self.read_block(offset / bs, buf);
        }

        let last_byte = offset
            .checked_add(buf.len() as u64 - 1)
            .ok_or(Error::InvalidOffset)?;
        let first_block = offset / bs;
        let last_block = last_byte / bs;
        if last_block >= self.block_count() as u64 {
            return Err(Error::NoSuchBlock);
        }

        let span = usize::try_from(last_block - first_block + 1)
            .map_err(|_| Error::InvalidOffset)?;
        let scratch_len = span
            .checked_mul(block_size)
            .ok_or(Error::InvalidOffset)?;
        let mut scratch = vec![0_u8; scratch_len];
        for (i, chunk) in scratch.chunks_exact_mut(block_size).enumerate() {
            self.read_block(first_block + i as u64, chunk)?;
        }

        let window = (offset % bs) as usize;
        buf.copy_from_slice(&scratch[window..window + buf.len()]);
        Ok(buf.len())
    }
}
