//! An in-memory cursor adapting a buffer to the I/O traits.

use crate::{Error, Read, Result, Seek, SeekFrom, Write};

/// Wraps an in-memory buffer and tracks a read/write position.
///
/// Anything usable as a byte slice works as the buffer: [`Read`] and
/// [`Seek`] need `T: AsRef<[u8]>`, [`Write`] needs `T: AsMut<[u8]>`. This
/// gives in-memory data the same interface as a device, which is how boot
/// archives and test fixtures are parsed.
///
/// Seeking is restricted to `0..=len`, with the end position itself a
/// valid target. [`set_position`](Cursor::set_position) is the unchecked
/// escape hatch; reads at a position past the end return `Ok(0)` and
/// writes there accept nothing.
#[derive(Debug)]
pub struct Cursor<T> {
    inner: T,
    pos: u64,
}

impl<T> Cursor<T> {
    /// Create a cursor over `inner`, positioned at 0.
    pub const fn new(inner: T) -> Self {
        Self { inner, pos: 0 }
    }

    /// Consume the cursor, returning the underlying buffer.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Borrow the underlying buffer.
    pub const fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying buffer.
    ///
    /// Changing the buffer length through this handle is allowed; the
    /// position is not adjusted and later reads clamp to the new length.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// The current position.
    pub const fn position(&self) -> u64 {
        self.pos
    }

    /// Set the position without bounds checking.
    pub fn set_position(&mut self, pos: u64) {
        self.pos = pos;
    }
}

impl<T> Cursor<T>
where
    T: AsRef<[u8]>,
{
    /// The part of the buffer after the current position.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the position is clamped to the buffer length, which fits in usize"
    )]
    pub fn remaining_slice(&self) -> &[u8] {
        let data = self.inner.as_ref();
        let start = self.pos.min(data.len() as u64) as usize;
        &data[start..]
    }

    /// `true` when the position is at or past the end of the buffer.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.inner.as_ref().len() as u64
    }
}

impl<T> Clone for Cursor<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            pos: self.pos,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.inner.clone_from(&source.inner);
        self.pos = source.pos;
    }
}

impl<T> Seek for Cursor<T>
where
    T: AsRef<[u8]>,
{
    /// Seeks within `0..=len`.
    ///
    /// Arithmetic is checked: a negative result or a target past the end
    /// yields `Err(Error::InvalidOffset)` and leaves the position
    /// unchanged.
    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        let len = self.inner.as_ref().len() as u64;
        let target = match pos {
            SeekFrom::Start(n) => Some(n),
            SeekFrom::End(n) => len.checked_add_signed(n),
            SeekFrom::Current(n) => self.pos.checked_add_signed(n),
        };
        match target {
            Some(n) if n <= len => {
                self.pos = n;
                Ok(n)
            }
            _ => Err(Error::InvalidOffset),
        }
    }
}

impl<T> Read<u8> for Cursor<T>
where
    T: AsRef<[u8]>,
{
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the position is clamped to the buffer length, which fits in usize"
    )]
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let data = self.inner.as_ref();
        let start = self.pos.min(data.len() as u64) as usize;
        let len = buf.len().min(data.len() - start);
        buf[..len].copy_from_slice(&data[start..start + len]);
        self.pos += len as u64;
        Ok(len)
    }
}

impl<T> Write<u8> for Cursor<T>
where
    T: AsMut<[u8]>,
{
    /// Writes the prefix of `buf` that fits before the end of the buffer.
    ///
    /// The buffer never grows; `Ok(0)` signals it is full.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the position is clamped to the buffer length, which fits in usize"
    )]
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let data = self.inner.as_mut();
        let start = self.pos.min(data.len() as u64) as usize;
        let len = buf.len().min(data.len() - start);
        data[start..start + len].copy_from_slice(&buf[..len]);
        self.pos += len as u64;
        Ok(len)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
