//! Input traits: streaming [`Read`] and positional [`ReadAt`].

use alloc::vec::Vec;

use crate::{Error, Result};

/// A source of elements, read through an internal cursor.
pub trait Read<T> {
    /// Read from this source once, placing the result at the front of `buf`.
    ///
    /// Returns the number of elements read. `Ok(0)` means the source
    /// reached end of input (or `buf` is empty). A single call may read
    /// fewer elements than `buf` holds; use [`read_exact`](Read::read_exact)
    /// when the full buffer is required.
    fn read(&mut self, buf: &mut [T]) -> Result<usize>;

    /// Read until `buf` is completely filled.
    ///
    /// Calls [`read`](Read::read) in a loop, so sources that return short
    /// counts are handled. If the source reaches end of input first,
    /// `Err(Error::UnexpectedEof)` is returned and the buffer contents are
    /// unspecified.
    fn read_exact(&mut self, mut buf: &mut [T]) -> Result<()> {
        while !buf.is_empty() {
            match self.read(buf) {
                Ok(0) => break,
                Ok(n) => buf = &mut buf[n..],
                Err(e) => return Err(e),
            }
        }
        if buf.is_empty() {
            Ok(())
        } else {
            Err(Error::UnexpectedEof)
        }
    }
}

/// A `&mut` reference reads like the source itself, so helpers such as the
/// byte-order macros accept both owned sources and references.
impl<R, T> Read<T> for &mut R
where
    R: Read<T> + ?Sized,
{
    fn read(&mut self, buf: &mut [T]) -> Result<usize> {
        (**self).read(buf)
    }
}

/// A source that can be read at arbitrary offsets without a cursor.
///
/// Offsets are in units of `T`, matching the element type of the source.
/// `read_at` takes `&self`: positional reads carry no state, so a shared
/// source can serve many readers.
pub trait ReadAt<T> {
    /// Read from this source at `offset`, placing the result in `buf`.
    ///
    /// Like [`Read::read`], this does not guarantee to fill `buf`.
    fn read_at(&self, offset: u64, buf: &mut [T]) -> Result<usize>;
}

impl<T> ReadAt<T> for [T]
where
    T: Copy,
{
    /// Reads exactly `buf.len()` elements starting at `offset`.
    ///
    /// The whole range must lie inside the slice, otherwise
    /// `Err(Error::InvalidOffset)` is returned and `buf` is untouched.
    fn read_at(&self, offset: u64, buf: &mut [T]) -> Result<usize> {
        let start = usize::try_from(offset).map_err(|_| Error::InvalidOffset)?;
        let end = start.checked_add(buf.len()).ok_or(Error::InvalidOffset)?;
        let source = self.get(start..end).ok_or(Error::InvalidOffset)?;
        buf.copy_from_slice(source);
        Ok(buf.len())
    }
}

impl<T> ReadAt<T> for Vec<T>
where
    T: Copy,
{
    fn read_at(&self, offset: u64, buf: &mut [T]) -> Result<usize> {
        self.as_slice().read_at(offset, buf)
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
