//! Output traits: streaming [`Write`] and positional [`WriteAt`].

use crate::{Error, Result};

/// A sink for elements, written through an internal cursor.
pub trait Write<T> {
    /// Write the front of `buf` to this sink once.
    ///
    /// Returns the number of elements consumed. `Ok(0)` means the sink can
    /// accept no more data (or `buf` is empty).
    fn write(&mut self, buf: &[T]) -> Result<usize>;

    /// Flush any buffered data to the underlying sink.
    fn flush(&mut self) -> Result<()>;

    /// Write the whole of `buf`.
    ///
    /// Calls [`write`](Write::write) in a loop. If the sink stops accepting
    /// data before the buffer is exhausted, `Err(Error::WriteZero)` is
    /// returned; how much of `buf` was consumed by then is unspecified.
    fn write_all(&mut self, mut buf: &[T]) -> Result<()> {
        while !buf.is_empty() {
            match self.write(buf) {
                Ok(0) => break,
                Ok(n) => buf = &buf[n..],
                Err(e) => return Err(e),
            }
        }
        if buf.is_empty() {
            Ok(())
        } else {
            Err(Error::WriteZero)
        }
    }
}

/// A sink that accepts writes at arbitrary offsets without a cursor.
///
/// Offsets are in units of `T`, matching [`ReadAt`](crate::ReadAt).
pub trait WriteAt<T> {
    /// Write `buf` to this sink at `offset`, returning the number of
    /// elements consumed.
    fn write_at(&mut self, offset: u64, buf: &[T]) -> Result<usize>;
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
