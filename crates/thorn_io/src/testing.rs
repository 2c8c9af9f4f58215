//! Adapters for exercising I/O consumers in tests.
//!
//! Not gated behind `cfg(test)`: downstream crates use these fixtures in
//! their own test suites.

use crate::{Read, ReadAt, Result};

/// Forwards reads with the buffer truncated to a single element.
///
/// A [`Read`] or [`ReadAt`] source wrapped in `ShortRead` returns at most
/// one element per call. Consumers that assume a full buffer per call
/// break immediately under it, so tests use it to prove loops like
/// [`Read::read_exact`] handle short counts.
pub struct ShortRead<R> {
    inner: R,
}

impl<R> ShortRead<R> {
    /// Wrap `inner`.
    pub const fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Consume the adapter, returning the wrapped source.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R, T> Read<T> for ShortRead<R>
where
    R: Read<T>,
{
    fn read(&mut self, buf: &mut [T]) -> Result<usize> {
        let len = buf.len().min(1);
        self.inner.read(&mut buf[..len])
    }
}

impl<R, T> ReadAt<T> for ShortRead<R>
where
    R: ReadAt<T>,
{
    fn read_at(&self, offset: u64, buf: &mut [T]) -> Result<usize> {
        let len = buf.len().min(1);
        self.inner.read_at(offset, &mut buf[..len])
    }
}
