//! Cursor positioning for seekable sources.

use crate::Result;

/// A position within a seekable source.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SeekFrom {
    /// Offset from the start of the source.
    Start(u64),
    /// Signed offset from the end of the source.
    End(i64),
    /// Signed offset from the current position.
    Current(i64),
}

/// A source with a movable cursor.
pub trait Seek {
    /// Move the cursor to `pos`, returning the new position from the start.
    fn seek(&mut self, pos: SeekFrom) -> Result<u64>;

    /// Move the cursor back to the start of the source.
    fn rewind(&mut self) -> Result<u64> {
        self.seek(SeekFrom::Start(0))
    }

    /// Report the current position without moving the cursor.
    fn stream_position(&mut self) -> Result<u64> {
        self.seek(SeekFrom::Current(0))
    }
}
