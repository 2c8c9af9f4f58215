//! The owned, growable path.

use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;

use crate::{Component, Components, Path, SEPARATOR};

/// An owned `/`-separated path, analogous to `String`.
///
/// [`push`](PathBuf::push) normalizes as it goes: separators are inserted
/// between segments, `.` segments are dropped, and `..` segments resolve
/// lexically against what was pushed before. The stored string therefore
/// never contains `.` or `..` segments or doubled separators.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct PathBuf {
    inner: String,
}

impl PathBuf {
    /// Create an empty path.
    pub const fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Append `path`, component by component.
    ///
    /// - Pushing an absolute path onto an empty buffer makes it absolute;
    ///   on a non-empty buffer the root component is ignored.
    /// - `..` behaves like [`pop`](PathBuf::pop): it keeps the root of an
    ///   absolute path and empties a single-segment relative one.
    pub fn push<P: AsRef<Path>>(&mut self, path: P) {
        for component in path.as_ref().components() {
            match component {
                Component::RootDir => {
                    if self.inner.is_empty() {
                        self.inner.push(SEPARATOR);
                    }
                }
                Component::CurrentDir => {}
                Component::ParentDir => {
                    self.pop();
                }
                Component::Normal(segment) => {
                    if !self.inner.is_empty() && !self.inner.ends_with(SEPARATOR) {
                        self.inner.push(SEPARATOR);
                    }
                    self.inner.push_str(segment);
                }
            }
        }
    }

    /// Remove the last segment, keeping the root of an absolute path.
    ///
    /// Returns `false` (and changes nothing) when the buffer is empty or
    /// holds only the root.
    pub fn pop(&mut self) -> bool {
        let trimmed = self.inner.trim_end_matches(SEPARATOR);
        if trimmed.is_empty() {
            return false;
        }
        match trimmed.rfind(SEPARATOR) {
            // direct child of the root: keep the root itself
            Some(0) => self.inner.truncate(1),
            Some(separator) => self.inner.truncate(separator),
            None => self.inner.clear(),
        }
        true
    }

    /// Borrow as a [`Path`].
    pub fn as_path(&self) -> &Path {
        Path::new(&self.inner)
    }

    /// Iterate over the components.
    pub fn components(&self) -> Components<'_> {
        self.as_path().components()
    }

    /// Split into the plain segments, in order.
    ///
    /// The root is not a segment. Dots were already resolved by
    /// [`push`](PathBuf::push), so `..` that would have climbed above the
    /// start is gone by now.
    ///
    /// ```text
    /// "/a/b/../c"  =>  ["a", "c"]
    /// ```
    pub fn into_segments(self) -> Vec<PathBuf> {
        self.components()
            .filter_map(|component| match component {
                Component::Normal(segment) => Some(segment.into()),
                _ => None,
            })
            .collect()
    }

    /// The length of the path in bytes.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// `true` for the empty path.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Builds a normalized path from anything path-like.
///
/// `PathBuf` itself must not implement `AsRef<Path>`: that would make
/// this impl overlap the reflexive `From`.
impl<P> From<P> for PathBuf
where
    P: AsRef<Path>,
{
    fn from(path: P) -> Self {
        let mut buf = Self::new();
        buf.push(path);
        buf
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self.as_path()
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}
