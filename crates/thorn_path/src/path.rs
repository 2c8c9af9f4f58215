//! The borrowed path slice.

use alloc::borrow::ToOwned;
use core::fmt;
use core::ops::Deref;

use crate::{Components, PathBuf, SEPARATOR};

/// A borrowed `/`-separated path, analogous to `str`.
///
/// `Path` is unsized and always handled through `&Path`, created by
/// [`Path::new`] from anything string-like. It stores the string exactly
/// as given; normalization happens when iterating [`components`] or when
/// building a [`PathBuf`].
///
/// [`components`]: Path::components
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl Path {
    /// Wrap a string slice as a path.
    #[allow(
        unsafe_code,
        reason = "&str to &Path cast, the same layout via repr(transparent)"
    )]
    pub fn new<S: AsRef<str> + ?Sized>(s: &S) -> &Path {
        // SAFETY: `Path` is a `repr(transparent)` wrapper around `str`, so
        // the pointee layouts are identical and the lifetime carries over
        // from the input reference.
        unsafe { &*(core::ptr::from_ref::<str>(s.as_ref()) as *const Path) }
    }

    /// View the path as a plain string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Iterate over the path's components.
    ///
    /// Runs of separators collapse, `.` and `..` become their own
    /// [`Component`](crate::Component) variants, and an absolute path
    /// yields the root first.
    pub fn components(&self) -> Components<'_> {
        Components::new(self)
    }

    /// `true` when the path starts at the root.
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with(SEPARATOR)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl Deref for Path {
    type Target = str;

    fn deref(&self) -> &str {
        &self.inner
    }
}

impl ToOwned for Path {
    type Owned = PathBuf;

    fn to_owned(&self) -> PathBuf {
        PathBuf::from(self)
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Path;

    #[test]
    fn displays_the_raw_string() {
        let path = Path::new("/dev/vda");
        assert_eq!("/dev/vda", path.to_string());
        assert_eq!("/dev/vda", path.as_str());
    }

    #[test]
    fn absolute_paths_start_with_the_separator() {
        assert!(Path::new("/proc").is_absolute());
        assert!(!Path::new("proc").is_absolute());
        assert!(!Path::new("").is_absolute());
    }

    #[test]
    fn derefs_to_str() {
        let path = Path::new("boot/initrd");
        assert!(path.starts_with("boot"));
        assert_eq!(11, path.len());
    }

    #[test]
    fn to_owned_round_trips() {
        let owned = Path::new("usr/share").to_owned();
        assert_eq!("usr/share", owned.to_string());
    }
}
