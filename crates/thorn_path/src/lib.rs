//! UNIX-style path handling without an operating system.
//!
//! The std `Path`/`PathBuf` pair is built on `OsStr`; kernel code has no
//! OS strings, so this crate provides the same shape over plain `str`,
//! with `/` as the only separator. [`PathBuf`] normalizes while it grows:
//! the stored string never contains `.` or `..` segments or doubled
//! separators.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod components;
mod path;
mod path_buf;

pub use components::{Component, Components};
pub use path::Path;
pub use path_buf::PathBuf;

/// The path separator.
pub const SEPARATOR: char = '/';

/// `true` for the separator character.
pub fn is_separator(c: char) -> bool {
    c == SEPARATOR
}
