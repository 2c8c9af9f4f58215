//! Byte-order read macros for decoding on-disk structures.
//!
//! Every macro pulls its bytes through [`Read::read_exact`](crate::Read)
//! and propagates failures with `?`, so they can only appear inside
//! functions returning [`Result`](crate::Result) (or a compatible error
//! type).
//!
//! ```text
//! fn parse_header(src: &mut impl Read<u8>) -> Result<Header> {
//!     let magic = read_be_u32!(src);
//!     let name = read_str_until_nul!(src, 16);
//!     let blocks = read_le_u16!(src);
//!     ...
//! }
//! ```

use alloc::string::String;

/// Read exactly `$count` bytes from `$source` into a fresh `[u8; $count]`.
///
/// `$count` must be a constant expression.
#[macro_export]
macro_rules! read_bytes {
    ($source:expr, $count:expr) => {{
        let mut buf = [0_u8; $count];
        $crate::Read::read_exact(&mut $source, &mut buf)?;
        buf
    }};
}

/// Read a single byte.
#[macro_export]
macro_rules! read_u8 {
    ($source:expr) => {
        $crate::read_bytes!($source, 1)[0]
    };
}

/// Read a big-endian `u16`.
#[macro_export]
macro_rules! read_be_u16 {
    ($source:expr) => {
        u16::from_be_bytes($crate::read_bytes!($source, 2))
    };
}

/// Read a big-endian `u32`.
#[macro_export]
macro_rules! read_be_u32 {
    ($source:expr) => {
        u32::from_be_bytes($crate::read_bytes!($source, 4))
    };
}

/// Read a big-endian `u64`.
#[macro_export]
macro_rules! read_be_u64 {
    ($source:expr) => {
        u64::from_be_bytes($crate::read_bytes!($source, 8))
    };
}

/// Read a little-endian `u16`.
#[macro_export]
macro_rules! read_le_u16 {
    ($source:expr) => {
        u16::from_le_bytes($crate::read_bytes!($source, 2))
    };
}

/// Read a little-endian `u32`.
#[macro_export]
macro_rules! read_le_u32 {
    ($source:expr) => {
        u32::from_le_bytes($crate::read_bytes!($source, 4))
    };
}

/// Read a little-endian `u64`.
#[macro_export]
macro_rules! read_le_u64 {
    ($source:expr) => {
        u64::from_le_bytes($crate::read_bytes!($source, 8))
    };
}

/// Read `$count` bytes and decode everything before the first NUL as a
/// string. Fixed-width name fields on disk are NUL padded; without any
/// NUL, all `$count` bytes are decoded. Invalid UTF-8 is replaced
/// lossily.
#[macro_export]
macro_rules! read_str_until_nul {
    ($source:expr, $count:expr) => {{
        let buf = $crate::read_bytes!($source, $count);
        $crate::macros::str_until_nul(&buf)
    }};
}

/// Decode the prefix of `bytes` up to (not including) the first NUL.
///
/// Supports [`read_str_until_nul!`]; public so the expanded macro can
/// reach it from other crates.
pub fn str_until_nul(bytes: &[u8]) -> String {
    let end = memchr::memchr(0, bytes).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
