//! The shared I/O error vocabulary.

use thiserror::Error;

/// Errors reported by the I/O traits and their implementations.
///
/// The type is `Copy` and carries no payloads. It crosses every layer of
/// the I/O stack (drivers, caches, file systems), so higher layers share
/// this vocabulary and some variants have no producer in this crate.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum Error {
    /// The offset is out of bounds or violates an alignment restriction.
    #[error("offset out of bounds")]
    InvalidOffset,
    /// The provided buffer is too small for the requested transfer.
    #[error("buffer too small for the requested transfer")]
    BufferTooSmall,
    /// The input ended although more data was expected.
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// The sink stopped accepting data before the whole buffer was written.
    #[error("sink no longer accepts data")]
    WriteZero,
    /// The requested block is not present on the device.
    #[error("no such block on this device")]
    NoSuchBlock,
    /// The operation is not supported by this component.
    #[error("operation not supported")]
    Unsupported,
    /// The requested entity does not exist.
    #[error("entity not found")]
    NotFound,
    /// An entity was found where none must exist for the operation to
    /// proceed.
    #[error("entity already exists")]
    AlreadyExists,
    /// The provided address is invalid.
    #[error("bad address")]
    BadAddress,
    /// An invalid value was encountered while decoding.
    #[error("invalid data while decoding")]
    InvalidData,
    /// A magic value did not match the expected one.
    #[error("magic value mismatch")]
    BadMagic,
    /// The data is incoherent or a checksum did not match.
    #[error("corrupt data")]
    CorruptData,
    /// A provided argument was invalid.
    #[error("invalid input")]
    InvalidInput,
    /// The entry is a file where a directory was required.
    #[error("entry is a file")]
    IsFile,
    /// The entry is a directory where a file was required.
    #[error("entry is a directory")]
    IsDirectory,
}

/// Result alias with [`Error`] as the default error type.
pub type Result<T, E = Error> = core::result::Result<T, E>;
