//! Generic I/O vocabulary for freestanding kernel code.
//!
//! `std::io` is unavailable in the kernel, so this crate provides the
//! equivalent seams: streaming [`Read`]/[`Write`]/[`Seek`] with an
//! in-memory [`Cursor`], positional [`ReadAt`]/[`WriteAt`], and the
//! [`BlockDevice`] trait with byte-addressed reads layered on top.
//!
//! The element-carrying traits are generic over the element type because
//! devices do not all transfer bytes: ATA PIO, for example, moves 16-bit
//! words, and forcing `u8` here would push conversions into every driver.
//!
//! Decoding helpers for on-disk structures live in [`macros`]; reusable
//! test fixtures in [`testing`].

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod block;
mod cursor;
mod error;
pub mod macros;
mod read;
mod seek;
pub mod testing;
mod write;

pub use block::BlockDevice;
pub use cursor::Cursor;
pub use error::{Error, Result};
pub use read::{Read, ReadAt};
pub use seek::{Seek, SeekFrom};
pub use write::{Write, WriteAt};
