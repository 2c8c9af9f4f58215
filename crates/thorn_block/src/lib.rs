//! Block-device layers for the Thorn kernel.
//!
//! [`MemDevice`] is the ramdisk; [`BlockCache`] puts a write-back LRU
//! cache in front of any device; [`CowDevice`] shadows writes over a
//! read-only base. All of them implement [`thorn_io::BlockDevice`] and
//! therefore get byte-addressed reads through its blanket
//! [`ReadAt`](thorn_io::ReadAt) impl, so the layers stack freely.
//!
//! Single-core kernel model throughout: shared state uses `Rc` and spin
//! locks, not `Send` types.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod cache;
mod cow;
mod mem;
pub mod testing;

pub use cache::BlockCache;
pub use cow::CowDevice;
pub use mem::MemDevice;
