//! Collections for kernel subsystems, on `alloc` only.
//!
//! [`LruCache`] backs the block cache; [`DeltaQueue`] is the classic
//! timer queue.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod delta_queue;
mod lru;

pub use delta_queue::{DeltaQueue, Node};
pub use lru::LruCache;
