//! A fixed-capacity least-recently-used cache.

use alloc::boxed::Box;
use alloc::collections::VecDeque;

/// Fixed-capacity cache holding values in most-recently-used-first order.
///
/// Values that leave the cache, whether pushed out by an insert or still
/// present at drop, are handed to the eviction callback exactly once. The
/// default callback simply drops them; a block cache passes one that
/// writes dirty blocks back to the device.
///
/// # Invariant
///
/// `len() <= capacity()` at all times. Capacity 0 is allowed: every
/// insert immediately evicts the inserted value.
pub struct LruCache<V> {
    capacity: usize,
    entries: VecDeque<V>,
    on_evict: Option<Box<dyn Fn(V)>>,
}

impl<V> LruCache<V> {
    /// Create a cache that drops evicted values.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
            on_evict: None,
        }
    }

    /// Create a cache that passes evicted values to `on_evict`.
    pub fn with_evict(capacity: usize, on_evict: impl Fn(V) + 'static) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
            on_evict: Some(Box::new(on_evict)),
        }
    }

    /// Find the first value matching `predicate` and promote it to
    /// most-recently-used.
    ///
    /// The scan runs in recency order, so hot values are found early.
    pub fn find<P>(&mut self, predicate: P) -> Option<&V>
    where
        P: FnMut(&V) -> bool,
    {
        let position = self.entries.iter().position(predicate)?;
        let found = self.entries.remove(position)?;
        self.entries.push_front(found);
        self.entries.front()
    }

    /// Insert a value as most-recently-used, evicting the least recently
    /// used value first if the cache is full.
    ///
    /// Duplicate values are independent entries.
    pub fn insert(&mut self, value: V) {
        if self.capacity == 0 {
            self.evict(value);
            return;
        }
        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.entries.pop_back() {
                self.evict(oldest);
            }
        }
        self.entries.push_front(value);
    }

    /// The number of cached values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The maximum number of cached values.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    fn evict(&self, value: V) {
        if let Some(on_evict) = &self.on_evict {
            on_evict(value);
        }
    }
}

impl<V> Drop for LruCache<V> {
    /// Evicts every remaining value, least recently used first.
    fn drop(&mut self) {
        while let Some(value) = self.entries.pop_back() {
            self.evict(value);
        }
    }
}

#[cfg(test)]
mod tests;
