use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::LruCache;

fn counting_cache(capacity: usize) -> (LruCache<u8>, Rc<Cell<usize>>) {
    let evicted = Rc::new(Cell::new(0));
    let hook = Rc::clone(&evicted);
    let cache = LruCache::with_evict(capacity, move |_| hook.set(hook.get() + 1));
    (cache, evicted)
}

// === Ordering ===

#[test]
fn a_new_cache_is_empty() {
    let cache = LruCache::<u8>::new(10);
    assert!(cache.is_empty());
    assert_eq!(0, cache.len());
    assert_eq!(10, cache.capacity());
}

#[test]
fn insert_keeps_the_most_recent_first() {
    let mut cache = LruCache::new(10);
    for value in [0_u8, 1, 2, 2, 3] {
        cache.insert(value);
    }
    assert_eq!(VecDeque::from([3, 2, 2, 1, 0]), cache.entries);
    assert_eq!(5, cache.len());
}

#[test]
fn find_promotes_the_hit() {
    let mut cache = LruCache::new(10);
    for value in 0_u8..10 {
        cache.insert(value);
    }
    assert_eq!(VecDeque::from([9, 8, 7, 6, 5, 4, 3, 2, 1, 0]), cache.entries);

    assert_eq!(Some(&4), cache.find(|&v| v == 4));
    assert_eq!(VecDeque::from([4, 9, 8, 7, 6, 5, 3, 2, 1, 0]), cache.entries);
}

#[test]
fn find_misses_leave_the_order_alone() {
    let mut cache = LruCache::new(4);
    cache.insert(1_u8);
    cache.insert(2);
    assert_eq!(None, cache.find(|&v| v == 9));
    assert_eq!(VecDeque::from([2, 1]), cache.entries);
}

// === Eviction ===

#[test]
fn a_full_cache_evicts_the_least_recently_used() {
    let (mut cache, evicted) = counting_cache(10);
    for value in 0_u8..100 {
        cache.insert(value);
    }
    assert_eq!(
        VecDeque::from([99, 98, 97, 96, 95, 94, 93, 92, 91, 90]),
        cache.entries
    );
    assert_eq!(90, evicted.get());
}

#[test]
fn dropping_the_cache_evicts_everything() {
    let (mut cache, evicted) = counting_cache(10);
    for value in 0_u8..10 {
        cache.insert(value);
    }
    drop(cache);
    assert_eq!(10, evicted.get());
}

#[test]
fn drop_evicts_the_least_recently_used_first() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let hook = Rc::clone(&order);
    let mut cache = LruCache::with_evict(3, move |v| hook.borrow_mut().push(v));
    cache.insert(1_u8);
    cache.insert(2);
    cache.insert(3);
    drop(cache);
    assert_eq!(vec![1, 2, 3], *order.borrow());
}

#[test]
fn a_zero_capacity_cache_evicts_immediately() {
    let (mut cache, evicted) = counting_cache(0);
    cache.insert(7);
    assert_eq!(1, evicted.get());
    assert!(cache.is_empty());
}

#[test]
fn promoted_values_survive_the_next_eviction() {
    let (mut cache, evicted) = counting_cache(3);
    cache.insert(1);
    cache.insert(2);
    cache.insert(3);

    // promote 1, then overflow: 2 is now the oldest
    assert_eq!(Some(&1), cache.find(|&v| v == 1));
    cache.insert(4);
    assert_eq!(1, evicted.get());
    assert_eq!(VecDeque::from([4, 1, 3]), cache.entries);
}

// === Properties ===

#[cfg(not(miri))]
mod properties {
    use std::cell::Cell;
    use std::rc::Rc;

    use proptest::prelude::*;

    use crate::LruCache;

    proptest! {
        #[test]
        fn occupancy_never_exceeds_capacity(
            capacity in 0_usize..8,
            values in proptest::collection::vec(any::<u16>(), 0..64),
        ) {
            let evicted = Rc::new(Cell::new(0_usize));
            let hook = Rc::clone(&evicted);
            let mut cache = LruCache::with_evict(capacity, move |_| hook.set(hook.get() + 1));

            for &value in &values {
                cache.insert(value);
                prop_assert!(cache.len() <= capacity);
            }

            // every value is either still cached or was evicted exactly once
            prop_assert_eq!(values.len(), cache.len() + evicted.get());
        }

        #[test]
        fn find_only_returns_matching_values(
            values in proptest::collection::vec(0_u8..16, 0..32),
            needle in 0_u8..16,
        ) {
            let mut cache = LruCache::new(4);
            for &value in &values {
                cache.insert(value);
            }

            if let Some(&found) = cache.find(|&v| v == needle) {
                prop_assert_eq!(needle, found);
            }
            prop_assert!(cache.len() <= 4);
        }
    }
}
