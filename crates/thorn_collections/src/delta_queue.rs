//! A delta queue for kernel timers.
//!
//! Nodes are kept in expiry order, but each node stores only the delta to
//! its predecessor. The timer tick then touches a single counter: it
//! decrements the front node's delta and pops expired nodes once it
//! reaches zero.
//!
//! ```text
//! insert(3), insert(5), insert(9)   =>   [3] -> [2] -> [4]
//! absolute expiries (prefix sums)         3      5      9
//! ```

use alloc::collections::VecDeque;
use core::ops::{Index, IndexMut};

/// An entry in a [`DeltaQueue`].
#[derive(Debug, Eq, PartialEq)]
pub struct Node<T> {
    /// Remaining ticks after the predecessor expires. The front node's
    /// delta is the time to the next expiry.
    pub delta: usize,
    /// The queued element.
    pub elem: T,
}

impl<T> Node<T> {
    /// Create a node with the given delta.
    pub const fn new(delta: usize, elem: T) -> Self {
        Self { delta, elem }
    }
}

/// A queue ordered by absolute expiry, stored delta-encoded.
///
/// # Invariant
///
/// The absolute expiry of node `i` is the prefix sum of the deltas
/// `0..=i`; these prefix sums are non-decreasing.
#[derive(Debug, Eq, PartialEq)]
pub struct DeltaQueue<T> {
    nodes: VecDeque<Node<T>>,
}

impl<T> DeltaQueue<T> {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            nodes: VecDeque::new(),
        }
    }

    /// Create an empty queue with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: VecDeque::with_capacity(capacity),
        }
    }

    /// Insert `elem` at the position given by its `absolute` expiry and
    /// re-encode the displaced successor's delta.
    ///
    /// An element tying with existing expiries is placed before the run
    /// of equal nodes; the displaced node's delta becomes 0.
    pub fn insert(&mut self, absolute: usize, elem: T) {
        let mut prefix = 0;
        for i in 0..self.nodes.len() {
            let ahead = self.nodes[i].delta;
            if prefix + ahead >= absolute {
                let delta = absolute - prefix;
                self.nodes.insert(i, Node::new(delta, elem));
                self.nodes[i + 1].delta -= delta;
                return;
            }
            prefix += ahead;
        }
        self.nodes.push_back(Node::new(absolute - prefix, elem));
    }

    /// The node expiring next.
    pub fn front(&self) -> Option<&Node<T>> {
        self.nodes.front()
    }

    /// Mutable access to the node expiring next, for the timer tick.
    pub fn front_mut(&mut self) -> Option<&mut Node<T>> {
        self.nodes.front_mut()
    }

    /// Remove and return the element expiring next.
    pub fn pop_front(&mut self) -> Option<T> {
        self.nodes.pop_front().map(|node| node.elem)
    }

    /// The number of queued nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<T> Default for DeltaQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for DeltaQueue<T> {
    type Output = Node<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.nodes[index]
    }
}

impl<T> IndexMut<usize> for DeltaQueue<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.nodes[index]
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
mod tests;
