use pretty_assertions::assert_eq;

use super::{DeltaQueue, Node};

// === Insertion ===

#[test]
fn ascending_inserts_encode_the_gaps() {
    let mut queue = DeltaQueue::new();
    queue.insert(3, "three");
    queue.insert(5, "five");
    queue.insert(9, "nine");
    assert_eq!(
        vec![Node::new(3, "three"), Node::new(2, "five"), Node::new(4, "nine")],
        Vec::from(queue.nodes)
    );
}

#[test]
fn descending_inserts_splice_at_the_front() {
    let mut queue = DeltaQueue::new();
    queue.insert(9, "nine");
    queue.insert(5, "five");
    queue.insert(3, "three");
    assert_eq!(
        vec![Node::new(3, "three"), Node::new(2, "five"), Node::new(4, "nine")],
        Vec::from(queue.nodes)
    );
}

#[test]
fn interleaved_inserts_re_encode_the_successor() {
    let mut queue = DeltaQueue::with_capacity(4);
    queue.insert(10, "ten");
    queue.insert(2, "two");
    queue.insert(6, "six");
    queue.insert(7, "seven");
    assert_eq!(
        vec![
            Node::new(2, "two"),
            Node::new(4, "six"),
            Node::new(1, "seven"),
            Node::new(3, "ten"),
        ],
        Vec::from(queue.nodes)
    );
}

#[test]
fn ties_are_placed_before_the_equal_run() {
    let mut queue = DeltaQueue::new();
    queue.insert(5, "a");
    queue.insert(5, "b");
    queue.insert(5, "c");
    assert_eq!(
        vec![Node::new(5, "c"), Node::new(0, "b"), Node::new(0, "a")],
        Vec::from(queue.nodes)
    );
}

#[test]
fn a_zero_expiry_lands_at_the_front() {
    let mut queue = DeltaQueue::new();
    queue.insert(4, "later");
    queue.insert(0, "now");
    assert_eq!(
        vec![Node::new(0, "now"), Node::new(4, "later")],
        Vec::from(queue.nodes)
    );
}

// === Queue access ===

#[test]
fn pop_front_drains_in_expiry_order() {
    let mut queue = DeltaQueue::new();
    queue.insert(8, 'c');
    queue.insert(1, 'a');
    queue.insert(4, 'b');

    assert_eq!(3, queue.len());
    assert_eq!(Some('a'), queue.pop_front());
    assert_eq!(Some('b'), queue.pop_front());
    assert_eq!(Some('c'), queue.pop_front());
    assert_eq!(None, queue.pop_front());
    assert!(queue.is_empty());
}

#[test]
fn a_timer_tick_decrements_only_the_front() {
    let mut queue = DeltaQueue::new();
    queue.insert(2, "soon");
    queue.insert(4, "later");

    // tick 1
    queue.front_mut().unwrap().delta -= 1;
    assert_eq!(1, queue.front().unwrap().delta);

    // tick 2: "soon" expires
    queue.front_mut().unwrap().delta -= 1;
    assert_eq!(0, queue.front().unwrap().delta);
    assert_eq!(Some("soon"), queue.pop_front());

    // the successor still counts from the previous expiry
    assert_eq!(2, queue.front().unwrap().delta);
}

#[test]
fn indexing_reaches_every_node() {
    let mut queue = DeltaQueue::new();
    queue.insert(1, "a");
    queue.insert(3, "b");
    assert_eq!(Node::new(1, "a"), queue[0]);
    assert_eq!(Node::new(2, "b"), queue[1]);

    queue[1].elem = "c";
    assert_eq!("c", queue[1].elem);
}

#[test]
fn the_default_queue_is_empty() {
    let queue = DeltaQueue::<u8>::default();
    assert!(queue.is_empty());
    assert_eq!(0, queue.len());
    assert_eq!(None, queue.front());
}

// === Properties ===

#[cfg(not(miri))]
mod properties {
    use proptest::prelude::*;

    use crate::DeltaQueue;

    fn prefix_sums<T>(queue: &DeltaQueue<T>) -> Vec<usize> {
        let mut sums = Vec::with_capacity(queue.len());
        let mut total = 0;
        for i in 0..queue.len() {
            total += queue[i].delta;
            sums.push(total);
        }
        sums
    }

    proptest! {
        #[test]
        fn prefix_sums_match_the_sorted_inputs(
            absolutes in proptest::collection::vec(0_usize..1000, 0..64),
        ) {
            let mut queue = DeltaQueue::new();
            for (tag, &absolute) in absolutes.iter().enumerate() {
                queue.insert(absolute, tag);
            }

            let mut expected = absolutes.clone();
            expected.sort_unstable();
            prop_assert_eq!(expected, prefix_sums(&queue));
        }

        #[test]
        fn pop_front_always_drains_in_expiry_order(
            absolutes in proptest::collection::vec(0_usize..100, 1..32),
        ) {
            let mut queue = DeltaQueue::new();
            for &absolute in &absolutes {
                queue.insert(absolute, absolute);
            }

            let mut drained = Vec::new();
            while let Some(elem) = queue.pop_front() {
                drained.push(elem);
            }

            let mut expected = absolutes.clone();
            expected.sort_unstable();
            prop_assert_eq!(expected, drained);
        }
    }
}
