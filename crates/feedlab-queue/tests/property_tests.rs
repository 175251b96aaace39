//! Property tests for feedlab-queue
//!
//! FIFO ordering and the empty-queue sentinel.

use feedlab_queue::LinkedQueue;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Enqueue(i32),
    Dequeue,
}

fn strategy_op() -> impl Strategy<Value = Op> {
    prop_oneof![any::<i32>().prop_map(Op::Enqueue), Just(Op::Dequeue)]
}

proptest! {
    // Successive dequeues return enqueued values in order, then None.
    #[test]
    fn prop_fifo_order(values in proptest::collection::vec(any::<i32>(), 0..200)) {
        let mut queue = LinkedQueue::new();
        for v in &values {
            queue.enqueue(*v);
        }
        for v in &values {
            prop_assert_eq!(queue.dequeue(), Some(*v));
        }
        prop_assert_eq!(queue.dequeue(), None);
        prop_assert!(queue.is_empty());
    }

    // Arbitrary interleavings agree with VecDeque.
    #[test]
    fn prop_matches_vecdeque(ops in proptest::collection::vec(strategy_op(), 0..300)) {
        let mut queue = LinkedQueue::new();
        let mut model = std::collections::VecDeque::new();

        for op in ops {
            match op {
                Op::Enqueue(v) => {
                    queue.enqueue(v);
                    model.push_back(v);
                }
                Op::Dequeue => {
                    prop_assert_eq!(queue.dequeue(), model.pop_front());
                }
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.to_vec(), model.iter().copied().collect::<Vec<_>>());
        }
    }
}
