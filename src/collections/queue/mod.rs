//! First-in, first-out queues.
//!
//! [`FifoQueue`] is the capability breadth-first graph traversal consumes. Any
//! container that hands items back in arrival order can implement it:
//! - [`Queue`]: the plain FIFO queue
//! - [`PriorityQueue`]: two FIFO tiers, high priority drained first
//! - [`LinkedList`](crate::collections::LinkedList) and `std::collections::VecDeque`

pub mod priority;
pub mod simple;

pub use priority::{Priority, PriorityQueue};
pub use simple::Queue;

use std::collections::VecDeque;

/// A first-in, first-out container.
///
/// Implementations must return items from [`dequeue`](FifoQueue::dequeue) in the
/// order they were passed to [`enqueue`](FifoQueue::enqueue) (per tier, for tiered
/// queues).
pub trait FifoQueue<T> {
    /// Adds an item at the back.
    fn enqueue(&mut self, item: T);

    /// Removes and returns the front item, or `None` when empty.
    fn dequeue(&mut self) -> Option<T>;

    /// Returns the front item without removing it.
    fn peek(&self) -> Option<&T>;

    /// Returns the number of queued items.
    fn len(&self) -> usize;

    /// Returns `true` if no item is queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> FifoQueue<T> for VecDeque<T> {
    #[inline]
    fn enqueue(&mut self, item: T) {
        self.push_back(item);
    }

    #[inline]
    fn dequeue(&mut self) -> Option<T> {
        self.pop_front()
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        self.front()
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}
