//! `PriorityQueue`: two FIFO tiers where the high tier always drains first.
//!
//! Within a tier items keep arrival order. This is not a heap: there are only
//! two priorities, so each operation stays O(1).

use super::{FifoQueue, Queue};
use core::fmt;

/// The tier an item is queued in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    /// Served only when no high-priority item is waiting.
    #[default]
    Low,
    /// Served before every low-priority item.
    High,
}

/// A queue with a high and a low priority tier.
#[derive(Clone, PartialEq, Eq)]
pub struct PriorityQueue<T> {
    high: Queue<T>,
    low: Queue<T>,
}

impl<T> PriorityQueue<T> {
    /// Creates an empty priority queue.
    pub fn new() -> Self {
        Self {
            high: Queue::new(),
            low: Queue::new(),
        }
    }

    /// Queues `item` in the tier selected by `priority`.
    pub fn enqueue(&mut self, item: T, priority: Priority) {
        match priority {
            Priority::High => self.high.enqueue(item),
            Priority::Low => self.low.enqueue(item),
        }
    }

    /// Removes the oldest high-priority item, or the oldest low-priority one
    /// when the high tier is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.high.is_empty() {
            self.low.dequeue()
        } else {
            self.high.dequeue()
        }
    }

    /// Returns the item `dequeue` would remove next.
    pub fn peek(&self) -> Option<&T> {
        if self.high.is_empty() {
            self.low.peek()
        } else {
            self.high.peek()
        }
    }

    /// Returns the number of items across both tiers.
    pub fn len(&self) -> usize {
        self.high.len() + self.low.len()
    }

    /// Returns `true` if both tiers are empty.
    pub fn is_empty(&self) -> bool {
        self.high.is_empty() && self.low.is_empty()
    }
}

/// Items enqueued through the trait land in the low tier.
impl<T> FifoQueue<T> for PriorityQueue<T> {
    fn enqueue(&mut self, item: T) {
        PriorityQueue::enqueue(self, item, Priority::Low);
    }

    fn dequeue(&mut self) -> Option<T> {
        PriorityQueue::dequeue(self)
    }

    fn peek(&self) -> Option<&T> {
        PriorityQueue::peek(self)
    }

    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("high", &self.high)
            .field("low", &self.low)
            .finish()
    }
}
