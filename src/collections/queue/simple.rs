//! `Queue`: a plain FIFO queue over a ring buffer.
//!
//! # Performance
//! - `enqueue`: O(1) amortized
//! - `dequeue`: O(1)
//! - `peek`: O(1)

use super::FifoQueue;
use core::fmt;
use std::collections::VecDeque;

/// A first-in, first-out queue.
#[derive(Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Adds an item at the back of the queue.
    #[inline]
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes the item at the front of the queue.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns the item at the front of the queue.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns the number of items in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }
}

impl<T> FifoQueue<T> for Queue<T> {
    #[inline]
    fn enqueue(&mut self, item: T) {
        Queue::enqueue(self, item);
    }

    #[inline]
    fn dequeue(&mut self) -> Option<T> {
        Queue::dequeue(self)
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        Queue::peek(self)
    }

    #[inline]
    fn len(&self) -> usize {
        Queue::len(self)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
