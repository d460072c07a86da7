//! `Stack`: a bounded last-in, first-out stack.
//!
//! The capacity is fixed at construction; pushing onto a full stack is rejected
//! with [`StackError::Overflow`] and leaves the stack untouched.

use crate::error::StackError;
use core::fmt;

/// A LIFO stack holding at most `capacity` items.
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Stack<T> {
    /// Capacity used by [`Stack::new`].
    pub const DEFAULT_CAPACITY: usize = 5;

    /// Creates an empty stack with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY).
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty stack holding at most `capacity` items.
    ///
    /// `capacity` is a bound, not a reservation: storage grows on demand.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity.min(Self::DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Pushes an item on top of the stack.
    ///
    /// # Errors
    /// Returns [`StackError::Overflow`] if the stack is full.
    pub fn push(&mut self, item: T) -> Result<(), StackError> {
        if self.items.len() >= self.capacity {
            debug_event!(capacity = self.capacity, "stack overflow");
            return Err(StackError::Overflow {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes the top item.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top item.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the number of items on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if another push would overflow.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Returns the maximum number of items.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("items", &self.items)
            .field("capacity", &self.capacity)
            .finish()
    }
}
