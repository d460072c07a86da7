//! `LinkedList`: a singly linked list with head and tail bookkeeping.
//!
//! Nodes live in a `Vec` arena and link to their successor by slot index, so the
//! list needs no `unsafe` and no reference counting. Removed slots are threaded
//! onto a free list and reused by later insertions.
//!
//! # Performance
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `push_back` / `push_front` | O(1) amortized | |
//! | `pop_front` | O(1) | |
//! | `pop_back` | O(n) | walks to the tail's predecessor |
//! | `get` | O(n) | O(1) for the head and the tail |
//! | `insert_at` / `remove` | O(n) | walks to the predecessor |
//! | `find` / `insert_after` | O(n) | linear scan |

use crate::collections::queue::FifoQueue;
use crate::error::ListError;
use core::fmt;

#[derive(Clone)]
struct ListNode<T> {
    value: T,
    next: Option<usize>,
}

#[derive(Clone)]
enum Slot<T> {
    Occupied(ListNode<T>),
    /// Next free slot index.
    Free(Option<usize>),
}

/// Iterator over a [`LinkedList`], head to tail.
pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        match self.slots.get(idx) {
            Some(Slot::Occupied(node)) => {
                self.current = node.next;
                self.remaining -= 1;
                Some(&node.value)
            }
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> core::iter::FusedIterator for Iter<'_, T> {}

/// A singly linked list.
#[derive(Clone)]
pub struct LinkedList<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first element.
    pub fn head(&self) -> Option<&T> {
        self.value(self.head?)
    }

    /// Returns the last element.
    pub fn tail(&self) -> Option<&T> {
        self.value(self.tail?)
    }

    /// Iterates from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free_head = None;
        self.len = 0;
    }

    /// Appends an element; it becomes the new tail (and head if the list was empty).
    pub fn push_back(&mut self, value: T) {
        let idx = self.alloc(value, None);
        match self.tail {
            Some(tail) => self.set_next(tail, Some(idx)),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Prepends an element; it becomes the new head (and tail if the list was empty).
    pub fn push_front(&mut self, value: T) {
        let idx = self.alloc(value, self.head);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        self.head = Some(idx);
        self.len += 1;
    }

    /// Removes and returns the head.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        self.head = self.next_of(head);
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        self.release(head)
    }

    /// Removes and returns the tail.
    ///
    /// The list is singly linked, so this walks from the head to find the new tail.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        if self.len == 1 {
            self.head = None;
            self.tail = None;
        } else {
            let new_tail = self.slot_at(self.len - 2)?;
            self.set_next(new_tail, None);
            self.tail = Some(new_tail);
        }
        self.len -= 1;
        self.release(tail)
    }

    /// Returns the element at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.value(self.slot_at(index)?)
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let idx = self.slot_at(index)?;
        match self.slots.get_mut(idx) {
            Some(Slot::Occupied(node)) => Some(&mut node.value),
            _ => None,
        }
    }

    /// Removes and returns the element at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        if index == 0 {
            return self.pop_front();
        }

        let previous = self.slot_at(index - 1)?;
        let current = self.next_of(previous)?;
        let following = self.next_of(current);

        self.set_next(previous, following);
        if following.is_none() {
            self.tail = Some(previous);
        }
        self.len -= 1;
        self.release(current)
    }

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// `index == len` appends. Returns the inserted element, or `None` (leaving the
    /// list unchanged) when `index > len`.
    pub fn insert_at(&mut self, index: usize, value: T) -> Option<&T> {
        if index > self.len {
            return None;
        }
        if index == 0 {
            self.push_front(value);
            return self.head();
        }
        if index == self.len {
            self.push_back(value);
            return self.tail();
        }

        let insert_after = self.slot_at(index - 1)?;
        let insert_before = self.next_of(insert_after);
        let idx = self.alloc(value, insert_before);
        self.set_next(insert_after, Some(idx));
        self.len += 1;
        self.value(idx)
    }

    /// Returns the index of the first element equal to `value`.
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// Inserts `value` right after the first element equal to `anchor`.
    ///
    /// # Errors
    /// Returns [`ListError::AnchorNotFound`] if no element equals `anchor`.
    pub fn insert_after(&mut self, anchor: &T, value: T) -> Result<(), ListError>
    where
        T: PartialEq,
    {
        let mut current = self.head;
        while let Some(idx) = current {
            if self.value(idx) == Some(anchor) {
                break;
            }
            current = self.next_of(idx);
        }
        let Some(anchor_idx) = current else {
            return Err(ListError::AnchorNotFound);
        };

        let idx = self.alloc(value, self.next_of(anchor_idx));
        self.set_next(anchor_idx, Some(idx));
        if self.tail == Some(anchor_idx) {
            self.tail = Some(idx);
        }
        self.len += 1;
        Ok(())
    }

    /// Renders the values joined by `" => "`.
    pub fn print(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }

    /// Stores `value` in a free slot (or a new one) and returns its index.
    fn alloc(&mut self, value: T, next: Option<usize>) -> usize {
        let node = Slot::Occupied(ListNode { value, next });
        if let Some(free_idx) = self.free_head {
            if let Some(Slot::Free(next_free)) = self.slots.get(free_idx) {
                self.free_head = *next_free;
                self.slots[free_idx] = node;
                return free_idx;
            }
        }
        self.slots.push(node);
        self.slots.len() - 1
    }

    /// Returns slot `idx` to the free list and hands back its value.
    ///
    /// Callers unlink the slot before releasing it.
    fn release(&mut self, idx: usize) -> Option<T> {
        let slot = self.slots.get_mut(idx)?;
        match core::mem::replace(slot, Slot::Free(self.free_head)) {
            Slot::Occupied(node) => {
                self.free_head = Some(idx);
                Some(node.value)
            }
            free @ Slot::Free(_) => {
                *slot = free;
                None
            }
        }
    }

    /// Maps a list position to its slot index.
    fn slot_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        if index == self.len - 1 {
            return self.tail;
        }
        let mut current = self.head;
        for _ in 0..index {
            current = self.next_of(current?);
        }
        current
    }

    #[inline]
    fn value(&self, idx: usize) -> Option<&T> {
        match self.slots.get(idx) {
            Some(Slot::Occupied(node)) => Some(&node.value),
            _ => None,
        }
    }

    #[inline]
    fn next_of(&self, idx: usize) -> Option<usize> {
        match self.slots.get(idx) {
            Some(Slot::Occupied(node)) => node.next,
            _ => None,
        }
    }

    #[inline]
    fn set_next(&mut self, idx: usize, next: Option<usize>) {
        if let Some(Slot::Occupied(node)) = self.slots.get_mut(idx) {
            node.next = next;
        }
    }
}

impl<T> FifoQueue<T> for LinkedList<T> {
    fn enqueue(&mut self, item: T) {
        self.push_back(item);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn peek(&self) -> Option<&T> {
        self.head()
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" => ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
