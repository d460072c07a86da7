//! Linear containers.
//!
//! - `linked_list`: singly linked list with head/tail bookkeeping
//! - `stack`: bounded LIFO stack
//! - `queue`: the [`FifoQueue`] capability plus simple and two-tier queues

pub mod linked_list;
pub mod queue;
pub mod stack;

// Re-export commonly used types from submodules
pub use linked_list::LinkedList;
pub use queue::{FifoQueue, Priority, PriorityQueue, Queue};
pub use stack::Stack;
