//! Error types shared across keel's containers.
//!
//! Each container family reports failures through its own enum so callers can
//! match precisely; [`Error`] gathers them for code that handles several
//! families at once.
//!
//! Rejected insertions that carry no diagnostic (a missing or duplicate graph
//! key, an out-of-range list index) are signalled with `None` instead of an
//! error value.

use thiserror::Error;

/// Failures raised by [`Graph`](crate::graph::Graph) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A key passed to `add_edge` or a traversal does not name a node.
    ///
    /// `key` is the `Display` rendering of the first key that failed to resolve.
    #[error("node not found (key: {key})")]
    NodeNotFound {
        /// The unresolved key.
        key: String,
    },
}

/// Failures raised by [`Stack`](crate::collections::Stack).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// `push` was called on a stack already holding `capacity` items.
    #[error("stack overflow (capacity: {capacity})")]
    Overflow {
        /// The stack's fixed capacity.
        capacity: usize,
    },
}

/// Failures raised by [`LinkedList`](crate::collections::LinkedList).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// `insert_after` found no node holding the anchor value.
    #[error("previous node not found")]
    AnchorNotFound,
}

/// Any error produced by this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Graph failure.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Stack failure.
    #[error(transparent)]
    Stack(#[from] StackError),

    /// Linked list failure.
    #[error(transparent)]
    List(#[from] ListError),
}

/// Result alias using the crate-wide [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl GraphError {
    pub(crate) fn not_found<Q: core::fmt::Display + ?Sized>(key: &Q) -> Self {
        Self::NodeNotFound {
            key: key.to_string(),
        }
    }
}
