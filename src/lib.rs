//! # `keel` - Foundational Container Primitives
//!
//! A small toolkit of well-tested linear and graph data structures, meant as
//! building blocks for algorithms and as readable reference implementations.
//!
//! ## Key Features
//!
//! - **Keyed graph**: directed or undirected, uniquely keyed nodes, ordered
//!   neighbor lists, an append-only edge log, breadth-first and depth-first
//!   traversal
//! - **Linear containers**: singly linked list, bounded stack, FIFO queue and a
//!   two-tier priority queue, all behind the [`FifoQueue`] capability where it fits
//! - **Rooted tree**: ordered children, pre-order traversal with depth, ASCII
//!   rendering
//!
//! ## Architecture
//!
//! Every linked structure is arena-backed: nodes live in a single `Vec` owned by
//! the container and point at each other by index. Cyclic graphs therefore need
//! no reference counting, and handles ([`NodeId`], [`TreeNodeId`]) are plain
//! `Copy` values.
//!
//! Breadth-first traversal depends only on [`FifoQueue`], so any FIFO container
//! (including `std::collections::VecDeque`) can serve as its frontier.
//!
//! ### Error Signalling
//!
//! - Rejected insertions (missing or duplicate graph key, out-of-range list
//!   index) return `None` and leave the container unchanged.
//! - Unresolved references (unknown edge endpoint or traversal start), stack
//!   overflow and a missing list anchor return typed errors from [`error`].
//!
//! ### Logging
//!
//! With the `tracing` feature enabled, rejected operations are reported at
//! `debug` level and traversal/edge activity at `trace` level.
//!
//! ## Example
//!
//! ```rust
//! use keel::{Graph, GraphError};
//!
//! let mut graph: Graph<&str> = Graph::directed();
//! graph.add_node("parse");
//! graph.add_node("check");
//! graph.add_node("emit");
//! graph.add_edge(&"parse", &"check")?;
//! graph.add_edge(&"check", &"emit")?;
//!
//! let mut order = Vec::new();
//! graph.traverse_depth(&"parse", |node| order.push(*node.key()))?;
//! assert_eq!(order, ["parse", "check", "emit"]);
//!
//! assert!(matches!(
//!     graph.add_edge(&"emit", &"link"),
//!     Err(GraphError::NodeNotFound { .. })
//! ));
//! # Ok::<(), GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod collections;
pub mod error;
pub mod graph;
pub mod tree;

pub use collections::{FifoQueue, LinkedList, Priority, PriorityQueue, Queue, Stack};
pub use error::{Error, GraphError, ListError, Result, StackError};
pub use graph::{Graph, Node, NodeId};
pub use tree::{Tree, TreeNode, TreeNodeId};

// Compile-time assertions for handle layout
const _: () = {
    use core::mem;

    // Handles are bare indices.
    assert!(mem::size_of::<NodeId>() == mem::size_of::<usize>());
    assert!(mem::size_of::<TreeNodeId>() == mem::size_of::<usize>());
    assert!(mem::size_of::<Option<NodeId>>() <= 2 * mem::size_of::<usize>());
};
