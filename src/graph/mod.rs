//! Keyed graphs and their traversals.
//!
//! - `adjacency_graph`: the [`Graph`] itself (nodes, edges, rendering)
//! - `node`: [`Node`] and its arena handle [`NodeId`]
//! - `traversal`: breadth-first and depth-first walks
//!
//! ```rust
//! use keel::graph::Graph;
//!
//! let mut graph: Graph<i32> = Graph::new();
//! for key in 1..=4 {
//!     graph.add_node(key);
//! }
//! graph.add_edge(&1, &2).unwrap();
//! graph.add_edge(&1, &3).unwrap();
//! graph.add_edge(&2, &4).unwrap();
//!
//! assert_eq!(graph.breadth_first_keys(&1).unwrap(), vec![1, 2, 3, 4]);
//! assert_eq!(graph.depth_first_keys(&1).unwrap(), vec![1, 2, 4, 3]);
//! assert_eq!(graph.print(), "1 => 2 3\n2 => 1 4\n3 => 1\n4 => 2");
//! ```

pub mod adjacency_graph;
pub mod node;
mod traversal;
pub(crate) mod access;

pub use adjacency_graph::Graph;
pub use node::{Node, NodeId};
