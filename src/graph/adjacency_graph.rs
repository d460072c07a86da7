//! A keyed adjacency-list graph, directed or undirected.
//!
//! Nodes live in an arena (`Vec<Node<K>>`) in insertion order and reference each
//! other by [`NodeId`]. A hash index maps keys to handles so lookups do not scan
//! the arena. Edges are recorded twice: as neighbor links on the nodes, and as
//! formatted `"<from>-<to>"` entries in an append-only edge log.
//!
//! The graph only grows. There is no node or edge removal, so every neighbor
//! handle stays valid for the graph's lifetime.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_node` | \(O(1)\) amortized | hash insert + arena push |
//! | `get_node` | \(O(1)\) expected | hash lookup |
//! | `add_edge` | \(O(1)\) amortized | no duplicate check; parallel edges allowed |
//! | `print` | \(O(n + m)\) | |

use super::{Node, NodeId};
use crate::error::GraphError;
use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;
use std::collections::HashMap;

/// A graph of uniquely keyed nodes with ordered neighbor lists.
///
/// The `directed` flag is fixed at construction. In an undirected graph every
/// edge `(a, b)` links `b` into `a`'s neighbors and `a` into `b`'s.
pub struct Graph<K> {
    pub(crate) nodes: Vec<Node<K>>,
    index: HashMap<K, NodeId>,
    edges: Vec<String>,
    directed: bool,
}

impl<K> Graph<K> {
    /// Creates an empty undirected graph.
    pub fn new() -> Self {
        Self::with_direction(false)
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::with_direction(true)
    }

    /// Creates an empty graph, directed if `directed` is `true`.
    pub fn with_direction(directed: bool) -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            directed,
        }
    }

    /// Creates an empty graph with room for `node_capacity` nodes.
    pub fn with_capacity(directed: bool, node_capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_capacity),
            index: HashMap::with_capacity(node_capacity),
            edges: Vec::new(),
            directed,
        }
    }

    /// Returns `true` if edges are one-way.
    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of entries in the edge log.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns all nodes in insertion order.
    #[inline]
    pub fn nodes(&self) -> &[Node<K>] {
        &self.nodes
    }

    /// Returns the edge log: every added edge as `"<from>-<to>"`, in insertion order.
    #[inline]
    pub fn edges(&self) -> &[String] {
        &self.edges
    }

    /// Returns the node behind `id`.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node<K>> {
        self.nodes.get(id.index())
    }

    /// Returns the neighbors of `id` in edge-insertion order.
    ///
    /// Yields nothing for a handle this graph did not issue.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = &Node<K>> + '_ {
        self.node(id)
            .map(move |n| n.neighbors.iter().filter_map(move |&v| self.node(v)))
            .into_iter()
            .flatten()
    }
}

impl<K: Eq + Hash + Clone + fmt::Display> Graph<K> {
    /// Adds a node keyed by `key`.
    ///
    /// Accepts either a key or an `Option` of one. Returns `None`, leaving the
    /// graph unchanged, when the key is missing or already taken.
    pub fn add_node(&mut self, key: impl Into<Option<K>>) -> Option<NodeId> {
        let Some(key) = key.into() else {
            debug_event!("rejected node without a key");
            return None;
        };
        if self.index.contains_key(&key) {
            debug_event!(key = %key, "rejected duplicate node key");
            return None;
        }

        let id = NodeId::new(self.nodes.len());
        self.index.insert(key.clone(), id);
        self.nodes.push(Node::new(id, key));
        Some(id)
    }

    /// Returns the node keyed by `key`.
    pub fn get_node<Q>(&self, key: &Q) -> Option<&Node<K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.id_of(key).and_then(|id| self.node(id))
    }

    /// Returns the handle of the node keyed by `key`.
    pub fn id_of<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).copied()
    }

    /// Returns `true` if a node is keyed by `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Adds an edge from `from` to `to` and returns its log entry `"<from>-<to>"`.
    ///
    /// In an undirected graph the link is recorded on both nodes. Parallel edges
    /// and self-loops are accepted.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] naming the first key that does not
    /// resolve; the graph is left unchanged.
    pub fn add_edge<Q>(&mut self, from: &Q, to: &Q) -> Result<String, GraphError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        let a = self.resolve(from)?;
        let b = self.resolve(to)?;

        self.nodes[a.index()].neighbors.push(b);
        if !self.directed {
            self.nodes[b.index()].neighbors.push(a);
        }

        let edge = format!("{}-{}", self.nodes[a.index()].key(), self.nodes[b.index()].key());
        trace_event!(edge = %edge, directed = self.directed, "edge added");
        self.edges.push(edge.clone());
        Ok(edge)
    }

    /// Renders one line per node: the key, then `" => "` and the space-joined
    /// neighbor keys when the node has any. Lines are joined with `'\n'` and
    /// there is no trailing newline; an empty graph renders as `""`.
    pub fn print(&self) -> String {
        self.to_string()
    }

    /// Renders a single node the way [`print`](Self::print) does.
    pub fn print_node(&self, id: NodeId) -> Option<String> {
        let node = self.node(id)?;
        let mut line = String::new();
        self.write_node(&mut line, node).ok()?;
        Some(line)
    }

    pub(crate) fn resolve<Q>(&self, key: &Q) -> Result<NodeId, GraphError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        self.id_of(key).ok_or_else(|| {
            debug_event!(key = %key, "node not found");
            GraphError::not_found(key)
        })
    }

    fn write_node(&self, out: &mut impl fmt::Write, node: &Node<K>) -> fmt::Result {
        write!(out, "{}", node.key())?;
        for (i, neighbor) in node.neighbors.iter().filter_map(|&v| self.node(v)).enumerate() {
            out.write_str(if i == 0 { " => " } else { " " })?;
            write!(out, "{}", neighbor.key())?;
        }
        Ok(())
    }
}

impl<K> Default for Graph<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone + fmt::Display> fmt::Display for Graph<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            self.write_node(f, node)?;
        }
        Ok(())
    }
}

impl<K: fmt::Debug> fmt::Debug for Graph<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("directed", &self.directed)
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .finish()
    }
}
