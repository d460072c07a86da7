//! Breadth-first and depth-first traversal for [`Graph`].
//!
//! Both walks take a starting key and a visitor closure. They resolve the key
//! before doing anything else, keep a fresh visited set per call, and never
//! touch the graph's structure. Both return the number of nodes visited.

use super::access::VisitedSet;
use super::{Graph, Node, NodeId};
use crate::collections::{FifoQueue, Queue};
use crate::error::GraphError;
use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;

impl<K: Eq + Hash + Clone + fmt::Display> Graph<K> {
    /// Visits every node reachable from `start` in breadth-first order.
    ///
    /// Nodes are visited layer by layer. Within a layer they follow their
    /// parent's neighbor order, and parents are served in the order they were
    /// queued. Each node is visited exactly once.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if `start` names no node; `visit` is
    /// never called in that case.
    pub fn traverse_breadth<Q, F>(&self, start: &Q, visit: F) -> Result<usize, GraphError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
        F: FnMut(&Node<K>),
    {
        let mut queue = Queue::with_capacity(self.node_count());
        self.traverse_breadth_with(start, &mut queue, visit)
    }

    /// Breadth-first traversal over a caller-supplied FIFO frontier.
    ///
    /// Any items already in `queue` are discarded first (at most `queue.len()`
    /// of them). The visit order is the same as
    /// [`traverse_breadth`](Self::traverse_breadth) for every correct
    /// [`FifoQueue`]. Handles this graph did not issue are skipped; the walk
    /// ends once `dequeue` returns `None`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if `start` names no node; `visit` is
    /// never called and `queue` is left untouched in that case.
    pub fn traverse_breadth_with<Q, B, F>(
        &self,
        start: &Q,
        queue: &mut B,
        mut visit: F,
    ) -> Result<usize, GraphError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
        B: FifoQueue<NodeId> + ?Sized,
        F: FnMut(&Node<K>),
    {
        let start = self.resolve(start)?;
        trace_event!(start = start.index(), "breadth-first traversal started");

        for _ in 0..queue.len() {
            if queue.dequeue().is_none() {
                break;
            }
        }
        let mut visited = VisitedSet::new(self.node_count());
        queue.enqueue(start);

        while let Some(current) = queue.dequeue() {
            // The enqueue-time check below cannot see nodes that are queued but
            // not yet visited, so a node may sit in the queue more than once.
            if visited.is_visited(current) {
                continue;
            }
            let Some(node) = self.node(current) else {
                debug_event!(node = current.index(), "skipped foreign handle");
                continue;
            };
            for &neighbor in &node.neighbors {
                if !visited.is_visited(neighbor) {
                    queue.enqueue(neighbor);
                }
            }
            visit(node);
            visited.mark(current);
        }

        trace_event!(visited = visited.count(), "breadth-first traversal finished");
        Ok(visited.count())
    }

    /// Visits every node reachable from `start` in depth-first pre-order.
    ///
    /// A node is visited before any of its unvisited descendants, and neighbors
    /// are explored in neighbor-list order. Cycles terminate through the visited
    /// set. The walk keeps an explicit stack, so long paths cannot exhaust the
    /// call stack.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if `start` names no node; `visit` is
    /// never called in that case.
    pub fn traverse_depth<Q, F>(&self, start: &Q, mut visit: F) -> Result<usize, GraphError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
        F: FnMut(&Node<K>),
    {
        let start = self.resolve(start)?;
        trace_event!(start = start.index(), "depth-first traversal started");

        let mut visited = VisitedSet::new(self.node_count());
        // (node, index of the next neighbor to consider)
        let mut stack: Vec<(NodeId, usize)> = Vec::new();

        visit(&self.nodes[start.index()]);
        visited.mark(start);
        stack.push((start, 0));

        while let Some(frame) = stack.last_mut() {
            let (current, cursor) = *frame;
            match self.nodes[current.index()].neighbors.get(cursor) {
                Some(&next) => {
                    frame.1 += 1;
                    if !visited.is_visited(next) {
                        visit(&self.nodes[next.index()]);
                        visited.mark(next);
                        stack.push((next, 0));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        trace_event!(visited = visited.count(), "depth-first traversal finished");
        Ok(visited.count())
    }

    /// Returns the keys reachable from `start` in breadth-first order.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if `start` names no node.
    pub fn breadth_first_keys<Q>(&self, start: &Q) -> Result<Vec<K>, GraphError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        let mut keys = Vec::new();
        self.traverse_breadth(start, |node| keys.push(node.key().clone()))?;
        Ok(keys)
    }

    /// Returns the keys reachable from `start` in depth-first pre-order.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if `start` names no node.
    pub fn depth_first_keys<Q>(&self, start: &Q) -> Result<Vec<K>, GraphError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        let mut keys = Vec::new();
        self.traverse_depth(start, |node| keys.push(node.key().clone()))?;
        Ok(keys)
    }
}
