//! Graph vertices and their arena handles.

/// A handle to a node in the [`Graph`](super::Graph) that created it.
///
/// Handles are arena indices: two handles compare equal exactly when they name
/// the same node. A handle is only meaningful for the graph that issued it.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline(always)]
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx)
    }

    /// Returns the arena index, which is also the node's insertion position.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A graph vertex: a unique key plus its ordered neighbor links.
///
/// Neighbors are stored as [`NodeId`]s into the owning graph, in the order the
/// edges were added. The node never owns its neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    id: NodeId,
    key: K,
    pub(crate) neighbors: Vec<NodeId>,
}

impl<K> Node<K> {
    pub(crate) fn new(id: NodeId, key: K) -> Self {
        Self {
            id,
            key,
            neighbors: Vec::new(),
        }
    }

    /// Returns the node's handle.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the node's key.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the neighbor handles in edge-insertion order.
    #[inline]
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Returns the number of neighbor links (duplicates included).
    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}
