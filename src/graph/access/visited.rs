//! Per-traversal visited sets.
//!
//! Node handles are dense arena indices, so a flag vector sized to the node
//! count is enough. Each traversal builds a fresh set; nothing is stored on the
//! graph between calls.

use crate::graph::NodeId;

/// A dense visited set keyed by [`NodeId`].
pub(crate) struct VisitedSet {
    flags: Vec<bool>,
    count: usize,
}

impl VisitedSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
            count: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, node: NodeId) -> bool {
        self.flags.get(node.index()).copied().unwrap_or(false)
    }

    /// Marks `node` visited. Returns `true` if it was not visited before.
    #[inline(always)]
    pub(crate) fn mark(&mut self, node: NodeId) -> bool {
        match self.flags.get_mut(node.index()) {
            Some(flag) if !*flag => {
                *flag = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    /// Number of distinct nodes marked so far.
    #[inline(always)]
    pub(crate) fn count(&self) -> usize {
        self.count
    }
}
