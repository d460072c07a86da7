//! `Tree`: a rooted tree with ordered children.
//!
//! Nodes are kept in an arena and refer to their children by [`TreeNodeId`].
//! A tree always has a root; children are only ever appended.
//!
//! ```rust
//! use keel::tree::Tree;
//!
//! let mut tree = Tree::new(1);
//! let two = tree.add_child(tree.root(), 2).unwrap();
//! tree.add_child(two, 3).unwrap();
//!
//! assert_eq!(tree.print(), "|--1\n|  |--2\n|  |  |--3\n");
//! ```

use core::fmt;

/// A handle to a node in the [`Tree`] that created it.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreeNodeId(usize);

impl TreeNodeId {
    /// Returns the arena index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A tree node: a key plus its children in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<K> {
    key: K,
    children: Vec<TreeNodeId>,
}

impl<K> TreeNode<K> {
    /// Returns the node's key.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the child handles in insertion order.
    #[inline]
    pub fn children(&self) -> &[TreeNodeId] {
        &self.children
    }

    /// Returns `true` if the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A rooted tree.
#[derive(Clone, PartialEq, Eq)]
pub struct Tree<K> {
    nodes: Vec<TreeNode<K>>,
}

impl<K> Tree<K> {
    /// Creates a tree holding only a root keyed by `root_key`.
    pub fn new(root_key: K) -> Self {
        Self {
            nodes: vec![TreeNode {
                key: root_key,
                children: Vec::new(),
            }],
        }
    }

    /// Returns the root's handle.
    #[inline]
    pub const fn root(&self) -> TreeNodeId {
        TreeNodeId(0)
    }

    /// Returns the number of nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the node behind `id`.
    #[inline]
    pub fn node(&self, id: TreeNodeId) -> Option<&TreeNode<K>> {
        self.nodes.get(id.index())
    }

    /// Returns the children of `id` in insertion order.
    pub fn children(&self, id: TreeNodeId) -> impl Iterator<Item = &TreeNode<K>> + '_ {
        self.node(id)
            .map(move |n| n.children.iter().filter_map(move |&c| self.node(c)))
            .into_iter()
            .flatten()
    }

    /// Appends a child keyed by `key` under `parent` and returns its handle.
    ///
    /// Returns `None` if `parent` does not belong to this tree.
    pub fn add_child(&mut self, parent: TreeNodeId, key: K) -> Option<TreeNodeId> {
        if parent.index() >= self.nodes.len() {
            debug_event!(parent = parent.index(), "rejected child of unknown parent");
            return None;
        }
        let id = TreeNodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            key,
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(id);
        Some(id)
    }

    /// Walks the subtree under `start` in pre-order, calling `visit` with each
    /// node and its depth. `start` is reported at `depth`, its children at
    /// `depth + 1`, and so on; depths saturate at `usize::MAX`. An unknown
    /// `start` visits nothing.
    pub fn traverse<F>(&self, start: TreeNodeId, depth: usize, mut visit: F)
    where
        F: FnMut(&TreeNode<K>, usize),
    {
        if self.node(start).is_none() {
            return;
        }
        let mut stack = vec![(start, depth)];
        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id.index()];
            visit(node, depth);
            // Reverse so the first child is popped first.
            let child_depth = depth.saturating_add(1);
            stack.extend(node.children.iter().rev().map(|&c| (c, child_depth)));
        }
    }

    /// Renders the tree one node per line, in pre-order.
    ///
    /// The root renders as `|--key`; a node at depth `d` is prefixed with `d`
    /// copies of `"|  "`. Every line ends with `'\n'`.
    pub fn print(&self) -> String
    where
        K: fmt::Display,
    {
        self.to_string()
    }
}

impl<K: fmt::Display> fmt::Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        self.traverse(self.root(), 0, |node, depth| {
            if result.is_ok() {
                result = writeln!(f, "{}|--{}", "|  ".repeat(depth), node.key());
            }
        });
        result
    }
}

impl<K: fmt::Debug> fmt::Debug for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.nodes.len())
            .field("root", &self.nodes[0].key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree_has_root_only() {
        let t = Tree::new(1);
        let root = t.node(t.root()).unwrap();
        assert_eq!(*root.key(), 1);
        assert!(root.is_leaf());
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_add_child() {
        let mut t = Tree::new(1);
        let two = t.add_child(t.root(), 2).unwrap();

        assert_eq!(t.node(t.root()).unwrap().children(), &[two]);
        assert_eq!(*t.node(two).unwrap().key(), 2);
        assert!(t.node(two).unwrap().is_leaf());
    }

    #[test]
    fn test_add_child_to_unknown_parent() {
        let mut t = Tree::new('r');
        assert_eq!(t.add_child(TreeNodeId(4), 'x'), None);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_traverse_is_preorder_with_depth() {
        let mut t = Tree::new(1);
        let two = t.add_child(t.root(), 2).unwrap();
        let three = t.add_child(two, 3).unwrap();
        t.add_child(two, 4).unwrap();
        t.add_child(three, 5).unwrap();
        t.add_child(t.root(), 6).unwrap();

        let mut seen = Vec::new();
        t.traverse(t.root(), 0, |node, depth| seen.push((*node.key(), depth)));
        assert_eq!(seen, vec![(1, 0), (2, 1), (3, 2), (5, 3), (4, 2), (6, 1)]);

        seen.clear();
        t.traverse(two, 10, |node, depth| seen.push((*node.key(), depth)));
        assert_eq!(seen, vec![(2, 10), (3, 11), (5, 12), (4, 11)]);
    }

    #[test]
    fn test_traverse_depth_saturates() {
        let mut t = Tree::new(1);
        let two = t.add_child(t.root(), 2).unwrap();
        t.add_child(two, 3).unwrap();

        let mut seen = Vec::new();
        t.traverse(t.root(), usize::MAX - 1, |node, depth| seen.push((*node.key(), depth)));
        assert_eq!(
            seen,
            vec![(1, usize::MAX - 1), (2, usize::MAX), (3, usize::MAX)]
        );
    }

    #[test]
    fn test_print() {
        let mut t = Tree::new(1);
        assert_eq!(t.print(), "|--1\n");

        let two = t.add_child(t.root(), 2).unwrap();
        let three = t.add_child(two, 3).unwrap();
        t.add_child(two, 4).unwrap();
        t.add_child(three, 5).unwrap();

        assert_eq!(
            t.print(),
            "|--1\n|  |--2\n|  |  |--3\n|  |  |  |--5\n|  |  |--4\n"
        );
    }

    #[test]
    fn test_children_iterator() {
        let mut t = Tree::new("root");
        t.add_child(t.root(), "a").unwrap();
        t.add_child(t.root(), "b").unwrap();
        let keys: Vec<&str> = t.children(t.root()).map(|n| *n.key()).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
