//! Internal traversal helpers shared by the graph walks.

pub(crate) mod visited;

pub(crate) use visited::VisitedSet;
