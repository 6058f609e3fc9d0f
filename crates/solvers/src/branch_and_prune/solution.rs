use crate::Root;

use super::{Node, SearchTree};

/// Indicates whether the search ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No pending nodes remain.
    Completed,

    /// Reached the configured step limit with nodes still pending.
    MaxSteps,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a branch-and-prune search.
#[derive(Debug, Clone)]
pub struct Solution<const N: usize> {
    /// Final search status.
    pub status: Status,

    /// Stored roots, plus an unknown root for each pending tile.
    pub roots: Vec<Root<N>>,

    /// The final search tree.
    pub tree: SearchTree<N>,

    /// Number of nodes processed.
    pub steps: usize,
}

impl<const N: usize> Solution<N> {
    pub(super) fn new(status: Status, tree: SearchTree<N>) -> Self {
        let roots = tree.collect(|node: &Node<N>| node.is_stored() || node.is_pending());
        let steps = tree.nodes().filter(|(_, node)| node.index().is_some()).count();
        Self {
            status,
            roots,
            tree,
            steps,
        }
    }
}
