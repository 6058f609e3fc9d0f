use prune_core::IntervalBox;

use super::{Contraction, Decision, NodeId};

/// A node processed by the search.
///
/// Emitted after the decision has been applied, so `pending` already counts
/// the children of a bisected node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<const N: usize> {
    /// The node's ordering index, starting from zero.
    pub index: usize,

    /// The processed node.
    pub node: NodeId,

    /// The node's depth below its seed.
    pub depth: usize,

    /// The contractor's outcome for the node's tile.
    pub contraction: Contraction<N>,

    /// What the search did with the node.
    pub decision: Decision,

    /// The number of nodes still pending.
    pub pending: usize,
}

impl<const N: usize> Event<N> {
    /// Returns the processed tile.
    #[must_use]
    pub fn tile(&self) -> &IntervalBox<N> {
        self.contraction.tile()
    }
}
