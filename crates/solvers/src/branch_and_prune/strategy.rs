use std::collections::VecDeque;

use super::{Config, Contraction, Decision, NodeId};

/// Orders pending nodes and decides what happens to processed ones.
///
/// The search pushes every new node and pops the next node to process.
/// Whatever [`decide`](Strategy::decide) returns, the search stores, discards
/// or bisects the node's tile, never the contracted region, so any strategy
/// keeps the leaves covering the seed regions.
pub trait Strategy {
    /// Schedules a pending node.
    fn push(&mut self, node: NodeId);

    /// Returns the next node to process, or `None` when no node is scheduled.
    fn pop(&mut self) -> Option<NodeId>;

    /// Decides what happens to a processed node.
    ///
    /// Defaults to [`Decision::rule`].
    fn decide<const N: usize>(&self, contraction: &Contraction<N>, config: &Config) -> Decision {
        Decision::rule(contraction, config)
    }
}

/// Processes nodes level by level, in the order they were created.
#[derive(Debug, Clone, Default)]
pub struct BreadthFirst {
    queue: VecDeque<NodeId>,
}

impl BreadthFirst {
    /// Creates an empty breadth-first strategy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Strategy for BreadthFirst {
    fn push(&mut self, node: NodeId) {
        self.queue.push_back(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }
}

/// Resolves the most recently created node first.
#[derive(Debug, Clone, Default)]
pub struct DepthFirst {
    stack: Vec<NodeId>,
}

impl DepthFirst {
    /// Creates an empty depth-first strategy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Strategy for DepthFirst {
    fn push(&mut self, node: NodeId) {
        self.stack.push(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }
}
