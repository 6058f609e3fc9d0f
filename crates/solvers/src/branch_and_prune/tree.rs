use std::fmt;

use prune_core::IntervalBox;

use crate::Root;

/// Identifies a node within a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(super) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the position of the node in creation order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Where a node stands in the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Waiting to be processed.
    Pending,

    /// Kept as a result leaf.
    Stored,

    /// Dropped from the results.
    Discarded,

    /// Split into two children.
    Bisected([NodeId; 2]),
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pending => "pending",
            Self::Stored => "stored",
            Self::Discarded => "discarded",
            Self::Bisected(_) => "bisected",
        };
        f.write_str(name)
    }
}

/// A region visited by the search.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<const N: usize> {
    tile: IntervalBox<N>,
    root: Root<N>,
    parent: Option<NodeId>,
    depth: usize,
    index: Option<usize>,
    state: NodeState,
}

impl<const N: usize> Node<N> {
    /// Returns the region the node was created with.
    #[must_use]
    pub fn tile(&self) -> &IntervalBox<N> {
        &self.tile
    }

    /// Returns the node's root.
    ///
    /// Pending nodes hold an unknown root over their tile.
    #[must_use]
    pub fn root(&self) -> &Root<N> {
        &self.root
    }

    /// Returns the node this one was bisected from.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the number of bisections between the node and its seed.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the ordering index assigned when the node was processed.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Returns the node's state.
    #[must_use]
    pub fn state(&self) -> NodeState {
        self.state
    }

    /// Returns true if the node has not been bisected.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        !matches!(self.state, NodeState::Bisected(_))
    }

    /// Returns true if the node is a stored result.
    #[must_use]
    pub fn is_stored(&self) -> bool {
        self.state == NodeState::Stored
    }

    /// Returns true if the node is waiting to be processed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state == NodeState::Pending
    }
}

/// Every node a search has created, one tree per seed region.
///
/// Nodes are never removed, so the tiles of the leaves always cover the seeds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchTree<const N: usize> {
    nodes: Vec<Node<N>>,
    seeds: Vec<NodeId>,
    pending: usize,
}

impl<const N: usize> SearchTree<N> {
    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of pending nodes.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Returns a node by id.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node<N>> {
        self.nodes.get(id.0)
    }

    /// Returns the top-level node of each seed region.
    #[must_use]
    pub fn seeds(&self) -> &[NodeId] {
        &self.seeds
    }

    /// Iterates over all nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<N>)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    /// Iterates over the nodes that have not been bisected.
    pub fn leaves(&self) -> impl Iterator<Item = &Node<N>> {
        self.nodes.iter().filter(|node| node.is_leaf())
    }

    /// Returns the tiles of all leaves.
    ///
    /// Together they cover the seed regions, overlapping only on boundaries.
    #[must_use]
    pub fn tiles(&self) -> Vec<IntervalBox<N>> {
        self.leaves().map(|node| node.tile).collect()
    }

    /// Returns the roots of the leaves accepted by `predicate`.
    pub fn collect(&self, mut predicate: impl FnMut(&Node<N>) -> bool) -> Vec<Root<N>> {
        self.leaves()
            .filter(|&node| predicate(node))
            .map(|node| node.root)
            .collect()
    }

    /// Returns the roots of all stored leaves.
    #[must_use]
    pub fn roots(&self) -> Vec<Root<N>> {
        self.collect(Node::is_stored)
    }

    pub(super) fn seed(&mut self, tile: IntervalBox<N>) -> NodeId {
        let id = self.push(tile, None, 0);
        self.seeds.push(id);
        id
    }

    /// Resolves a pending node as stored or discarded.
    pub(super) fn resolve(&mut self, id: NodeId, index: usize, root: Root<N>, stored: bool) {
        let state = if stored {
            NodeState::Stored
        } else {
            NodeState::Discarded
        };
        self.finish(id, index, root, state);
    }

    /// Bisects a pending node's tile and returns the two new pending children.
    pub(super) fn bisect(&mut self, id: NodeId, index: usize, root: Root<N>) -> [NodeId; 2] {
        let node = &self.nodes[id.0];
        let depth = node.depth + 1;
        let (left, right) = node.tile.bisect();

        let children = [
            self.push(left, Some(id), depth),
            self.push(right, Some(id), depth),
        ];
        self.finish(id, index, root, NodeState::Bisected(children));
        children
    }

    fn push(&mut self, tile: IntervalBox<N>, parent: Option<NodeId>, depth: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            tile,
            root: Root::unknown(tile),
            parent,
            depth,
            index: None,
            state: NodeState::Pending,
        });
        self.pending += 1;
        id
    }

    fn finish(&mut self, id: NodeId, index: usize, root: Root<N>, state: NodeState) {
        let node = &mut self.nodes[id.0];
        node.root = root;
        node.index = Some(index);
        node.state = state;
        self.pending -= 1;
    }

    fn render(&self, id: NodeId, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = &self.nodes[id.0];

        write!(f, "{:indent$}", "", indent = 2 * node.depth)?;
        match node.index {
            Some(index) => write!(f, "#{index} ")?,
            None => write!(f, "#- ")?,
        }
        fmt::Display::fmt(&node.tile, f)?;
        writeln!(f, " {} {}", node.root.status(), node.state)?;

        if let NodeState::Bisected(children) = node.state {
            for child in children {
                self.render(child, f)?;
            }
        }
        Ok(())
    }
}

/// One line per node, indented by depth, with its ordering index, tile,
/// status and state. A precision applies to the tile bounds.
impl<const N: usize> fmt::Display for SearchTree<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &seed in &self.seeds {
            self.render(seed, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use prune_core::Interval;

    use crate::RootStatus;

    fn unit() -> IntervalBox<1> {
        IntervalBox::from(Interval::new(0.0, 1.0).unwrap())
    }

    #[test]
    fn bisect_adds_pending_children() {
        let mut tree = SearchTree::default();
        let seed = tree.seed(unit());
        assert_eq!(tree.pending(), 1);

        let [left, right] = tree.bisect(seed, 0, Root::unknown(unit()));
        assert_eq!(tree.pending(), 2);
        assert_eq!(tree.len(), 3);

        let left = tree.get(left).unwrap();
        let right = tree.get(right).unwrap();
        assert_eq!(left.parent(), Some(seed));
        assert_eq!(left.depth(), 1);
        assert!(left.is_pending() && right.is_pending());
        assert_eq!(left.tile().hull(right.tile()), unit());
        assert_eq!(tree.tiles().len(), 2);
    }

    #[test]
    fn collect_filters_leaves() {
        let mut tree = SearchTree::default();
        let seed = tree.seed(unit());
        let [left, right] = tree.bisect(seed, 0, Root::unknown(unit()));

        let left_tile = *tree.get(left).unwrap().tile();
        let right_tile = *tree.get(right).unwrap().tile();
        tree.resolve(left, 1, Root::new(left_tile, RootStatus::Empty), false);
        tree.resolve(right, 2, Root::unknown(right_tile), true);

        assert_eq!(tree.pending(), 0);
        assert_eq!(tree.roots(), vec![Root::unknown(right_tile)]);
        assert_eq!(tree.collect(|_| true).len(), 2);
        assert_eq!(tree.roots(), tree.roots());
    }

    #[test]
    fn display_indents_by_depth() {
        let mut tree = SearchTree::default();
        let seed = tree.seed(unit());
        let [left, _] = tree.bisect(seed, 0, Root::unknown(unit()));
        let left_tile = *tree.get(left).unwrap().tile();
        tree.resolve(left, 1, Root::unknown(left_tile), true);

        let rendered = format!("{tree:.2}");
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "#0 [0.00, 1.00] unknown bisected");
        assert_eq!(lines[1], "  #1 [0.00, 0.50] unknown stored");
        assert_eq!(lines[2], "  #- [0.50, 1.00] unknown pending");
    }
}
