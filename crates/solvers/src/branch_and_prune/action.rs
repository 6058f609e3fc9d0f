/// Actions an observer can take during a branch-and-prune search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and report the tree as it stands.
    ///
    /// Pending nodes are reported as unknown roots, so the result still
    /// covers the seed regions.
    StopEarly,
}
