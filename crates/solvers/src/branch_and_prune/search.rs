use std::iter::FusedIterator;

use log::{debug, trace};
use prune_core::IntervalBox;

use crate::{Contractor, Root};

use super::{Config, Contraction, Decision, Error, Event, NodeId, RegionError, SearchTree, Strategy};

/// A lazy branch-and-prune search.
///
/// Each call to [`step`](Search::step) processes exactly one pending node. As
/// an [`Iterator`], the search yields a snapshot of the tree after every step
/// and ends once no pending nodes remain. If the contractor fails, the error
/// is yielded once and the iterator ends.
///
/// A search cannot be restarted. Build a new one for each pass.
#[derive(Debug)]
pub struct Search<C, S, const N: usize> {
    contractor: C,
    strategy: S,
    config: Config,
    tree: SearchTree<N>,
    steps: usize,
    failed: bool,
}

impl<C, S, const N: usize> Search<C, S, N>
where
    C: Contractor<N>,
    S: Strategy,
{
    /// Creates a search with one pending node per seed region.
    ///
    /// # Errors
    ///
    /// Returns an error if any seed region is empty or unbounded.
    pub fn new(
        contractor: C,
        mut strategy: S,
        seeds: impl IntoIterator<Item = IntervalBox<N>>,
        config: &Config,
    ) -> Result<Self, Error> {
        let mut tree = SearchTree::default();
        for (index, seed) in seeds.into_iter().enumerate() {
            if seed.is_empty() {
                return Err(RegionError::Empty { index }.into());
            }
            if !seed.is_finite() {
                return Err(RegionError::Unbounded { index }.into());
            }
            strategy.push(tree.seed(seed));
        }

        Ok(Self {
            contractor,
            strategy,
            config: *config,
            tree,
            steps: 0,
            failed: false,
        })
    }

    /// Processes the next pending node.
    ///
    /// Returns `Ok(None)` once no pending nodes remain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Evaluation`] if the contractor fails. The search
    /// cannot continue after an error.
    pub fn step(&mut self) -> Result<Option<Event<N>>, Error> {
        if self.failed {
            return Ok(None);
        }

        let Some((id, tile)) = self.next_pending() else {
            return Ok(None);
        };

        let contracted = match self
            .contractor
            .contract(&Root::unknown(tile), self.config.tolerance())
        {
            Ok(contracted) => contracted,
            Err(error) => {
                self.failed = true;
                return Err(Error::Evaluation(Box::new(error)));
            }
        };

        let contraction = Contraction::new(tile, contracted);
        if contraction.is_degenerate() {
            debug!("degenerate contraction of {tile}, treating it as unknown");
        }

        let decision = self.strategy.decide(&contraction, &self.config);
        let index = self.steps;
        self.steps += 1;

        match decision {
            Decision::Store => self.tree.resolve(id, index, contraction.root(), true),
            Decision::Discard => self.tree.resolve(id, index, contraction.root(), false),
            Decision::Bisect => {
                for child in self.tree.bisect(id, index, contraction.root()) {
                    self.strategy.push(child);
                }
            }
        }

        trace!(
            "node #{index} {tile}: {} -> {decision:?}",
            contraction.status()
        );

        let depth = self.tree.get(id).map_or(0, |node| node.depth());
        Ok(Some(Event {
            index,
            node: id,
            depth,
            contraction,
            decision,
            pending: self.tree.pending(),
        }))
    }

    /// Pops nodes until one that is still pending turns up.
    fn next_pending(&mut self) -> Option<(NodeId, IntervalBox<N>)> {
        while let Some(id) = self.strategy.pop() {
            match self.tree.get(id) {
                Some(node) if node.is_pending() => return Some((id, *node.tile())),
                _ => trace!("skipping node {} that is not pending", id.index()),
            }
        }
        None
    }
}

impl<C, S, const N: usize> Search<C, S, N> {
    /// Returns the current tree.
    #[must_use]
    pub fn tree(&self) -> &SearchTree<N> {
        &self.tree
    }

    /// Consumes the search and returns its tree.
    #[must_use]
    pub fn into_tree(self) -> SearchTree<N> {
        self.tree
    }

    /// Returns the number of nodes processed so far.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the search configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<C, S, const N: usize> Iterator for Search<C, S, N>
where
    C: Contractor<N>,
    S: Strategy,
{
    type Item = Result<SearchTree<N>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.step() {
            Ok(Some(_)) => Some(Ok(self.tree.clone())),
            Ok(None) => None,
            Err(error) => Some(Err(error)),
        }
    }
}

impl<C, S, const N: usize> FusedIterator for Search<C, S, N>
where
    C: Contractor<N>,
    S: Strategy,
{
}
