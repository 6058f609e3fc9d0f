//! Branch-and-prune search for every root of a function inside a region.
//!
//! # Algorithm
//!
//! The search keeps a tree of regions. Each pending node is handed to a
//! [`Contractor`], which narrows the node's region and classifies it. The
//! strategy then decides what happens to the node:
//!
//! - [`Decision::Store`] — the node becomes a result leaf
//! - [`Decision::Discard`] — the node is proven to hold no root
//! - [`Decision::Bisect`] — the node is split and both halves become pending
//!
//! The default rule, [`Decision::rule`], stores unique regions, discards
//! empty ones, stores unknown regions narrower than the tolerance and bisects
//! everything else.
//!
//! Whatever the contractor returns, the node keeps its own region (its tile),
//! and bisection splits the tile. The tiles of all leaves therefore cover the
//! seed regions exactly, and contraction only serves to classify nodes and to
//! narrow the enclosure reported for unique roots.
//!
//! # Termination
//!
//! A search ends when no pending nodes remain. That is not guaranteed: a
//! contractor that keeps returning [`RootStatus::Unknown`] for regions that
//! bisection cannot shrink below the tolerance will loop. Bound such searches
//! with [`Config::with_max_steps`], an observer returning
//! [`Action::StopEarly`], or by consuming only a prefix of a [`Search`].
//!
//! # Observer Events
//!
//! [`solve`] emits one [`Event`] per processed node, after the node's
//! decision has been applied to the tree.
//!
//! [`RootStatus::Unknown`]: crate::RootStatus::Unknown

mod action;
mod config;
mod decision;
mod error;
mod event;
mod search;
mod solution;
mod strategy;
mod tree;


pub use action::Action;
pub use config::{Config, ConfigError, EmptyPolicy};
pub use decision::{Contraction, Decision};
pub use error::{Error, RegionError};
pub use event::Event;
pub use search::Search;
pub use solution::{Solution, Status};
pub use strategy::{BreadthFirst, DepthFirst, Strategy};
pub use tree::{Node, NodeId, NodeState, SearchTree};

use log::debug;
use prune_core::{IntervalBox, Observer};

use crate::{Contractor, Root};

/// Starts a lazy search over `seeds`.
///
/// Nothing is evaluated until the returned [`Search`] is stepped or iterated.
///
/// # Errors
///
/// Returns an error if any seed region is empty or unbounded.
pub fn search<C, S, const N: usize>(
    contractor: C,
    strategy: S,
    seeds: impl IntoIterator<Item = IntervalBox<N>>,
    config: &Config,
) -> Result<Search<C, S, N>, Error>
where
    C: Contractor<N>,
    S: Strategy,
{
    Search::new(contractor, strategy, seeds, config)
}

/// Runs a search over `seeds` to completion.
///
/// The observer receives an [`Event`] for each processed node and may stop
/// the search with [`Action::StopEarly`]. A search that stops before
/// completion reports its pending tiles as unknown roots.
///
/// # Errors
///
/// Returns an error if any seed region is invalid or if the contractor fails.
/// A contractor failure aborts the search without a partial result.
pub fn solve<C, S, Obs, const N: usize>(
    contractor: C,
    strategy: S,
    seeds: impl IntoIterator<Item = IntervalBox<N>>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    C: Contractor<N>,
    S: Strategy,
    Obs: Observer<Event<N>, Action>,
{
    let mut search = Search::new(contractor, strategy, seeds, config)?;

    loop {
        if search.tree().pending() > 0
            && config.max_steps().is_some_and(|max| search.steps() >= max)
        {
            debug!("search stopped at the step limit of {}", search.steps());
            return Ok(Solution::new(Status::MaxSteps, search.into_tree()));
        }

        let Some(event) = search.step()? else {
            break;
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!("search stopped by observer after {} steps", search.steps());
            return Ok(Solution::new(Status::StoppedByObserver, search.into_tree()));
        }
    }

    debug!("search completed after {} steps", search.steps());
    Ok(Solution::new(Status::Completed, search.into_tree()))
}

/// Runs a search over `seeds` to completion without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if any seed region is invalid or if the contractor fails.
pub fn solve_unobserved<C, S, const N: usize>(
    contractor: C,
    strategy: S,
    seeds: impl IntoIterator<Item = IntervalBox<N>>,
    config: &Config,
) -> Result<Solution<N>, Error>
where
    C: Contractor<N>,
    S: Strategy,
{
    solve(contractor, strategy, seeds, config, ())
}

/// Searches `region` and returns the stored roots.
///
/// # Errors
///
/// Returns an error if the region is invalid or if the contractor fails.
pub fn find_roots<C, S, const N: usize>(
    contractor: C,
    strategy: S,
    region: IntervalBox<N>,
    config: &Config,
) -> Result<Vec<Root<N>>, Error>
where
    C: Contractor<N>,
    S: Strategy,
{
    solve_unobserved(contractor, strategy, [region], config).map(|solution| solution.roots)
}
