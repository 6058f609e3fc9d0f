use prune_core::IntervalBox;

use crate::{Root, RootStatus};

use super::{Config, EmptyPolicy};

/// What the search does with a processed node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Keep the node as a result leaf.
    Store,

    /// Drop the node from the results.
    Discard,

    /// Split the node's tile and schedule both halves.
    Bisect,
}

impl Decision {
    /// The default processing rule.
    ///
    /// | status  | diameter below tolerance | decision |
    /// |---------|--------------------------|----------|
    /// | unique  | any                      | store    |
    /// | empty   | any                      | discard, or store under [`EmptyPolicy::Store`] |
    /// | unknown | yes                      | store    |
    /// | unknown | no                       | bisect   |
    #[must_use]
    pub fn rule<const N: usize>(contraction: &Contraction<N>, config: &Config) -> Self {
        match contraction.status() {
            RootStatus::Unique => Self::Store,
            RootStatus::Empty => match config.empty_policy() {
                EmptyPolicy::Discard => Self::Discard,
                EmptyPolicy::Store => Self::Store,
            },
            RootStatus::Unknown if contraction.diam() < config.tolerance() => Self::Store,
            RootStatus::Unknown => Self::Bisect,
        }
    }
}

/// The outcome of contracting a node's tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contraction<const N: usize> {
    tile: IntervalBox<N>,
    contracted: Root<N>,
}

impl<const N: usize> Contraction<N> {
    pub(super) fn new(tile: IntervalBox<N>, contracted: Root<N>) -> Self {
        Self { tile, contracted }
    }

    /// Returns the region that was contracted.
    #[must_use]
    pub fn tile(&self) -> &IntervalBox<N> {
        &self.tile
    }

    /// Returns the contractor's result as given.
    #[must_use]
    pub fn contracted(&self) -> &Root<N> {
        &self.contracted
    }

    /// Returns true if the contractor produced an empty region without
    /// proving the tile empty.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.contracted.region().is_empty() && self.contracted.status() != RootStatus::Empty
    }

    /// Returns the status used for decisions.
    ///
    /// Degenerate contractions are [`RootStatus::Unknown`].
    #[must_use]
    pub fn status(&self) -> RootStatus {
        if self.is_degenerate() {
            RootStatus::Unknown
        } else {
            self.contracted.status()
        }
    }

    /// Returns the diameter compared against the tolerance.
    ///
    /// This is the diameter of the contracted region, or of the tile when the
    /// contraction is degenerate.
    #[must_use]
    pub fn diam(&self) -> f64 {
        if self.is_degenerate() {
            self.tile.diam()
        } else {
            self.contracted.diam()
        }
    }

    /// Returns the root recorded on the node.
    ///
    /// Unique roots keep their contracted enclosure, every other status is
    /// attached to the tile.
    #[must_use]
    pub fn root(&self) -> Root<N> {
        match self.status() {
            RootStatus::Unique => self.contracted,
            status => Root::new(self.tile, status),
        }
    }
}
