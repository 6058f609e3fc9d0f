use std::error::Error as StdError;

use thiserror::Error;

use super::config::ConfigError;

/// Errors that can occur when validating seed regions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegionError {
    #[error("seed region {index} is empty")]
    Empty { index: usize },

    #[error("seed region {index} is unbounded")]
    Unbounded { index: usize },
}

/// Errors that can occur during a branch-and-prune search.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("invalid region: {0}")]
    InvalidRegion(#[from] RegionError),

    #[error("evaluation failed")]
    Evaluation(#[source] Box<dyn StdError + Send + Sync>),
}
