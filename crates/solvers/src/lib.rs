//! Verified root finding by branch and prune.
//!
//! A search starts from one or more regions and repeatedly applies a
//! [`Contractor`] to each pending region. The contractor either proves the
//! region holds exactly one root, proves it holds none, or leaves it
//! undecided, in which case the region is bisected or, once smaller than the
//! tolerance, kept as an unresolved candidate.
//!
//! Every root of the function inside the starting regions lies in one of the
//! returned [`Root`] boxes.
//!
//! # Modules
//!
//! - [`contractor`] — bisection, interval Newton, and Krawczyk contractors
//! - [`branch_and_prune`] — the search engine, strategies, and search trees
//! - [`refinement`] — repeated searches with a shrinking tolerance
//! - [`roots`](mod@roots) — one-call entry points that pick a contractor by [`Method`]

pub mod branch_and_prune;
pub mod contractor;
pub mod refinement;
pub mod roots;

mod root;

pub use contractor::Contractor;
pub use refinement::refine;
pub use root::{Root, RootStatus};
pub use roots::{Method, complex_roots, roots};
