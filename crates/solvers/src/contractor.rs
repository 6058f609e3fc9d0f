//! Contractors narrow a region and classify the roots inside it.
//!
//! A [`Contractor`] receives a region and returns a (possibly smaller)
//! region that still encloses every root of the function in the input,
//! together with a [`RootStatus`]:
//!
//! - [`RootStatus::Unique`] — proven to contain exactly one root
//! - [`RootStatus::Empty`] — proven to contain no root
//! - [`RootStatus::Unknown`] — neither proof applies
//!
//! # Contractors
//!
//! - [`Bisection`] — image test only; never narrows, never proves uniqueness
//! - [`Newton`] — preconditioned interval Newton (Gauss–Seidel) step
//! - [`Krawczyk`] — Krawczyk operator, more tolerant of wide Jacobians
//!
//! Newton and Krawczyk keep iterating on a region once it is proven unique,
//! so the returned enclosure is narrower than the tolerance whenever the
//! operator keeps contracting.
//!
//! A derivative contractor may return a region with empty components without
//! claiming [`RootStatus::Empty`]. The branch-and-prune engine treats such a
//! degenerate result as [`RootStatus::Unknown`].

mod bisection;
mod error;
mod krawczyk;
mod linear;
mod newton;

pub use bisection::Bisection;
pub use error::ContractError;
pub use krawczyk::Krawczyk;
pub use newton::Newton;

use prune_core::{Function, IntervalBox, Jacobian, image};

use crate::{Root, RootStatus};

/// The result of one operator step of a derivative contractor.
type StepResult<F, J, const N: usize> = Result<
    Root<N>,
    ContractError<<F as Function<N>>::Error, <J as Jacobian<F, N>>::Error>,
>;

/// Upper bound on operator iterations spent narrowing a unique enclosure.
const MAX_TIGHTEN_ITERS: usize = 64;

/// Narrows a region and classifies the roots it contains.
pub trait Contractor<const N: usize> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Contracts `root` and assigns a status to the result.
    ///
    /// The returned region encloses every root of the function that lies in
    /// `root.region()`. `tol` is the search tolerance, which contractors may
    /// use as a target width for unique enclosures.
    ///
    /// # Errors
    ///
    /// Returns an error if the function or its derivative cannot be evaluated
    /// over the region.
    fn contract(&self, root: &Root<N>, tol: f64) -> Result<Root<N>, Self::Error>;
}

impl<C: Contractor<N>, const N: usize> Contractor<N> for &C {
    type Error = C::Error;

    fn contract(&self, root: &Root<N>, tol: f64) -> Result<Root<N>, Self::Error> {
        (**self).contract(root, tol)
    }
}

/// Returns true if some component of `f(region)` excludes zero.
fn excludes_zero<F, const N: usize>(f: &F, region: &IntervalBox<N>) -> Result<bool, F::Error>
where
    F: Function<N>,
{
    Ok(!image(f, region)?.contains_zero())
}

/// Repeats a uniqueness-preserving operator step on an enclosure.
///
/// Stops once the enclosure is narrower than `tol`, the step no longer
/// shrinks it, or [`MAX_TIGHTEN_ITERS`] steps have run.
fn tighten<const N: usize, E>(
    mut region: IntervalBox<N>,
    tol: f64,
    mut step: impl FnMut(&IntervalBox<N>) -> Result<Root<N>, E>,
) -> Result<Root<N>, E> {
    for _ in 0..MAX_TIGHTEN_ITERS {
        if region.diam() < tol {
            break;
        }
        let next = step(&region)?;
        if next.region().is_empty() || next.diam() >= region.diam() {
            break;
        }
        region = *next.region();
    }
    Ok(Root::new(region, RootStatus::Unique))
}
