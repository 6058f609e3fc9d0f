//! Iterative tolerance refinement.
//!
//! A coarse search is cheap and locates every candidate region. Refinement
//! then reruns the search with half the tolerance, seeded only with the
//! previous pass's roots, until a target tolerance is reached.

use log::debug;

use crate::{
    Contractor, Root, RootStatus,
    branch_and_prune::{Config, Error, Strategy, solve_unobserved},
};

/// Refines `roots` until they are resolved at `target_tol`.
///
/// Starting from `config.tolerance()`, each pass halves the tolerance (never
/// going below `target_tol`) and searches the regions of the open roots with
/// a fresh strategy from `make_strategy`. Unique roots narrower than
/// `target_tol` are final and leave the loop, so their enclosures are never
/// contracted again. Refinement ends once a pass at `target_tol` has run or no
/// open roots remain.
///
/// The order of the returned roots is unspecified.
///
/// # Errors
///
/// Returns an error if `target_tol` is not finite and positive, or if a
/// search fails.
pub fn refine<C, S, const N: usize>(
    contractor: C,
    mut make_strategy: impl FnMut() -> S,
    roots: impl IntoIterator<Item = Root<N>>,
    config: &Config,
    target_tol: f64,
) -> Result<Vec<Root<N>>, Error>
where
    C: Contractor<N>,
    S: Strategy,
{
    let target = config.with_tolerance(target_tol)?.tolerance();
    let is_final = |root: &Root<N>| root.status() == RootStatus::Unique && root.diam() < target;

    let mut config = *config;
    let (mut resolved, mut open): (Vec<_>, Vec<_>) = roots.into_iter().partition(is_final);

    while config.tolerance() > target && !open.is_empty() {
        config = config.with_tolerance((config.tolerance() / 2.0).max(target))?;

        let seeds = open.iter().map(|root| *root.region());
        let found = solve_unobserved(&contractor, make_strategy(), seeds, &config)?.roots;
        let (done, rest): (Vec<_>, Vec<_>) = found.into_iter().partition(is_final);

        debug!(
            "refinement pass at tolerance {:e}: {} resolved, {} open",
            config.tolerance(),
            done.len(),
            rest.len()
        );
        resolved.extend(done);
        open = rest;
    }

    resolved.extend(open);
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use prune_core::{Function, Interval, IntervalBox, Scalar};
    use test_log::test;

    use crate::{
        branch_and_prune::{BreadthFirst, DepthFirst, find_roots},
        contractor::{Bisection, Newton},
    };

    struct SquareMinusTwo;

    impl Function<1> for SquareMinusTwo {
        type Error = Infallible;

        fn eval<T: Scalar>(&self, x: &[T; 1]) -> Result<[T; 1], Self::Error> {
            Ok([x[0].sqr() - 2.0])
        }
    }

    fn region() -> IntervalBox<1> {
        IntervalBox::from(Interval::new(-3.0, 3.0).unwrap())
    }

    #[test]
    fn tightens_unknown_roots() {
        let coarse = Config::new(1e-2).unwrap();
        let roots =
            find_roots(Bisection::new(SquareMinusTwo), BreadthFirst::new(), region(), &coarse)
                .unwrap();
        assert!(roots.iter().all(|root| root.diam() < 1e-2));

        let refined = refine(
            Bisection::new(SquareMinusTwo),
            BreadthFirst::new,
            roots,
            &coarse,
            1e-6,
        )
        .unwrap();

        assert!(!refined.is_empty());
        assert!(refined.iter().all(|root| root.diam() < 1e-6));
        assert!(refined.iter().all(|root| root.status() == RootStatus::Unknown));

        let sqrt2 = 2.0_f64.sqrt();
        assert!(refined.iter().any(|root| root.region().contains(&[sqrt2])));
        assert!(refined.iter().any(|root| root.region().contains(&[-sqrt2])));
    }

    #[test]
    fn matches_a_direct_search_at_the_target() {
        let coarse = Config::new(1e-1).unwrap();
        let roots =
            find_roots(Newton::new(SquareMinusTwo), DepthFirst::new(), region(), &coarse).unwrap();
        let refined = refine(Newton::new(SquareMinusTwo), DepthFirst::new, roots, &coarse, 1e-9)
            .unwrap();

        assert_eq!(refined.len(), 2);
        assert!(refined.iter().all(|root| root.status() == RootStatus::Unique));
        assert!(refined.iter().all(|root| root.diam() < 1e-9));
    }

    #[test]
    fn nothing_to_refine() {
        let refined = refine(
            Newton::new(SquareMinusTwo),
            BreadthFirst::new,
            Vec::<Root<1>>::new(),
            &Config::default(),
            1e-12,
        )
        .unwrap();
        assert!(refined.is_empty());
    }

    #[test]
    fn rejects_bad_target() {
        let result = refine(
            Newton::new(SquareMinusTwo),
            BreadthFirst::new,
            Vec::<Root<1>>::new(),
            &Config::default(),
            -1.0,
        );
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
