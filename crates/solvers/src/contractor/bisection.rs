use prune_core::Function;

use crate::{Root, RootStatus};

use super::{Contractor, excludes_zero};

/// A contractor that only tests the image of the function.
///
/// The region is never narrowed. It is classified [`RootStatus::Empty`] when
/// some component of `f(region)` excludes zero and [`RootStatus::Unknown`]
/// otherwise, so the search refines every candidate down to the tolerance.
#[derive(Debug, Clone, Copy)]
pub struct Bisection<F> {
    f: F,
}

impl<F> Bisection<F> {
    /// Creates a bisection contractor for `f`.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: Function<N>, const N: usize> Contractor<N> for Bisection<F> {
    type Error = F::Error;

    fn contract(&self, root: &Root<N>, _tol: f64) -> Result<Root<N>, Self::Error> {
        let status = if excludes_zero(&self.f, root.region())? {
            RootStatus::Empty
        } else {
            RootStatus::Unknown
        };
        Ok(Root::new(*root.region(), status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use prune_core::{Interval, IntervalBox, Scalar};

    struct SquareMinusTwo;

    impl Function<1> for SquareMinusTwo {
        type Error = Infallible;

        fn eval<T: Scalar>(&self, x: &[T; 1]) -> Result<[T; 1], Self::Error> {
            Ok([x[0].sqr() - 2.0])
        }
    }

    fn root(lo: f64, hi: f64) -> Root<1> {
        Root::unknown(IntervalBox::from(Interval::new(lo, hi).unwrap()))
    }

    #[test]
    fn region_without_root_is_empty() {
        let contracted = Bisection::new(SquareMinusTwo)
            .contract(&root(2.0, 3.0), 1e-6)
            .unwrap();
        assert_eq!(contracted.status(), RootStatus::Empty);
    }

    #[test]
    fn region_with_root_is_unchanged() {
        let input = root(1.0, 2.0);
        let contracted = Bisection::new(SquareMinusTwo)
            .contract(&input, 1e-6)
            .unwrap();

        assert_eq!(contracted.status(), RootStatus::Unknown);
        assert_eq!(contracted.region(), input.region());
    }

    #[test]
    fn never_proves_uniqueness() {
        let contracted = Bisection::new(SquareMinusTwo)
            .contract(&root(1.414, 1.415), 1.0)
            .unwrap();
        assert_eq!(contracted.status(), RootStatus::Unknown);
    }
}
