//! One-call root finding with a chosen contractor.

use prune_core::{Complex, ComplexFunction, Function, Interval, IntervalBox, Planar};

use crate::{
    Root,
    branch_and_prune::{BreadthFirst, Config, Error, find_roots},
    contractor::{Bisection, Krawczyk, Newton},
};

/// The contractor used by [`roots`] and [`complex_roots`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    /// Image test and bisection only.
    Bisection,

    /// Interval Newton with automatic derivatives.
    #[default]
    Newton,

    /// Krawczyk with automatic derivatives.
    Krawczyk,
}

/// Finds the roots of `f` in `region` to tolerance `tol`.
///
/// Searches breadth-first and returns the stored roots. Every root of `f` in
/// `region` lies in one of them.
///
/// # Errors
///
/// Returns an error if `tol` is not finite and positive, if the region is
/// empty or unbounded, or if `f` cannot be evaluated.
pub fn roots<F, const N: usize>(
    f: F,
    region: IntervalBox<N>,
    method: Method,
    tol: f64,
) -> Result<Vec<Root<N>>, Error>
where
    F: Function<N>,
{
    let config = Config::new(tol)?;
    match method {
        Method::Bisection => find_roots(Bisection::new(f), BreadthFirst::new(), region, &config),
        Method::Newton => find_roots(Newton::new(f), BreadthFirst::new(), region, &config),
        Method::Krawczyk => find_roots(Krawczyk::new(f), BreadthFirst::new(), region, &config),
    }
}

/// Finds the roots of a complex function in `region` to tolerance `tol`.
///
/// Root regions have the real part as component 0 and the imaginary part as
/// component 1.
///
/// # Errors
///
/// Returns an error if `tol` is not finite and positive, if the region is
/// empty or unbounded, or if `f` cannot be evaluated.
pub fn complex_roots<F>(
    f: F,
    region: Complex<Interval>,
    method: Method,
    tol: f64,
) -> Result<Vec<Root<2>>, Error>
where
    F: ComplexFunction,
{
    roots::<_, 2>(Planar(f), region.into(), method, tol)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use prune_core::Scalar;

    use crate::RootStatus;

    /// f(x) = x³ - x, with roots -1, 0 and 1.
    struct Cubic;

    impl Function<1> for Cubic {
        type Error = Infallible;

        fn eval<T: Scalar>(&self, x: &[T; 1]) -> Result<[T; 1], Self::Error> {
            Ok([x[0].powi(3) - x[0]])
        }
    }

    /// f(z) = z³ - 1, with the three cube roots of unity.
    struct CubeRootsOfUnity;

    impl ComplexFunction for CubeRootsOfUnity {
        type Error = Infallible;

        fn eval<T: Scalar>(&self, z: Complex<T>) -> Result<Complex<T>, Self::Error> {
            Ok(z.powi(3) - 1.0)
        }
    }

    fn contains_all(found: &[Root<1>], points: &[f64]) -> bool {
        points
            .iter()
            .all(|&p| found.iter().any(|root| root.region().contains(&[p])))
    }

    #[test]
    fn every_method_encloses_the_roots() {
        let region = IntervalBox::from(Interval::new(-2.0, 2.0).unwrap());
        for method in [Method::Bisection, Method::Newton, Method::Krawczyk] {
            let found = roots(Cubic, region, method, 1e-8).unwrap();
            assert!(contains_all(&found, &[-1.0, 0.0, 1.0]), "{method:?}");
            assert!(found.iter().all(|root| root.diam() < 1e-8), "{method:?}");
        }
    }

    #[test]
    fn newton_proves_uniqueness() {
        let region = IntervalBox::from(Interval::new(-2.0, 2.0).unwrap());
        let found = roots(Cubic, region, Method::Newton, 1e-8).unwrap();
        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|root| root.status() == RootStatus::Unique));
    }

    #[test]
    fn finds_cube_roots_of_unity() {
        let region = Complex::new(
            Interval::new(-2.0, 2.0).unwrap(),
            Interval::new(-2.0, 2.0).unwrap(),
        );
        let found = complex_roots(CubeRootsOfUnity, region, Method::Krawczyk, 1e-8).unwrap();

        let half_sqrt3 = 3.0_f64.sqrt() / 2.0;
        assert_eq!(found.len(), 3);
        for point in [[1.0, 0.0], [-0.5, half_sqrt3], [-0.5, -half_sqrt3]] {
            assert!(found.iter().any(|root| root.region().contains(&point)));
        }
    }

    #[test]
    fn rejects_bad_tolerance() {
        let region = IntervalBox::from(Interval::new(-2.0, 2.0).unwrap());
        let result = roots(Cubic, region, Method::Newton, 0.0);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
