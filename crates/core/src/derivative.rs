use crate::{Dual, Function, Interval, IntervalBox};

/// An `N × N` interval matrix, stored by rows.
pub type Matrix<const N: usize> = [[Interval; N]; N];

/// Provides an enclosure of the Jacobian of `F` over a box.
///
/// Row `i` holds the gradient of component `i` of `F`.
pub trait Jacobian<F, const N: usize> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns an enclosure of the Jacobian of `f` over `region`.
    ///
    /// # Errors
    ///
    /// Returns an error if the derivative cannot be evaluated over `region`.
    fn jacobian(&self, f: &F, region: &IntervalBox<N>) -> Result<Matrix<N>, Self::Error>;
}

/// Jacobians by forward-mode automatic differentiation of `F` itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoDiff;

impl<F: Function<N>, const N: usize> Jacobian<F, N> for AutoDiff {
    type Error = F::Error;

    fn jacobian(&self, f: &F, region: &IntervalBox<N>) -> Result<Matrix<N>, Self::Error> {
        jacobian(f, region)
    }
}

/// A user-supplied derivative `f'` for a scalar function.
#[derive(Debug, Clone, Copy, Default)]
pub struct Explicit<G>(pub G);

impl<F, G: Function<1>> Jacobian<F, 1> for Explicit<G> {
    type Error = G::Error;

    fn jacobian(&self, _f: &F, region: &IntervalBox<1>) -> Result<Matrix<1>, Self::Error> {
        let [slope] = self.0.eval(region.components())?;
        Ok([[slope]])
    }
}

/// Returns an enclosure of the Jacobian of `f` over `region` using dual numbers.
///
/// # Errors
///
/// Returns the function's error if it cannot be evaluated over `region`.
pub fn jacobian<F, const N: usize>(f: &F, region: &IntervalBox<N>) -> Result<Matrix<N>, F::Error>
where
    F: Function<N>,
{
    let x: [Dual<Interval, N>; N] = std::array::from_fn(|i| Dual::variable(region[i], i));
    let y = f.eval(&x)?;
    Ok(y.map(|component| component.grad))
}
