use crate::{Complex, IntervalBox, Scalar};

/// A function `Rⁿ → Rⁿ` whose roots are sought.
///
/// The function is written once, generically over [`Scalar`], so solvers can
/// evaluate it over intervals to bound its image and over dual numbers to
/// bound its Jacobian. Closures cannot be generic, so functions are types:
///
/// ```
/// use prune_core::{Function, Scalar};
///
/// /// f(x) = x² - 2
/// struct SquareMinusTwo;
///
/// impl Function<1> for SquareMinusTwo {
///     type Error = std::convert::Infallible;
///
///     fn eval<T: Scalar>(&self, x: &[T; 1]) -> Result<[T; 1], Self::Error> {
///         Ok([x[0].sqr() - 2.0])
///     }
/// }
/// ```
pub trait Function<const N: usize> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Each function defines its own `Error` type for values outside its domain.
    fn eval<T: Scalar>(&self, x: &[T; N]) -> Result<[T; N], Self::Error>;
}

impl<F: Function<N>, const N: usize> Function<N> for &F {
    type Error = F::Error;

    fn eval<T: Scalar>(&self, x: &[T; N]) -> Result<[T; N], Self::Error> {
        (**self).eval(x)
    }
}

/// Returns an enclosure of `f` over `region`.
///
/// # Errors
///
/// Returns the function's error if it cannot be evaluated over `region`.
pub fn image<F, const N: usize>(f: &F, region: &IntervalBox<N>) -> Result<IntervalBox<N>, F::Error>
where
    F: Function<N>,
{
    f.eval(region.components()).map(IntervalBox::new)
}

/// A function `C → C` whose roots are sought.
///
/// Wrap it in [`Planar`] to search over the complex plane as `R²`.
pub trait ComplexFunction {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `z`.
    ///
    /// # Errors
    ///
    /// Each function defines its own `Error` type for values outside its domain.
    fn eval<T: Scalar>(&self, z: Complex<T>) -> Result<Complex<T>, Self::Error>;
}

/// Views a [`ComplexFunction`] as a [`Function<2>`] on `(re, im)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Planar<F>(pub F);

impl<F: ComplexFunction> Function<2> for Planar<F> {
    type Error = F::Error;

    fn eval<T: Scalar>(&self, x: &[T; 2]) -> Result<[T; 2], Self::Error> {
        let w = self.0.eval(Complex::new(x[0], x[1]))?;
        Ok([w.re, w.im])
    }
}
