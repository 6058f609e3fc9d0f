use std::{
    fmt::Debug,
    ops::{Add, Div, Mul, Neg, Sub},
};

use crate::{DomainError, Interval};

/// Numeric types a [`Function`](crate::Function) can be evaluated over.
///
/// Functions are written once, generically over `T: Scalar`, and the solvers
/// evaluate them over [`Interval`] to bound their image and over
/// [`Dual`](crate::Dual) numbers to bound their derivatives.
///
/// Plain `f64` operands act as exact constants, so `x * 2.0 + 1.0` works for
/// any scalar `x`.
pub trait Scalar:
    Copy
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Add<f64, Output = Self>
    + Sub<f64, Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
    /// Lifts a constant into the scalar type.
    fn constant(value: f64) -> Self;

    /// Returns `selfⁿ`.
    #[must_use]
    fn powi(self, n: i32) -> Self;

    /// Returns `self²`.
    #[must_use]
    fn sqr(self) -> Self {
        self.powi(2)
    }

    #[must_use]
    fn sin(self) -> Self;

    #[must_use]
    fn cos(self) -> Self;

    #[must_use]
    fn exp(self) -> Self;

    /// Returns the natural logarithm.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the argument is not strictly positive.
    fn ln(self) -> Result<Self, DomainError>;

    /// Returns the square root.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the argument is negative.
    fn sqrt(self) -> Result<Self, DomainError>;
}

impl Scalar for Interval {
    fn constant(value: f64) -> Self {
        Interval::point(value)
    }

    fn powi(self, n: i32) -> Self {
        Interval::powi(self, n)
    }

    fn sqr(self) -> Self {
        Interval::sqr(self)
    }

    fn sin(self) -> Self {
        Interval::sin(self)
    }

    fn cos(self) -> Self {
        Interval::cos(self)
    }

    fn exp(self) -> Self {
        Interval::exp(self)
    }

    fn ln(self) -> Result<Self, DomainError> {
        Interval::ln(self)
    }

    fn sqrt(self) -> Result<Self, DomainError> {
        Interval::sqrt(self)
    }
}
