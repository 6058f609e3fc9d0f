//! Forward-mode automatic differentiation.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{DomainError, Scalar};

/// A value paired with its gradient with respect to `N` variables.
///
/// Evaluating a function over `Dual<Interval, N>` seeded with unit gradients
/// yields an enclosure of the function and of its Jacobian at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual<T, const N: usize> {
    pub value: T,
    pub grad: [T; N],
}

impl<T: Scalar, const N: usize> Dual<T, N> {
    /// Creates a constant with zero gradient.
    pub fn constant(value: T) -> Self {
        Self {
            value,
            grad: [T::constant(0.0); N],
        }
    }

    /// Creates the independent variable with the given index.
    ///
    /// Its gradient is the unit vector along `index`.
    pub fn variable(value: T, index: usize) -> Self {
        Self {
            value,
            grad: std::array::from_fn(|i| T::constant(if i == index { 1.0 } else { 0.0 })),
        }
    }

    /// Applies the chain rule for an elementwise function with derivative `slope`.
    fn chain(value: T, slope: T, grad: &[T; N]) -> Self {
        Self {
            value,
            grad: std::array::from_fn(|i| slope * grad[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Neg for Dual<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            value: -self.value,
            grad: self.grad.map(|g| -g),
        }
    }
}

impl<T: Scalar, const N: usize> Add for Dual<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            value: self.value + rhs.value,
            grad: std::array::from_fn(|i| self.grad[i] + rhs.grad[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Sub for Dual<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            value: self.value - rhs.value,
            grad: std::array::from_fn(|i| self.grad[i] - rhs.grad[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Mul for Dual<T, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            value: self.value * rhs.value,
            grad: std::array::from_fn(|i| self.value * rhs.grad[i] + rhs.value * self.grad[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Div for Dual<T, N> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let value = self.value / rhs.value;
        Self {
            value,
            grad: std::array::from_fn(|i| (self.grad[i] - value * rhs.grad[i]) / rhs.value),
        }
    }
}

impl<T: Scalar, const N: usize> Add<f64> for Dual<T, N> {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        Self {
            value: self.value + rhs,
            grad: self.grad,
        }
    }
}

impl<T: Scalar, const N: usize> Sub<f64> for Dual<T, N> {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        Self {
            value: self.value - rhs,
            grad: self.grad,
        }
    }
}

impl<T: Scalar, const N: usize> Mul<f64> for Dual<T, N> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            value: self.value * rhs,
            grad: self.grad.map(|g| g * rhs),
        }
    }
}

impl<T: Scalar, const N: usize> Div<f64> for Dual<T, N> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self {
            value: self.value / rhs,
            grad: self.grad.map(|g| g / rhs),
        }
    }
}

impl<T: Scalar, const N: usize> Scalar for Dual<T, N> {
    fn constant(value: f64) -> Self {
        Dual::constant(T::constant(value))
    }

    fn powi(self, n: i32) -> Self {
        if n == 0 {
            return <Self as Scalar>::constant(1.0);
        }
        let slope = self.value.powi(n - 1) * f64::from(n);
        Self::chain(self.value.powi(n), slope, &self.grad)
    }

    fn sqr(self) -> Self {
        Self::chain(self.value.sqr(), self.value * 2.0, &self.grad)
    }

    fn sin(self) -> Self {
        Self::chain(self.value.sin(), self.value.cos(), &self.grad)
    }

    fn cos(self) -> Self {
        Self::chain(self.value.cos(), -self.value.sin(), &self.grad)
    }

    fn exp(self) -> Self {
        let value = self.value.exp();
        Self::chain(value, value, &self.grad)
    }

    fn ln(self) -> Result<Self, DomainError> {
        let value = self.value.ln()?;
        let slope = T::constant(1.0) / self.value;
        Ok(Self::chain(value, slope, &self.grad))
    }

    fn sqrt(self) -> Result<Self, DomainError> {
        let value = self.value.sqrt()?;
        let slope = T::constant(0.5) / value;
        Ok(Self::chain(value, slope, &self.grad))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Interval;

    fn iv(lo: f64, hi: f64) -> Interval {
        Interval::new(lo, hi).expect("valid interval")
    }

    #[test]
    fn product_rule() {
        let x = Dual::<Interval, 2>::variable(Interval::point(3.0), 0);
        let y = Dual::<Interval, 2>::variable(Interval::point(5.0), 1);
        let f = x * y + x.sqr();

        assert!(f.value.contains(24.0));
        assert!(f.grad[0].contains(11.0));
        assert!(f.grad[1].contains(3.0));
    }

    #[test]
    fn quotient_rule() {
        let x = Dual::<Interval, 1>::variable(Interval::point(2.0), 0);
        let f = Dual::constant(Interval::point(1.0)) / x;

        assert!(f.value.contains(0.5));
        assert!(f.grad[0].contains(-0.25));
        assert!(f.grad[0].diam() < 1e-12);
    }

    #[test]
    fn chain_rule_over_intervals() {
        let x = Dual::<Interval, 1>::variable(iv(0.0, 1.0), 0);
        let f = x.sin() * 2.0;

        // d/dx 2 sin(x) = 2 cos(x), which lies in [2 cos 1, 2] on [0, 1].
        assert!(f.grad[0].contains(2.0));
        assert!(f.grad[0].contains(2.0 * 1.0_f64.cos()));
        assert!(!f.grad[0].contains_zero());
    }

    #[test]
    fn powi_slope() {
        let x = Dual::<Interval, 1>::variable(Interval::point(2.0), 0);
        let f = x.powi(3);
        assert!(f.value.contains(8.0));
        assert!(f.grad[0].contains(12.0));

        let c = x.powi(0);
        assert!(c.grad[0].contains_zero());
    }

    #[test]
    fn domain_errors_propagate() {
        let x = Dual::<Interval, 1>::variable(iv(-1.0, 1.0), 0);
        assert!(x.sqrt().is_err());
        assert!(x.ln().is_err());

        let y = Dual::<Interval, 1>::variable(iv(4.0, 4.0), 0);
        let root = y.sqrt().expect("positive");
        assert!(root.grad[0].contains(0.25));
    }
}
