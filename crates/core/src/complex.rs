use std::ops::{Add, Mul, Neg, Sub};

use crate::{Interval, IntervalBox, Scalar};

/// A complex number `re + i·im` over any [`Scalar`].
///
/// `Complex<Interval>` is a rectangular region of the complex plane and
/// converts to and from [`IntervalBox<2>`] with the real part first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    /// Creates a complex number from its parts.
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl<T: Scalar> Complex<T> {
    /// Lifts a complex constant.
    pub fn constant(re: f64, im: f64) -> Self {
        Self::new(T::constant(re), T::constant(im))
    }

    /// Returns `selfⁿ` by repeated multiplication.
    #[must_use]
    pub fn powi(self, n: u32) -> Self {
        match n {
            0 => Self::constant(1.0, 0.0),
            1 => self,
            2 => self.sqr(),
            n => (1..n).fold(self, |acc, _| acc * self),
        }
    }

    /// Returns `self²` using `re² - im²`, which is tighter than `self * self`.
    #[must_use]
    pub fn sqr(self) -> Self {
        Self::new(self.re.sqr() - self.im.sqr(), self.re * self.im * 2.0)
    }
}

impl<T: Scalar> Add for Complex<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: Scalar> Sub for Complex<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<T: Scalar> Mul for Complex<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<T: Scalar> Neg for Complex<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl<T: Scalar> Add<f64> for Complex<T> {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        Self::new(self.re + rhs, self.im)
    }
}

impl<T: Scalar> Sub<f64> for Complex<T> {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        Self::new(self.re - rhs, self.im)
    }
}

impl<T: Scalar> Mul<f64> for Complex<T> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.re * rhs, self.im * rhs)
    }
}

impl From<Complex<Interval>> for IntervalBox<2> {
    fn from(z: Complex<Interval>) -> Self {
        IntervalBox::new([z.re, z.im])
    }
}

impl From<IntervalBox<2>> for Complex<Interval> {
    fn from(region: IntervalBox<2>) -> Self {
        Complex::new(region[0], region[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_of_i_is_minus_one() {
        let i = Complex::<Interval>::constant(0.0, 1.0);
        let z = i.sqr() + 1.0;
        assert!(z.re.contains_zero());
        assert!(z.im.contains_zero());

        let w = i * i;
        assert!(w.re.contains(-1.0));
    }

    #[test]
    fn powi_matches_repeated_product() {
        let z = Complex::<Interval>::constant(1.0, 1.0);
        let cube = z.powi(3);
        // (1 + i)³ = -2 + 2i
        assert!(cube.re.contains(-2.0));
        assert!(cube.im.contains(2.0));
        assert!(z.powi(0).re.contains(1.0));
    }

    #[test]
    fn converts_to_box() {
        let z = Complex::new(
            Interval::new(-1.0, 1.0).unwrap(),
            Interval::new(2.0, 3.0).unwrap(),
        );
        let region = IntervalBox::from(z);
        assert_eq!(region[1], z.im);
        assert_eq!(Complex::from(region), z);
    }
}
