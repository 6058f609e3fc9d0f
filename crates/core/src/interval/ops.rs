use std::ops::{Add, Div, Mul, Neg, Sub};

use super::Interval;

/// Builds an interval from rounded-to-nearest bounds, widening each by one ulp.
fn outward(lo: f64, hi: f64) -> Interval {
    Interval::raw(lo.next_down(), hi.next_up())
}

/// Product of two bounds with the interval convention `0 * ∞ = 0`.
fn bound_mul(a: f64, b: f64) -> f64 {
    let p = a * b;
    if p.is_nan() { 0.0 } else { p }
}

impl Interval {
    /// Returns `1 / self`.
    ///
    /// Division by an interval containing zero yields [`Interval::ENTIRE`].
    #[must_use]
    pub fn recip(self) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        if self.contains_zero() {
            return Self::ENTIRE;
        }
        outward(1.0 / self.hi, 1.0 / self.lo)
    }
}

impl Neg for Interval {
    type Output = Self;

    fn neg(self) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        Self::raw(-self.hi, -self.lo)
    }
}

impl Add for Interval {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        if self.is_empty() || rhs.is_empty() {
            return Self::EMPTY;
        }
        outward(self.lo + rhs.lo, self.hi + rhs.hi)
    }
}

impl Sub for Interval {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        if self.is_empty() || rhs.is_empty() {
            return Self::EMPTY;
        }
        outward(self.lo - rhs.hi, self.hi - rhs.lo)
    }
}

impl Mul for Interval {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        if self.is_empty() || rhs.is_empty() {
            return Self::EMPTY;
        }
        let products = [
            bound_mul(self.lo, rhs.lo),
            bound_mul(self.lo, rhs.hi),
            bound_mul(self.hi, rhs.lo),
            bound_mul(self.hi, rhs.hi),
        ];
        let lo = products.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = products.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        outward(lo, hi)
    }
}

impl Div for Interval {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        if self.is_empty() || rhs.is_empty() {
            return Self::EMPTY;
        }
        self * rhs.recip()
    }
}

impl Add<f64> for Interval {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        self + Interval::point(rhs)
    }
}

impl Sub<f64> for Interval {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        self - Interval::point(rhs)
    }
}

impl Mul<f64> for Interval {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self * Interval::point(rhs)
    }
}

impl Div<f64> for Interval {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        self / Interval::point(rhs)
    }
}
