//! Closed intervals of `f64` with outward rounding.
//!
//! Every arithmetic result is widened by one ulp on each side, and elementary
//! functions by a few ulps, so the result always encloses the exact image of
//! the operands. The empty interval is represented canonically by
//! [`Interval::EMPTY`], but any interval with `lo > hi` or a NaN bound is
//! treated as empty.

mod elementary;
mod ops;

use std::fmt;

use thiserror::Error;

pub use elementary::DomainError;

/// Relative position of the split point used by [`Interval::bisect`].
///
/// The point sits slightly left of the midpoint so that repeated bisection of
/// symmetric regions does not place a split exactly on a root such as zero.
pub const BISECTION_POINT: f64 = 0.496_093_75;

/// Errors that can occur when constructing an [`Interval`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IntervalError {
    #[error("interval bound is NaN")]
    NotANumber,

    #[error("lower bound exceeds upper bound")]
    Inverted,
}

/// A closed interval `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    /// The empty interval.
    pub const EMPTY: Self = Self {
        lo: f64::INFINITY,
        hi: f64::NEG_INFINITY,
    };

    /// The whole real line.
    pub const ENTIRE: Self = Self {
        lo: f64::NEG_INFINITY,
        hi: f64::INFINITY,
    };

    /// Creates an interval from its bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is NaN or `lo > hi`.
    pub fn new(lo: f64, hi: f64) -> Result<Self, IntervalError> {
        if lo.is_nan() || hi.is_nan() {
            return Err(IntervalError::NotANumber);
        }
        if lo > hi {
            return Err(IntervalError::Inverted);
        }
        Ok(Self { lo, hi })
    }

    /// Creates the degenerate interval `[x, x]`.
    ///
    /// A NaN argument produces an empty interval.
    #[must_use]
    pub fn point(x: f64) -> Self {
        if x.is_nan() {
            Self::EMPTY
        } else {
            Self { lo: x, hi: x }
        }
    }

    /// Creates an interval without validation, mapping invalid bounds to empty.
    pub(crate) fn raw(lo: f64, hi: f64) -> Self {
        if lo <= hi {
            Self { lo, hi }
        } else {
            Self::EMPTY
        }
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Returns true if the interval contains no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        // Written this way so NaN bounds count as empty.
        #[allow(clippy::neg_cmp_op_on_partial_ord)]
        let empty = !(self.lo <= self.hi);
        empty
    }

    /// Returns true if both bounds are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.lo.is_finite() && self.hi.is_finite()
    }

    /// Returns true if `x` lies in the interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }

    /// Returns true if zero lies in the interval.
    #[must_use]
    pub fn contains_zero(&self) -> bool {
        self.contains(0.0)
    }

    /// Returns the width `hi - lo`.
    ///
    /// The width of an empty interval is NaN.
    #[must_use]
    pub fn diam(&self) -> f64 {
        if self.is_empty() {
            return f64::NAN;
        }
        self.hi - self.lo
    }

    /// Returns a finite point inside the interval, near its centre.
    ///
    /// Half-unbounded intervals return the finite bound's extreme neighbour,
    /// the entire line returns zero, and the empty interval returns NaN.
    #[must_use]
    pub fn mid(&self) -> f64 {
        if self.is_empty() {
            return f64::NAN;
        }
        match (self.lo.is_finite(), self.hi.is_finite()) {
            (true, true) => {
                let mid = 0.5 * self.lo + 0.5 * self.hi;
                mid.clamp(self.lo, self.hi)
            }
            (false, false) => 0.0,
            (true, false) => f64::MAX.max(self.lo),
            (false, true) => f64::MIN.min(self.hi),
        }
    }

    /// Returns the largest absolute value in the interval.
    #[must_use]
    pub fn mag(&self) -> f64 {
        self.lo.abs().max(self.hi.abs())
    }

    /// Returns the smallest absolute value in the interval.
    #[must_use]
    pub fn mig(&self) -> f64 {
        if self.contains_zero() {
            0.0
        } else {
            self.lo.abs().min(self.hi.abs())
        }
    }

    /// Returns the intersection of two intervals.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        Self::raw(self.lo.max(other.lo), self.hi.min(other.hi))
    }

    /// Returns the smallest interval containing both intervals.
    #[must_use]
    pub fn hull(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Self::raw(self.lo.min(other.lo), self.hi.max(other.hi))
    }

    /// Returns true if every point of `self` lies in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.is_empty() || (other.lo <= self.lo && self.hi <= other.hi)
    }

    /// Returns true if `self` lies strictly inside `other`.
    #[must_use]
    pub fn is_interior(&self, other: &Self) -> bool {
        self.is_empty() || (other.lo < self.lo && self.hi < other.hi)
    }

    /// Splits the interval at `lo + fraction * (hi - lo)`.
    ///
    /// The halves share the split point and their union is `self`. The split
    /// is computed as a weighted sum of the bounds so that `hi - lo` never
    /// overflows for wide finite intervals.
    #[must_use]
    pub fn bisect_at(&self, fraction: f64) -> (Self, Self) {
        let split = (self.lo * (1.0 - fraction) + self.hi * fraction).clamp(self.lo, self.hi);
        (Self::raw(self.lo, split), Self::raw(split, self.hi))
    }

    /// Splits the interval at [`BISECTION_POINT`].
    #[must_use]
    pub fn bisect(&self) -> (Self, Self) {
        self.bisect_at(BISECTION_POINT)
    }
}

impl From<f64> for Interval {
    fn from(x: f64) -> Self {
        Self::point(x)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "∅");
        }
        match f.precision() {
            Some(p) => write!(f, "[{:.p$}, {:.p$}]", self.lo, self.hi),
            None => write!(f, "[{}, {}]", self.lo, self.hi),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn new_rejects_invalid_bounds() {
        assert_eq!(Interval::new(f64::NAN, 1.0), Err(IntervalError::NotANumber));
        assert_eq!(Interval::new(2.0, 1.0), Err(IntervalError::Inverted));
        assert!(Interval::new(1.0, 1.0).is_ok());
    }

    #[test]
    fn empty_covers_nan_and_inverted_bounds() {
        assert!(Interval::EMPTY.is_empty());
        assert!(Interval { lo: f64::NAN, hi: 1.0 }.is_empty());
        assert!(Interval { lo: 2.0, hi: 1.0 }.is_empty());
        assert!(Interval::point(f64::NAN).is_empty());
        assert!(!Interval::point(0.0).is_empty());
    }

    #[test]
    fn diam_and_mid() {
        let x = Interval::new(-1.0, 3.0).unwrap();
        assert_relative_eq!(x.diam(), 4.0, epsilon = 1e-14);
        assert_relative_eq!(x.mid(), 1.0);
        assert!(Interval::EMPTY.diam().is_nan());
        assert_relative_eq!(Interval::ENTIRE.mid(), 0.0);
    }

    #[test]
    fn intersect_and_hull() {
        let a = Interval::new(0.0, 2.0).unwrap();
        let b = Interval::new(1.0, 3.0).unwrap();
        let c = Interval::new(5.0, 6.0).unwrap();

        assert_eq!(a.intersect(&b), Interval::new(1.0, 2.0).unwrap());
        assert!(a.intersect(&c).is_empty());
        assert_eq!(a.hull(&c), Interval::new(0.0, 6.0).unwrap());
        assert_eq!(Interval::EMPTY.hull(&a), a);
    }

    #[test]
    fn interior_is_strict() {
        let outer = Interval::new(0.0, 1.0).unwrap();
        assert!(Interval::new(0.25, 0.75).unwrap().is_interior(&outer));
        assert!(!Interval::new(0.0, 0.75).unwrap().is_interior(&outer));
        assert!(Interval::new(0.0, 0.75).unwrap().is_subset(&outer));
    }

    #[test]
    fn bisect_covers_parent() {
        let x = Interval::new(-10.0, 10.0).unwrap();
        let (left, right) = x.bisect();

        assert_relative_eq!(left.lo(), -10.0);
        assert_relative_eq!(right.hi(), 10.0);
        assert_eq!(left.hi(), right.lo());
        assert_relative_eq!(left.hi(), -10.0 + 20.0 * BISECTION_POINT);
        assert!(left.diam() <= x.diam());
        assert!(right.diam() <= x.diam());
    }

    #[test]
    fn bisect_splits_widest_finite_interval() {
        let x = Interval::new(-f64::MAX, f64::MAX).unwrap();
        let (left, right) = x.bisect();

        assert_eq!(left.lo(), -f64::MAX);
        assert_eq!(right.hi(), f64::MAX);
        assert_eq!(left.hi(), right.lo());
        assert!(left.hi().is_finite());
        assert!(left.hi() < 0.0);
        assert!(left.diam().is_finite());

        // The right half is still too wide for a finite diameter, but splitting
        // it again gives finite halves.
        assert!(right.lo() > -f64::MAX);
        let (inner_left, inner_right) = right.bisect();
        assert!(inner_left.diam().is_finite());
        assert!(inner_right.diam().is_finite());
    }

    #[test]
    fn display_respects_precision() {
        let x = Interval::new(0.5, 1.26).unwrap();
        assert_eq!(x.to_string(), "[0.5, 1.26]");
        assert_eq!(format!("{x:.1}"), "[0.5, 1.3]");
        assert_eq!(Interval::EMPTY.to_string(), "∅");
    }
}
