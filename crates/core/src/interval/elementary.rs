use std::f64::consts::{FRAC_PI_2, PI, TAU};

use thiserror::Error;

use super::Interval;

/// The range of `sin` and `cos`.
const UNIT: Interval = Interval { lo: -1.0, hi: 1.0 };

/// Widening applied to results of library functions that are not correctly rounded.
const LIBM_ULPS: usize = 2;

/// A function was evaluated on an interval not contained in its domain.
///
/// Evaluation over a partially invalid interval is rejected rather than
/// clipped, because clipping would silently drop part of the region.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("{function} is undefined on part of {interval}")]
pub struct DomainError {
    /// Name of the function that was evaluated.
    pub function: &'static str,
    /// The offending argument.
    pub interval: Interval,
}

fn widen(lo: f64, hi: f64, ulps: usize) -> Interval {
    let (mut lo, mut hi) = (lo, hi);
    for _ in 0..ulps {
        lo = lo.next_down();
        hi = hi.next_up();
    }
    Interval::raw(lo, hi)
}

/// Returns true if `x` may contain a point `phase + 2kπ` for some integer `k`.
///
/// The test is padded, so it may report a critical point that lies just
/// outside `x`. That only widens the enclosure.
fn has_critical_point(x: Interval, phase: f64) -> bool {
    let slack = 4.0 * f64::EPSILON * x.mag().max(1.0);
    let lo = x.lo - slack;
    let hi = x.hi + slack;
    let k = ((lo - phase) / TAU).ceil();
    phase + k * TAU <= hi
}

/// Encloses `bound^n` by repeated interval multiplication.
fn bound_pow(bound: f64, n: u32) -> Interval {
    let base = Interval::point(bound);
    (0..n).fold(Interval::point(1.0), |acc, _| acc * base)
}

impl Interval {
    /// Returns `self²`, which is tighter than `self * self` when `self` spans zero.
    #[must_use]
    pub fn sqr(self) -> Self {
        self.powi(2)
    }

    /// Returns `selfⁿ`.
    ///
    /// Negative powers of an interval containing zero yield [`Interval::ENTIRE`].
    #[must_use]
    pub fn powi(self, n: i32) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        if n < 0 {
            return self.pow_unsigned(n.unsigned_abs()).recip();
        }
        self.pow_unsigned(n.unsigned_abs())
    }

    fn pow_unsigned(self, n: u32) -> Self {
        match n {
            0 => Self::point(1.0),
            1 => self,
            n if n % 2 == 0 => {
                let lo = bound_pow(self.mig(), n).lo.max(0.0);
                let hi = bound_pow(self.mag(), n).hi;
                Self::raw(lo, hi)
            }
            n => Self::raw(bound_pow(self.lo, n).lo, bound_pow(self.hi, n).hi),
        }
    }

    /// Returns an enclosure of `sin(self)`.
    #[must_use]
    pub fn sin(self) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        if !self.is_finite() || self.diam() >= TAU {
            return UNIT;
        }

        let (a, b) = (self.lo.sin(), self.hi.sin());
        let mut lo = a.min(b);
        let mut hi = a.max(b);
        if has_critical_point(self, FRAC_PI_2) {
            hi = 1.0;
        }
        if has_critical_point(self, -FRAC_PI_2) {
            lo = -1.0;
        }
        widen(lo, hi, LIBM_ULPS).intersect(&UNIT)
    }

    /// Returns an enclosure of `cos(self)`.
    #[must_use]
    pub fn cos(self) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        if !self.is_finite() || self.diam() >= TAU {
            return UNIT;
        }

        let (a, b) = (self.lo.cos(), self.hi.cos());
        let mut lo = a.min(b);
        let mut hi = a.max(b);
        if has_critical_point(self, 0.0) {
            hi = 1.0;
        }
        if has_critical_point(self, PI) {
            lo = -1.0;
        }
        widen(lo, hi, LIBM_ULPS).intersect(&UNIT)
    }

    /// Returns an enclosure of `exp(self)`.
    #[must_use]
    pub fn exp(self) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        let enclosure = widen(self.lo.exp(), self.hi.exp(), LIBM_ULPS);
        Self::raw(enclosure.lo.max(0.0), enclosure.hi)
    }

    /// Returns an enclosure of `ln(self)`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] unless the interval is strictly positive.
    pub fn ln(self) -> Result<Self, DomainError> {
        if self.is_empty() {
            return Ok(Self::EMPTY);
        }
        if self.lo <= 0.0 {
            return Err(DomainError {
                function: "ln",
                interval: self,
            });
        }
        Ok(widen(self.lo.ln(), self.hi.ln(), LIBM_ULPS))
    }

    /// Returns an enclosure of `sqrt(self)`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] unless the interval is non-negative.
    pub fn sqrt(self) -> Result<Self, DomainError> {
        if self.is_empty() {
            return Ok(Self::EMPTY);
        }
        if self.lo < 0.0 {
            return Err(DomainError {
                function: "sqrt",
                interval: self,
            });
        }
        let enclosure = widen(self.lo.sqrt(), self.hi.sqrt(), 1);
        Ok(Self::raw(enclosure.lo.max(0.0), enclosure.hi))
    }
}
