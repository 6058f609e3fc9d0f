use std::{fmt, ops::Index};

use crate::{Interval, IntervalError};

/// An axis-aligned box `X₁ × … × X_N` of intervals.
///
/// Boxes are immutable values: every operation returns a new box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalBox<const N: usize>([Interval; N]);

impl<const N: usize> IntervalBox<N> {
    /// Creates a box from its components.
    #[must_use]
    pub fn new(components: [Interval; N]) -> Self {
        Self(components)
    }

    /// Creates a box from `[lo, hi]` bounds per component.
    ///
    /// # Errors
    ///
    /// Returns an error if any component has a NaN or inverted bound.
    pub fn from_bounds(bounds: [[f64; 2]; N]) -> Result<Self, IntervalError> {
        let mut components = [Interval::EMPTY; N];
        for (component, [lo, hi]) in components.iter_mut().zip(bounds) {
            *component = Interval::new(lo, hi)?;
        }
        Ok(Self(components))
    }

    /// Returns the components.
    #[must_use]
    pub fn components(&self) -> &[Interval; N] {
        &self.0
    }

    /// Returns true if any component is empty.
    ///
    /// A box produced by a contraction can have empty components (or NaN
    /// bounds) even when no emptiness proof exists; such boxes are degenerate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().any(Interval::is_empty)
    }

    /// Returns true if every component has finite bounds.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(Interval::is_finite)
    }

    /// Returns true if every component contains zero.
    #[must_use]
    pub fn contains_zero(&self) -> bool {
        self.0.iter().all(Interval::contains_zero)
    }

    /// Returns true if the point lies in the box.
    #[must_use]
    pub fn contains(&self, point: &[f64; N]) -> bool {
        self.0.iter().zip(point).all(|(x, &p)| x.contains(p))
    }

    /// Returns the largest component width.
    ///
    /// Empty components have NaN width, which this maximum ignores.
    #[must_use]
    pub fn diam(&self) -> f64 {
        self.0.iter().map(Interval::diam).fold(0.0, f64::max)
    }

    /// Returns the product of component widths.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.0.iter().map(Interval::diam).product()
    }

    /// Returns the midpoint of each component.
    #[must_use]
    pub fn mid(&self) -> [f64; N] {
        self.0.map(|x| x.mid())
    }

    /// Returns the componentwise intersection.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i].intersect(&other.0[i])))
    }

    /// Returns the componentwise hull.
    #[must_use]
    pub fn hull(&self, other: &Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i].hull(&other.0[i])))
    }

    /// Returns true if `self` is contained in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a.is_subset(b))
    }

    /// Returns true if every component of `self` lies strictly inside `other`.
    #[must_use]
    pub fn is_interior(&self, other: &Self) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a.is_interior(b))
    }

    /// Returns the index of the widest component, preferring the lowest index on ties.
    #[must_use]
    pub fn widest(&self) -> usize {
        let mut widest = 0;
        for (i, x) in self.0.iter().enumerate() {
            if x.diam() > self.0[widest].diam() {
                widest = i;
            }
        }
        widest
    }

    /// Splits the widest component at [`BISECTION_POINT`](crate::BISECTION_POINT).
    ///
    /// The two halves cover `self`, share only their boundary face, and equal
    /// `self` along every other axis.
    #[must_use]
    pub fn bisect(&self) -> (Self, Self) {
        let axis = self.widest();
        let (lower, upper) = self.0[axis].bisect();

        let mut left = self.0;
        let mut right = self.0;
        left[axis] = lower;
        right[axis] = upper;
        (Self(left), Self(right))
    }
}

impl<const N: usize> Index<usize> for IntervalBox<N> {
    type Output = Interval;

    fn index(&self, index: usize) -> &Interval {
        &self.0[index]
    }
}

impl<const N: usize> From<[Interval; N]> for IntervalBox<N> {
    fn from(components: [Interval; N]) -> Self {
        Self(components)
    }
}

impl From<Interval> for IntervalBox<1> {
    fn from(x: Interval) -> Self {
        Self([x])
    }
}

impl<const N: usize> fmt::Display for IntervalBox<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " × ")?;
            }
            fmt::Display::fmt(x, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn square(lo: f64, hi: f64) -> IntervalBox<2> {
        IntervalBox::from_bounds([[lo, hi], [lo, hi]]).expect("valid box")
    }

    #[test]
    fn from_bounds_validates() {
        assert!(IntervalBox::from_bounds([[0.0, 1.0], [2.0, 1.0]]).is_err());
        assert!(IntervalBox::from_bounds([[0.0, 1.0], [1.0, 2.0]]).is_ok());
    }

    #[test]
    fn bisect_splits_widest_axis() {
        let region = IntervalBox::from_bounds([[0.0, 1.0], [0.0, 4.0]]).unwrap();
        let (left, right) = region.bisect();

        assert_eq!(left[0], region[0]);
        assert_eq!(right[0], region[0]);
        assert_eq!(left[1].hi(), right[1].lo());
        assert_relative_eq!(left.volume() + right.volume(), region.volume());
        assert!(left.diam() <= region.diam());
        assert!(right.diam() <= region.diam());
    }

    #[test]
    fn bisect_prefers_first_axis_on_ties() {
        let (left, _) = square(0.0, 1.0).bisect();
        assert!(left[0].diam() < 1.0);
        assert_relative_eq!(left[1].diam(), 1.0);
    }

    #[test]
    fn interior_requires_every_component() {
        let outer = square(0.0, 1.0);
        assert!(square(0.25, 0.75).is_interior(&outer));

        let touching = IntervalBox::from_bounds([[0.25, 0.75], [0.0, 0.5]]).unwrap();
        assert!(!touching.is_interior(&outer));
        assert!(touching.is_subset(&outer));
    }

    #[test]
    fn empty_component_makes_box_empty() {
        let region = square(0.0, 1.0);
        let disjoint = IntervalBox::from_bounds([[0.0, 1.0], [2.0, 3.0]]).unwrap();
        assert!(region.intersect(&disjoint).is_empty());
        assert!(!region.is_empty());
    }

    #[test]
    fn contains_zero_needs_all_components() {
        assert!(square(-1.0, 1.0).contains_zero());
        let shifted = IntervalBox::from_bounds([[-1.0, 1.0], [0.5, 1.0]]).unwrap();
        assert!(!shifted.contains_zero());
    }

    #[test]
    fn display_joins_components() {
        let region = IntervalBox::from_bounds([[0.0, 1.0], [2.0, 3.0]]).unwrap();
        assert_eq!(region.to_string(), "[0, 1] × [2, 3]");
        assert_eq!(format!("{region:.1}"), "[0.0, 1.0] × [2.0, 3.0]");
    }
}
