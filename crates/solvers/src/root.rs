use std::fmt;

use prune_core::IntervalBox;

/// What is known about the roots inside a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootStatus {
    /// The region may contain any number of roots.
    Unknown,

    /// The region is proven to contain exactly one root.
    Unique,

    /// The region is proven to contain no root.
    Empty,
}

impl fmt::Display for RootStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Unique => "unique",
            Self::Empty => "empty",
        };
        f.write_str(name)
    }
}

/// A region labelled with what is known about the roots inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root<const N: usize> {
    region: IntervalBox<N>,
    status: RootStatus,
}

impl<const N: usize> Root<N> {
    /// Creates a root from a region and status.
    #[must_use]
    pub fn new(region: IntervalBox<N>, status: RootStatus) -> Self {
        Self { region, status }
    }

    /// Creates a root with [`RootStatus::Unknown`].
    #[must_use]
    pub fn unknown(region: IntervalBox<N>) -> Self {
        Self::new(region, RootStatus::Unknown)
    }

    /// Returns the region.
    #[must_use]
    pub fn region(&self) -> &IntervalBox<N> {
        &self.region
    }

    /// Returns the status.
    #[must_use]
    pub fn status(&self) -> RootStatus {
        self.status
    }

    /// Returns the diameter of the region.
    #[must_use]
    pub fn diam(&self) -> f64 {
        self.region.diam()
    }

    /// Splits the region along its widest axis into two unknown roots.
    #[must_use]
    pub fn bisect(&self) -> (Self, Self) {
        let (left, right) = self.region.bisect();
        (Self::unknown(left), Self::unknown(right))
    }
}

impl<const N: usize> fmt::Display for Root<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.region, f)?;
        write!(f, " ({})", self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use prune_core::Interval;

    #[test]
    fn bisect_resets_status_and_conserves_measure() {
        let region = IntervalBox::from_bounds([[0.0, 3.0], [-1.0, 1.0]]).unwrap();
        let root = Root::new(region, RootStatus::Unique);
        let (left, right) = root.bisect();

        assert_eq!(left.status(), RootStatus::Unknown);
        assert_eq!(right.status(), RootStatus::Unknown);
        assert_relative_eq!(
            left.region().volume() + right.region().volume(),
            region.volume()
        );
        assert_eq!(left.region().hull(right.region()), region);
        assert!(left.diam() <= root.diam());
        assert!(right.diam() <= root.diam());
    }

    #[test]
    fn display_shows_region_and_status() {
        let root = Root::unknown(IntervalBox::from(Interval::new(0.0, 0.5).unwrap()));
        assert_eq!(root.to_string(), "[0, 0.5] (unknown)");
    }
}
