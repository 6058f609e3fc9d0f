//! Core traits and types for verified root finding.
//!
//! This crate defines the numeric layer that contractors and the
//! branch-and-prune engine build on:
//!
//! - [`Interval`] — a closed interval of `f64` with outward rounding
//! - [`IntervalBox`] — an axis-aligned box of `N` intervals
//! - [`Complex`] — a complex number over any [`Scalar`]
//! - [`Scalar`] — arithmetic and elementary functions shared by [`Interval`]
//!   and the forward-mode [`Dual`] numbers used for differentiation
//! - [`Function`], [`ComplexFunction`] — functions `Rⁿ → Rⁿ` and `C → C`
//!   written once and evaluated over any [`Scalar`]
//! - [`Jacobian`] — derivative providers, either [`AutoDiff`] or [`Explicit`]
//! - [`Observer`] — receives solver events and optionally returns control actions

mod complex;
mod derivative;
mod dual;
mod function;
mod interval;
mod interval_box;
mod observer;
mod scalar;

pub use complex::Complex;
pub use derivative::{AutoDiff, Explicit, Jacobian, Matrix, jacobian};
pub use dual::Dual;
pub use function::{ComplexFunction, Function, Planar, image};
pub use interval::{BISECTION_POINT, DomainError, Interval, IntervalError};
pub use interval_box::IntervalBox;
pub use observer::Observer;
pub use scalar::Scalar;
