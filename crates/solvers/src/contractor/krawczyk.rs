use prune_core::{AutoDiff, Function, Interval, IntervalBox, Jacobian};

use crate::{Root, RootStatus};

use super::{ContractError, Contractor, StepResult, excludes_zero, linear, tighten};

/// The Krawczyk contractor.
///
/// Each step evaluates `K(X) = m - Y·f(m) + (I - Y·J(X))·(X - m)`, where `m`
/// is the midpoint of `X` and `Y` is the inverse of the midpoint of `J(X)`.
/// Every root in `X` lies in `K(X) ∩ X`, and `K(X)` strictly inside `X`
/// proves that `X` contains exactly one root.
#[derive(Debug, Clone, Copy)]
pub struct Krawczyk<F, J = AutoDiff> {
    f: F,
    jacobian: J,
}

impl<F> Krawczyk<F> {
    /// Creates a Krawczyk contractor that differentiates `f` automatically.
    pub fn new(f: F) -> Self {
        Self::with_jacobian(f, AutoDiff)
    }
}

impl<F, J> Krawczyk<F, J> {
    /// Creates a Krawczyk contractor with a custom Jacobian.
    pub fn with_jacobian(f: F, jacobian: J) -> Self {
        Self { f, jacobian }
    }

    fn step<const N: usize>(&self, region: &IntervalBox<N>) -> StepResult<F, J, N>
    where
        F: Function<N>,
        J: Jacobian<F, N>,
    {
        let m = region.mid();
        let fm = self
            .f
            .eval(&m.map(Interval::point))
            .map_err(ContractError::Function)?;
        let jx = self
            .jacobian
            .jacobian(&self.f, region)
            .map_err(ContractError::Jacobian)?;

        let Some(y) = linear::midpoint_inverse(&jx) else {
            return Ok(Root::unknown(*region));
        };
        let yj = linear::precondition(&y, &jx);
        let yf = linear::mul_vec(&y, &fm);

        let k: [Interval; N] = std::array::from_fn(|i| {
            (0..N).fold(Interval::point(m[i]) - yf[i], |acc, j| {
                let identity = Interval::point(if i == j { 1.0 } else { 0.0 });
                acc + (identity - yj[i][j]) * (region[j] - m[j])
            })
        });
        let k = IntervalBox::new(k);

        let contracted = k.intersect(region);
        let status = if contracted.is_empty() {
            RootStatus::Empty
        } else if k.is_interior(region) {
            RootStatus::Unique
        } else {
            RootStatus::Unknown
        };
        Ok(Root::new(contracted, status))
    }
}

impl<F, J, const N: usize> Contractor<N> for Krawczyk<F, J>
where
    F: Function<N>,
    J: Jacobian<F, N>,
{
    type Error = ContractError<F::Error, J::Error>;

    fn contract(&self, root: &Root<N>, tol: f64) -> Result<Root<N>, Self::Error> {
        let region = root.region();
        if excludes_zero(&self.f, region).map_err(ContractError::Function)? {
            return Ok(Root::new(*region, RootStatus::Empty));
        }

        let contracted = self.step(region)?;
        if contracted.status() != RootStatus::Unique {
            return Ok(contracted);
        }
        tighten(*contracted.region(), tol, |region| self.step(region))
    }
}
