use prune_core::{AutoDiff, Function, Interval, IntervalBox, Jacobian};

use crate::{Root, RootStatus};

use super::{ContractError, Contractor, StepResult, excludes_zero, linear, tighten};

/// The preconditioned interval Newton contractor.
///
/// Each step solves `Y·J(X)·(x - m) = -Y·f(m)` for `x ∈ X` by one interval
/// Gauss–Seidel sweep, where `m` is the midpoint of `X` and `Y` is the inverse
/// of the midpoint of `J(X)`.
///
/// A component whose preconditioned diagonal contains zero is left unchanged,
/// and the region can then no longer be proven unique. If every updated
/// component lands strictly inside the input region, the region contains
/// exactly one root.
#[derive(Debug, Clone, Copy)]
pub struct Newton<F, J = AutoDiff> {
    f: F,
    jacobian: J,
}

impl<F> Newton<F> {
    /// Creates a Newton contractor that differentiates `f` automatically.
    pub fn new(f: F) -> Self {
        Self::with_jacobian(f, AutoDiff)
    }
}

impl<F, J> Newton<F, J> {
    /// Creates a Newton contractor with a custom Jacobian.
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
        let a = linear::precondition(&y, &jx);
        let b = linear::mul_vec(&y, &fm);

        let mut x = *region.components();
        let mut interior = true;
        for i in 0..N {
            if a[i][i].contains_zero() {
                interior = false;
                continue;
            }

            let mut sum = b[i];
            for j in (0..N).filter(|&j| j != i) {
                sum = sum + a[i][j] * (x[j] - m[j]);
            }
            let candidate = Interval::point(m[i]) - sum / a[i][i];

            interior &= candidate.is_interior(&region[i]);
            x[i] = candidate.intersect(&x[i]);
            if x[i].is_empty() {
                return Ok(Root::new(IntervalBox::new(x), RootStatus::Empty));
            }
        }

        let status = if interior {
            RootStatus::Unique
        } else {
            RootStatus::Unknown
        };
        Ok(Root::new(IntervalBox::new(x), status))
    }
}

impl<F, J, const N: usize> Contractor<N> for Newton<F, J>
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
