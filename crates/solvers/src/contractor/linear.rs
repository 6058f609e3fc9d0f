use prune_core::{Interval, Matrix};

/// A real `N × N` matrix, stored by rows.
pub(super) type RealMatrix<const N: usize> = [[f64; N]; N];

/// Inverts the midpoint matrix of `m` by Gauss–Jordan elimination.
///
/// Returns `None` if the midpoint matrix is singular or has non-finite entries.
pub(super) fn midpoint_inverse<const N: usize>(m: &Matrix<N>) -> Option<RealMatrix<N>> {
    let mut a: RealMatrix<N> = m.map(|row| row.map(|x| x.mid()));
    if a.iter().flatten().any(|x| !x.is_finite()) {
        return None;
    }

    let mut inv: RealMatrix<N> =
        std::array::from_fn(|i| std::array::from_fn(|j| if i == j { 1.0 } else { 0.0 }));

    for col in 0..N {
        let pivot = (col..N).max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))?;
        #[allow(clippy::float_cmp)]
        if a[pivot][col] == 0.0 {
            return None;
        }
        a.swap(col, pivot);
        inv.swap(col, pivot);

        let p = a[col][col];
        for k in 0..N {
            a[col][k] /= p;
            inv[col][k] /= p;
        }

        let (pivot_row, pivot_inv) = (a[col], inv[col]);
        for row in 0..N {
            if row == col {
                continue;
            }
            let factor = a[row][col];
            for k in 0..N {
                a[row][k] -= factor * pivot_row[k];
                inv[row][k] -= factor * pivot_inv[k];
            }
        }
    }

    inv.iter().flatten().all(|x| x.is_finite()).then_some(inv)
}

/// Returns the interval product `y · m`.
pub(super) fn precondition<const N: usize>(y: &RealMatrix<N>, m: &Matrix<N>) -> Matrix<N> {
    std::array::from_fn(|i| {
        std::array::from_fn(|j| {
            (0..N).fold(Interval::point(0.0), |acc, k| acc + m[k][j] * y[i][k])
        })
    })
}

/// Returns the interval product `y · v`.
pub(super) fn mul_vec<const N: usize>(y: &RealMatrix<N>, v: &[Interval; N]) -> [Interval; N] {
    std::array::from_fn(|i| (0..N).fold(Interval::point(0.0), |acc, k| acc + v[k] * y[i][k]))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn point_matrix<const N: usize>(m: RealMatrix<N>) -> Matrix<N> {
        m.map(|row| row.map(Interval::point))
    }

    #[test]
    fn inverts_with_pivoting() {
        let m = point_matrix([[0.0, 2.0], [4.0, 1.0]]);
        let inv = midpoint_inverse(&m).expect("invertible");

        // [[0, 2], [4, 1]]⁻¹ = [[-1/8, 1/4], [1/2, 0]]
        assert_relative_eq!(inv[0][0], -0.125);
        assert_relative_eq!(inv[0][1], 0.25);
        assert_relative_eq!(inv[1][0], 0.5);
        assert_relative_eq!(inv[1][1], 0.0);
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let m = point_matrix([[1.0, 2.0], [2.0, 4.0]]);
        assert!(midpoint_inverse(&m).is_none());

        // The midpoint of an unbounded interval is zero.
        assert!(midpoint_inverse(&[[Interval::ENTIRE]]).is_none());
    }

    #[test]
    fn preconditioned_matrix_contains_identity() {
        let m = [
            [Interval::new(1.9, 2.1).unwrap(), Interval::point(1.0)],
            [Interval::point(0.0), Interval::new(2.9, 3.1).unwrap()],
        ];
        let y = midpoint_inverse(&m).expect("invertible");
        let a = precondition(&y, &m);

        assert!(a[0][0].contains(1.0));
        assert!(a[1][1].contains(1.0));
        assert!(a[1][0].contains(0.0));
        assert!(a[0][1].contains(0.0));
    }

    #[test]
    fn mul_vec_encloses_product() {
        let y = [[1.0, 2.0], [0.0, -1.0]];
        let v = [Interval::point(3.0), Interval::new(-1.0, 1.0).unwrap()];
        let w = mul_vec(&y, &v);

        assert!(w[0].contains(1.0) && w[0].contains(5.0));
        assert!(w[1].contains(-1.0) && w[1].contains(1.0));
    }
}
