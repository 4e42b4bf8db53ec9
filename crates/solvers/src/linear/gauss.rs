//! Gaussian elimination with back substitution.

use nalgebra::{DMatrix, DVector};

use super::{
    Elimination, Error,
    augmented::{augment, pivot, subtract_row},
};

/// Solves `A x = b` by forward elimination and back substitution.
///
/// Rows are never reordered. The returned [`Elimination::steps`] holds the
/// initial augmented matrix followed by one snapshot per row operation,
/// `1 + n(n - 1) / 2` in total.
///
/// # Errors
///
/// Returns [`Error::SingularMatrix`] when a pivot is exactly zero, or a
/// shape error if `a` is not square and non-empty or `b` has the wrong length.
pub fn solve(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<Elimination, Error> {
    let mut ab = augment(a, b)?;
    let n = ab.nrows();
    let mut steps = vec![ab.clone()];

    for i in 0..n {
        let pivot = pivot(&ab, i)?;
        for j in (i + 1)..n {
            let factor = ab[(j, i)] / pivot;
            subtract_row(&mut ab, j, i, factor);
            steps.push(ab.clone());
        }
    }

    let mut x = DVector::zeros(n);
    for i in (0..n).rev() {
        let known: f64 = ((i + 1)..n).map(|k| ab[(i, k)] * x[k]).sum();
        x[i] = (ab[(i, n)] - known) / ab[(i, i)];
    }

    Ok(Elimination { x, steps })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use nalgebra::{dmatrix, dvector};

    #[test]
    fn solves_mesh_system() {
        let a = dmatrix![
            4.0, -1.0, -1.0;
            -1.0, 3.0, -1.0;
            -1.0, -1.0, 5.0
        ];
        let b = dvector![5.0, 3.0, 4.0];

        let Elimination { x, steps } = solve(&a, &b).expect("non-singular");

        assert_relative_eq!(x[0], 52.0 / 23.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 107.0 / 46.0, epsilon = 1e-12);
        assert_relative_eq!(x[2], 79.0 / 46.0, epsilon = 1e-12);
        assert_eq!(steps.len(), 4);
    }

    #[test]
    fn ends_in_upper_triangular_form() {
        let a = dmatrix![2.0, 1.0, -1.0; -3.0, -1.0, 2.0; -2.0, 1.0, 2.0];
        let b = dvector![8.0, -11.0, -3.0];

        let Elimination { x, steps } = solve(&a, &b).expect("non-singular");
        assert_relative_eq!(x, dvector![2.0, 3.0, -1.0], epsilon = 1e-12);

        let last = steps.last().expect("at least the initial state");
        for i in 0..3 {
            for j in 0..i {
                assert_relative_eq!(last[(i, j)], 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn snapshots_are_independent_copies() {
        let a = dmatrix![2.0, 1.0; 4.0, 3.0];
        let b = dvector![3.0, 7.0];

        let Elimination { steps, .. } = solve(&a, &b).expect("non-singular");

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0], dmatrix![2.0, 1.0, 3.0; 4.0, 3.0, 7.0]);
        assert_eq!(steps[1], dmatrix![2.0, 1.0, 3.0; 0.0, 1.0, 1.0]);
    }

    #[test]
    fn snapshot_count_grows_with_lower_triangle() {
        for n in 1..=5 {
            let a = DMatrix::from_fn(n, n, |i, j| if i == j { 2.0 } else { 1.0 });
            let b = DVector::from_element(n, 1.0);
            let Elimination { steps, .. } = solve(&a, &b).expect("non-singular");
            assert_eq!(steps.len(), 1 + n * (n - 1) / 2);
        }
    }

    #[test]
    fn zero_pivot_is_not_reordered() {
        let a = dmatrix![0.0, 1.0; 1.0, 0.0];
        let b = dvector![1.0, 1.0];

        assert_eq!(solve(&a, &b), Err(Error::SingularMatrix { pivot: Some(0) }));
    }

    #[test]
    fn zero_pivot_after_elimination() {
        let a = dmatrix![1.0, 2.0; 2.0, 4.0];
        let b = dvector![1.0, 2.0];

        assert_eq!(solve(&a, &b), Err(Error::SingularMatrix { pivot: Some(1) }));
    }
}
