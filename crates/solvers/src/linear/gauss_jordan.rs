//! Gauss-Jordan reduction to `[I | x]`.

use nalgebra::{DMatrix, DVector};

use super::{
    Elimination, Error,
    augmented::{augment, divide_row, pivot, subtract_row},
};

/// Solves `A x = b` by reducing the augmented matrix until the coefficient
/// block is the identity.
///
/// Rows are never reordered. Each pivot row is normalized and then every
/// other row is cleared in its pivot column, with a snapshot after each of
/// those row operations. Together with the initial state that gives
/// `n + n(n - 1) + 1` snapshots.
///
/// # Errors
///
/// Returns [`Error::SingularMatrix`] when a pivot is exactly zero, or a
/// shape error if `a` is not square and non-empty or `b` has the wrong length.
pub fn solve(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<Elimination, Error> {
    let mut ab = augment(a, b)?;
    let n = ab.nrows();
    let mut steps = Vec::with_capacity(n * n + 1);
    steps.push(ab.clone());

    for i in 0..n {
        let pivot = pivot(&ab, i)?;
        divide_row(&mut ab, i, pivot);
        steps.push(ab.clone());

        for j in (0..n).filter(|&j| j != i) {
            let factor = ab[(j, i)];
            subtract_row(&mut ab, j, i, factor);
            steps.push(ab.clone());
        }
    }

    let x = ab.column(n).into_owned();
    Ok(Elimination { x, steps })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use nalgebra::{dmatrix, dvector};

    use crate::linear::gauss;

    #[test]
    fn solves_mesh_system() {
        let a = dmatrix![
            4.0, -1.0, -1.0;
            -1.0, 3.0, -1.0;
            -1.0, -1.0, 5.0
        ];
        let b = dvector![5.0, 3.0, 4.0];

        let Elimination { x, steps } = solve(&a, &b).expect("non-singular");

        assert_relative_eq!(x, dvector![52.0 / 23.0, 107.0 / 46.0, 79.0 / 46.0], epsilon = 1e-12);
        assert_eq!(steps.len(), 3 + 3 * 2 + 1);
    }

    #[test]
    fn final_snapshot_is_reduced() {
        let a = dmatrix![2.0, 1.0, -1.0; -3.0, -1.0, 2.0; -2.0, 1.0, 2.0];
        let b = dvector![8.0, -11.0, -3.0];

        let Elimination { x, steps } = solve(&a, &b).expect("non-singular");
        let last = steps.last().expect("at least the initial state");

        assert_relative_eq!(
            last.columns(0, 3).into_owned(),
            DMatrix::identity(3, 3),
            epsilon = 1e-12
        );
        assert_eq!(last.column(3).into_owned(), x);
    }

    #[test]
    fn agrees_with_gaussian_elimination() {
        let systems = [
            (dmatrix![3.0, 2.0; 1.0, 2.0], dvector![5.0, 5.0]),
            (
                dmatrix![1.0, 1.0, 1.0; 0.0, 2.0, 5.0; 2.0, 5.0, -1.0],
                dvector![6.0, -4.0, 27.0],
            ),
            (
                dmatrix![
                    10.0, -1.0, 2.0, 0.0;
                    -1.0, 11.0, -1.0, 3.0;
                    2.0, -1.0, 10.0, -1.0;
                    0.0, 3.0, -1.0, 8.0
                ],
                dvector![6.0, 25.0, -11.0, 15.0],
            ),
        ];

        for (a, b) in systems {
            let reduced = solve(&a, &b).expect("non-singular");
            let eliminated = gauss::solve(&a, &b).expect("non-singular");
            assert_relative_eq!(reduced.x, eliminated.x, epsilon = 1e-10);
            assert_relative_eq!(&a * &reduced.x, b, epsilon = 1e-10);
        }
    }

    #[test]
    fn records_zero_factor_eliminations() {
        let a = DMatrix::<f64>::identity(2, 2);
        let b = dvector![1.0, 2.0];

        let Elimination { steps, .. } = solve(&a, &b).expect("non-singular");

        assert_eq!(steps.len(), 2 + 2 + 1);
        assert!(steps.iter().all(|step| step == &steps[0]));
    }

    #[test]
    fn zero_pivot_is_not_reordered() {
        let a = dmatrix![0.0, 1.0; 1.0, 0.0];
        let b = dvector![1.0, 1.0];

        assert_eq!(solve(&a, &b), Err(Error::SingularMatrix { pivot: Some(0) }));
    }

    #[test]
    fn rejects_mismatched_constants() {
        let a = DMatrix::<f64>::identity(2, 2);
        let b = dvector![1.0, 2.0, 3.0];

        assert_eq!(
            solve(&a, &b),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }
}
