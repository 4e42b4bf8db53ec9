use nalgebra::DMatrix;

use super::{Error, augmented::square_size};

/// Computes the determinant by cofactor expansion along the first row.
///
/// # Complexity
///
/// The expansion recurses into `n` minors of size `n - 1`, so the cost is
/// O(n!). It is meant for the 3x3 and 4x4 systems found in small circuit
/// problems. Integer-valued matrices of that size give exact results.
///
/// # Errors
///
/// Returns [`Error::NotSquare`] or [`Error::Empty`] for an unusable shape.
pub fn determinant(a: &DMatrix<f64>) -> Result<f64, Error> {
    square_size(a)?;
    Ok(cofactor_expansion(a))
}

/// Expands along row 0. The empty matrix has determinant 1.
pub(super) fn cofactor_expansion(a: &DMatrix<f64>) -> f64 {
    match a.nrows() {
        0 => 1.0,
        1 => a[(0, 0)],
        2 => a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)],
        n => (0..n)
            .map(|j| sign(j) * a[(0, j)] * cofactor_expansion(&minor(a, 0, j)))
            .sum(),
    }
}

/// Returns `a` without row `i` and column `j`.
pub(super) fn minor(a: &DMatrix<f64>, i: usize, j: usize) -> DMatrix<f64> {
    a.clone().remove_row(i).remove_column(j)
}

/// Returns `(-1)^k`.
pub(super) fn sign(k: usize) -> f64 {
    if k % 2 == 0 { 1.0 } else { -1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use nalgebra::dmatrix;

    #[test]
    fn mesh_matrix() {
        let a = dmatrix![
            4.0, -1.0, -1.0;
            -1.0, 3.0, -1.0;
            -1.0, -1.0, 5.0
        ];
        assert_eq!(determinant(&a), Ok(46.0));
    }

    #[test]
    fn identity_has_unit_determinant() {
        for n in 1..=6 {
            assert_eq!(determinant(&DMatrix::identity(n, n)), Ok(1.0));
        }
    }

    #[test]
    fn zero_row_gives_zero() {
        let a = dmatrix![
            1.0, 2.0, 3.0, 4.0;
            0.0, 0.0, 0.0, 0.0;
            5.0, 6.0, 7.0, 8.0;
            2.0, 1.0, 0.0, 3.0
        ];
        assert_eq!(determinant(&a), Ok(0.0));
    }

    #[test]
    fn base_cases() {
        assert_eq!(determinant(&dmatrix![-3.5]), Ok(-3.5));
        assert_eq!(determinant(&dmatrix![1.0, 2.0; 3.0, 4.0]), Ok(-2.0));
    }

    #[test]
    fn matches_lu_for_four_by_four() {
        let a = dmatrix![
            2.0, -1.0, 0.5, 3.0;
            1.0, 4.0, -2.0, 0.0;
            0.0, 1.5, 3.0, -1.0;
            -2.0, 0.0, 1.0, 5.0
        ];
        assert_relative_eq!(
            determinant(&a).expect("square"),
            a.clone().determinant(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn rejects_bad_shapes() {
        assert_eq!(
            determinant(&DMatrix::zeros(2, 3)),
            Err(Error::NotSquare { rows: 2, cols: 3 })
        );
        assert_eq!(determinant(&DMatrix::zeros(0, 0)), Err(Error::Empty));
    }

    #[test]
    fn minor_removes_row_and_column() {
        let a = dmatrix![1.0, 2.0, 3.0; 4.0, 5.0, 6.0; 7.0, 8.0, 9.0];
        assert_eq!(minor(&a, 1, 0), dmatrix![2.0, 3.0; 8.0, 9.0]);
        assert_eq!(minor(&a, 2, 2), dmatrix![1.0, 2.0; 4.0, 5.0]);
    }
}
