use nalgebra::DMatrix;

use super::{
    Error,
    augmented::square_size,
    determinant::{cofactor_expansion, minor, sign},
};

/// Inverts a square matrix as its adjugate divided by its determinant.
///
/// Each cofactor is a full cofactor-expansion determinant, so the cost is
/// O(n² · (n - 1)!).
///
/// # Errors
///
/// Returns [`Error::SingularMatrix`] with no pivot if the determinant is
/// exactly zero, or
/// a shape error if `a` is not square and non-empty.
#[allow(clippy::float_cmp)]
pub fn inverse(a: &DMatrix<f64>) -> Result<DMatrix<f64>, Error> {
    let n = square_size(a)?;

    let det = cofactor_expansion(a);
    if det == 0.0 {
        return Err(Error::SingularMatrix { pivot: None });
    }

    let mut adjugate = DMatrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            adjugate[(j, i)] = sign(i + j) * cofactor_expansion(&minor(a, i, j));
        }
    }

    Ok(adjugate / det)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use nalgebra::dmatrix;

    #[test]
    fn mesh_matrix_inverse() {
        let a = dmatrix![
            4.0, -1.0, -1.0;
            -1.0, 3.0, -1.0;
            -1.0, -1.0, 5.0
        ];
        let expected = dmatrix![
            14.0, 6.0, 4.0;
            6.0, 19.0, 5.0;
            4.0, 5.0, 11.0
        ] / 46.0;

        let inv = inverse(&a).expect("non-singular");
        assert_relative_eq!(inv, expected, epsilon = 1e-12);
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let matrices = [
            dmatrix![2.0, 1.0; 7.0, 4.0],
            dmatrix![1.0, 2.0, 3.0; 0.0, 1.0, 4.0; 5.0, 6.0, 0.0],
            dmatrix![
                4.0, 1.0, 0.0, 2.0;
                1.0, 3.0, -1.0, 0.0;
                0.0, -1.0, 5.0, 1.0;
                2.0, 0.0, 1.0, 6.0
            ],
        ];

        for a in matrices {
            let n = a.nrows();
            let inv = inverse(&a).expect("non-singular");
            assert_relative_eq!(&inv * &a, DMatrix::identity(n, n), epsilon = 1e-12);
            assert_relative_eq!(&a * &inv, DMatrix::identity(n, n), epsilon = 1e-12);
        }
    }

    #[test]
    fn one_by_one_inverse_is_reciprocal() {
        let inv = inverse(&dmatrix![4.0]).expect("non-zero");
        assert_relative_eq!(inv[(0, 0)], 0.25);
    }

    #[test]
    fn singular_matrix_is_rejected() {
        let a = dmatrix![1.0, 2.0; 2.0, 4.0];
        let err = inverse(&a).expect_err("singular");
        assert!(matches!(err, Error::SingularMatrix { .. }));
        assert_eq!(err, Error::SingularMatrix { pivot: None });
    }

    #[test]
    fn rejects_bad_shapes() {
        assert_eq!(
            inverse(&DMatrix::zeros(3, 2)),
            Err(Error::NotSquare { rows: 3, cols: 2 })
        );
        assert_eq!(inverse(&DMatrix::zeros(0, 0)), Err(Error::Empty));
    }
}
