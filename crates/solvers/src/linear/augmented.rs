use nalgebra::{DMatrix, DVector};

use super::Error;

/// The result of an elimination solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Elimination {
    /// Solution vector.
    pub x: DVector<f64>,

    /// Augmented matrix `[A | b]` before elimination and after each row operation.
    pub steps: Vec<DMatrix<f64>>,
}

/// Returns `n` for a non-empty `n x n` matrix.
pub(super) fn square_size(a: &DMatrix<f64>) -> Result<usize, Error> {
    let (rows, cols) = a.shape();
    if rows != cols {
        return Err(Error::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(Error::Empty);
    }
    Ok(rows)
}

/// Builds the `n x (n + 1)` augmented matrix `[A | b]`.
pub(super) fn augment(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DMatrix<f64>, Error> {
    let n = square_size(a)?;
    if b.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            found: b.len(),
        });
    }

    Ok(DMatrix::from_fn(
        n,
        n + 1,
        |i, j| if j < n { a[(i, j)] } else { b[i] },
    ))
}

/// Returns the pivot `ab[(i, i)]`, rejecting an exact zero.
#[allow(clippy::float_cmp)]
pub(super) fn pivot(ab: &DMatrix<f64>, i: usize) -> Result<f64, Error> {
    let pivot = ab[(i, i)];
    if pivot == 0.0 {
        return Err(Error::SingularMatrix { pivot: Some(i) });
    }
    Ok(pivot)
}

/// Subtracts `factor` times row `source` from row `target`.
pub(super) fn subtract_row(ab: &mut DMatrix<f64>, target: usize, source: usize, factor: f64) {
    let source_row = ab.row(source).clone_owned();
    let mut target_row = ab.row_mut(target);
    target_row -= source_row * factor;
}

/// Divides row `i` by `divisor`.
pub(super) fn divide_row(ab: &mut DMatrix<f64>, i: usize, divisor: f64) {
    let mut row = ab.row_mut(i);
    row /= divisor;
}

#[cfg(test)]
mod tests {
    use super::*;

    use nalgebra::dmatrix;

    #[test]
    fn augment_appends_constant_column() {
        let a = dmatrix![1.0, 2.0; 3.0, 4.0];
        let b = DVector::from_vec(vec![5.0, 6.0]);

        let ab = augment(&a, &b).expect("valid shapes");
        assert_eq!(ab, dmatrix![1.0, 2.0, 5.0; 3.0, 4.0, 6.0]);
    }

    #[test]
    fn augment_checks_shapes() {
        let rect = DMatrix::<f64>::zeros(2, 3);
        let b = DVector::zeros(2);
        assert_eq!(
            augment(&rect, &b),
            Err(Error::NotSquare { rows: 2, cols: 3 })
        );

        let a = DMatrix::<f64>::identity(3, 3);
        assert_eq!(
            augment(&a, &b),
            Err(Error::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );

        let empty = DMatrix::<f64>::zeros(0, 0);
        assert_eq!(augment(&empty, &DVector::zeros(0)), Err(Error::Empty));
    }

    #[test]
    fn row_operations() {
        let mut ab = dmatrix![2.0, 4.0, 6.0; 1.0, 3.0, 5.0];

        divide_row(&mut ab, 0, 2.0);
        assert_eq!(ab, dmatrix![1.0, 2.0, 3.0; 1.0, 3.0, 5.0]);

        subtract_row(&mut ab, 1, 0, 1.0);
        assert_eq!(ab, dmatrix![1.0, 2.0, 3.0; 0.0, 1.0, 2.0]);
    }

    #[test]
    fn zero_pivot_is_singular() {
        let ab = dmatrix![0.0, 1.0, 1.0; 1.0, 0.0, 1.0];
        assert_eq!(pivot(&ab, 0), Err(Error::SingularMatrix { pivot: Some(0) }));
        assert_eq!(pivot(&ab, 1), Err(Error::SingularMatrix { pivot: Some(1) }));
    }
}
