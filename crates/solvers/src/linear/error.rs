use thiserror::Error;

/// Errors that can occur in the linear algebra kernels.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("constant vector has length {found}, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("matrix is empty")]
    Empty,

    /// A zero pivot was met in row `pivot`, or, when `pivot` is `None`, the
    /// determinant is exactly zero.
    #[error("singular matrix: {}", singular_detail(.pivot))]
    SingularMatrix { pivot: Option<usize> },
}

fn singular_detail(pivot: &Option<usize>) -> String {
    match pivot {
        Some(row) => format!("zero pivot in row {row}"),
        None => "determinant is zero".to_owned(),
    }
}
