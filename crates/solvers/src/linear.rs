//! Dense linear algebra over small square systems.
//!
//! # Kernels
//!
//! - [`gauss`] — forward elimination and back substitution
//! - [`gauss_jordan`] — full reduction of the augmented matrix
//! - [`determinant`] — recursive cofactor expansion along the first row
//! - [`inverse`] — adjugate divided by the determinant
//!
//! Both elimination kernels work on the augmented matrix `[A | b]` and
//! record a copy of it after every row operation, starting with the initial
//! state. Neither reorders rows: a zero pivot is reported as
//! [`Error::SingularMatrix`] even when a row swap would have avoided it.
//! Pivot and determinant checks use exact comparison against zero.

mod augmented;
mod determinant;
mod error;
mod inverse;

pub mod gauss;
pub mod gauss_jordan;

pub use augmented::Elimination;
pub use determinant::determinant;
pub use error::Error;
pub use inverse::inverse;
