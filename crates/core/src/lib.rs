//! Core traits and types for numkit.
//!
//! This crate defines the shared abstractions that the numerical kernels,
//! observers, and physical models build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`EquationProblem`], [`DifferentiableProblem`] — problem traits that adapt
//!   solver variables to model inputs and compute residuals (and their slope)
//!   from model outputs
//! - [`Function`], [`Root`], [`RootWithDerivative`] — adapters that turn plain
//!   closures into models and problems

mod function;
mod model;
mod observer;
mod problems;

pub use function::{Function, Root, RootWithDerivative};
pub use model::{Model, Snapshot};
pub use observer::Observer;
pub use problems::{DifferentiableProblem, EquationProblem};
