//! Solvers for scalar equation problems — finding `x` such that `f(x) = 0`.
//!
//! An [`EquationProblem`] maps the solver variable `x` to a model input,
//! calls the model, and computes a residual. Solvers in this module drive
//! that residual toward zero.
//!
//! # Solvers
//!
//! - [`bisection`] — guaranteed convergence on a sign-changing bracket
//! - [`newton`] — quadratic convergence from a good initial guess, using the
//!   residual slope from a [`DifferentiableProblem`]
//!
//! [`EquationProblem`]: numkit_core::EquationProblem
//! [`DifferentiableProblem`]: numkit_core::DifferentiableProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod bisection;
pub mod newton;
