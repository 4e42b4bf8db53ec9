//! Numerical kernels for numkit.
//!
//! - [`equation`] — scalar root finding ([`equation::bisection`],
//!   [`equation::newton`])
//! - [`linear`] — Gaussian and Gauss-Jordan elimination with recorded steps,
//!   cofactor determinant, adjugate inverse
//! - [`derivative`] — finite-difference derivative estimates and Richardson
//!   extrapolation
//!
//! Every kernel is a plain function over borrowed inputs. Nothing is cached
//! between calls, so independent calls may run on different threads freely.

pub mod derivative;
pub mod equation;
pub mod linear;
