//! Finite-difference derivative estimates of scalar models.
//!
//! Every estimator takes a [`Model`] mapping `f64 -> f64`, the point `x` and
//! a validated [`StepSize`]. Errors raised by the model are returned
//! unchanged; the estimators add no failure modes of their own.
//!
//! | scheme | formula | truncation error |
//! |---|---|---|
//! | [`forward`] | `(f(x + h) - f(x)) / h` | O(h) |
//! | [`backward`] | `(f(x) - f(x - h)) / h` | O(h) |
//! | [`central`] | `(f(x + h) - f(x - h)) / 2h` | O(h²) |
//! | [`richardson`] | `D(h/2) + (D(h/2) - D(h)) / 3` over central `D` | O(h⁴) |

mod scheme;
mod step;

pub use scheme::Scheme;
pub use step::{StepSize, StepSizeError};

use numkit_core::Model;

/// Estimates `f'(x)` with a forward difference.
///
/// # Errors
///
/// Returns the model's error if either evaluation fails.
pub fn forward<M>(model: &M, x: f64, h: StepSize) -> Result<f64, M::Error>
where
    M: Model<Input = f64, Output = f64>,
{
    let h = h.get();
    Ok((model.call(&(x + h))? - model.call(&x)?) / h)
}

/// Estimates `f'(x)` with a backward difference.
///
/// # Errors
///
/// Returns the model's error if either evaluation fails.
pub fn backward<M>(model: &M, x: f64, h: StepSize) -> Result<f64, M::Error>
where
    M: Model<Input = f64, Output = f64>,
{
    let h = h.get();
    Ok((model.call(&x)? - model.call(&(x - h))?) / h)
}

/// Estimates `f'(x)` with a central difference.
///
/// # Errors
///
/// Returns the model's error if either evaluation fails.
pub fn central<M>(model: &M, x: f64, h: StepSize) -> Result<f64, M::Error>
where
    M: Model<Input = f64, Output = f64>,
{
    central_raw(model, x, h.get())
}

/// Combines central differences at `h` and `h / 2` to cancel the leading
/// error term.
///
/// # Errors
///
/// Returns the model's error if any of the four evaluations fails.
pub fn richardson<M>(model: &M, x: f64, h: StepSize) -> Result<f64, M::Error>
where
    M: Model<Input = f64, Output = f64>,
{
    let h = h.get();
    let coarse = central_raw(model, x, h)?;
    let fine = central_raw(model, x, 0.5 * h)?;
    Ok(fine + (fine - coarse) / 3.0)
}

/// Relative error `|estimate - exact| / |exact|` of a derivative estimate.
///
/// Infinite or NaN when `exact` is zero.
#[must_use]
pub fn relative_error(estimate: f64, exact: f64) -> f64 {
    (estimate - exact).abs() / exact.abs()
}

fn central_raw<M>(model: &M, x: f64, h: f64) -> Result<f64, M::Error>
where
    M: Model<Input = f64, Output = f64>,
{
    Ok((model.call(&(x + h))? - model.call(&(x - h))?) / (2.0 * h))
}
