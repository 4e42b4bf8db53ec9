//! Newton-Raphson root finding from an initial guess.
//!
//! # Algorithm
//!
//! At each iterate `x`:
//!
//! 1. Evaluate the residual `f(x)`. If `|f(x)| < tol`, return `x`.
//! 2. Evaluate the slope `f'(x)` from the [`DifferentiableProblem`]. If
//!    `|f'(x)| < min_derivative`, fail with [`Error::DerivativeTooSmall`].
//! 3. Take the raw step `x_new = x - f(x) / f'(x)` and map it through the
//!    configured [`Domain`].
//! 4. If `|x_new - x| < tol`, return `x_new`. Otherwise continue from `x_new`.
//!
//! An accepted `x_new` is evaluated once more so the [`Solution`] can report
//! its residual. If the model cannot be evaluated there, the root is still
//! returned and the residual and snapshot stay at the last evaluated iterate
//! (see [`Solution::evaluated_x`]).
//!
//! There is no line search or damping. Divergence from a poor initial guess
//! is only caught by the derivative guard or the iteration cap. Residual
//! growth between iterates is logged as a warning but does not change the
//! iteration.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per computed step, before the step is
//! taken. Observers can return [`Action::StopEarly`] to accept the current
//! iterate.

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError, Domain};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use log::{debug, trace, warn};
use numkit_core::{DifferentiableProblem, Model, Observer};

use crate::equation::{EvalError, Evaluation, evaluate};

/// Finds a root of the equation using Newton-Raphson iteration.
///
/// The observer receives an [`Event`] for every computed step.
///
/// # Errors
///
/// Returns an error if the initial guess is non-finite, if evaluating the
/// residual or its derivative fails ([`Error::StepFailed`]), if a residual or
/// derivative is non-finite, if the derivative is too small, or if
/// `max_iters` steps pass without convergence.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: DifferentiableProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { x0 });
    }

    let tol = config.tol();
    let mut x = x0;
    let mut previous_residual: Option<f64> = None;

    for iter in 0..config.max_iters() {
        let eval = finite_eval(model, problem, x, iter)?;
        let residual = eval.residuals[0];

        if residual.abs() < tol {
            debug!("Newton-Raphson converged on residual at x = {x} after {iter} steps");
            return Ok(Solution::from_eval(eval, Status::Converged, iter));
        }

        if let Some(previous) = previous_residual
            && residual.abs() > previous.abs()
        {
            warn!(
                "Newton-Raphson residual grew from {} to {} at iteration {iter}",
                previous.abs(),
                residual.abs()
            );
        }

        let derivative = problem
            .derivative(&eval.snapshot.input, &eval.snapshot.output)
            .map_err(|e| Error::step_failed(iter, EvalError::<M::Error, P::Error>::Problem(e)))?;

        if !derivative.is_finite() {
            return Err(Error::NonFiniteValue {
                iter,
                x,
                quantity: "derivative",
                value: derivative,
            });
        }
        if derivative.abs() < config.min_derivative() {
            return Err(Error::DerivativeTooSmall {
                iter,
                x,
                derivative,
            });
        }

        let next_x = config.domain().apply(x - residual / derivative);
        trace!("Newton-Raphson iter {}: x = {x}, residual = {residual}, next x = {next_x}", iter + 1);

        let event = Event {
            iter: iter + 1,
            eval: &eval,
            derivative,
            next_x,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!("Newton-Raphson stopped by observer at x = {x}");
            return Ok(Solution::from_eval(eval, Status::StoppedByObserver, iter));
        }

        if (next_x - x).abs() < tol {
            debug!("Newton-Raphson converged on step size at x = {next_x} after {iter} steps");
            let solution = match finite_eval(model, problem, next_x, iter + 1) {
                Ok(accepted) => Solution::from_eval(accepted, Status::Converged, iter),
                Err(err) => {
                    debug!("Newton-Raphson could not evaluate accepted root x = {next_x}: {err}");
                    Solution::from_step(eval, next_x, iter)
                }
            };
            return Ok(solution);
        }

        previous_residual = Some(residual);
        x = next_x;
    }

    Err(Error::NonConvergence {
        iters: config.max_iters(),
        x,
    })
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    x0: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: DifferentiableProblem<Input = M::Input, Output = M::Output>,
{
    solve(model, problem, x0, config, ())
}

/// Evaluates at `x`, mapping failures to the iteration they occurred in.
fn finite_eval<M, P>(
    model: &M,
    problem: &P,
    x: f64,
    iter: usize,
) -> Result<Evaluation<M::Input, M::Output, 1>, Error>
where
    M: Model,
    P: DifferentiableProblem<Input = M::Input, Output = M::Output>,
{
    let eval = evaluate(model, problem, [x]).map_err(|e| Error::step_failed(iter, e))?;
    let residual = eval.residuals[0];
    if !residual.is_finite() {
        return Err(Error::NonFiniteValue {
            iter,
            x,
            quantity: "residual",
            value: residual,
        });
    }
    Ok(eval)
}
