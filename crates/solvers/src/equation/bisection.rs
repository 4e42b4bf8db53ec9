//! Bisection root finding on a sign-changing bracket.
//!
//! # Algorithm
//!
//! The residual must have strictly opposite signs at the two endpoints. Each
//! iteration evaluates the midpoint `c`:
//!
//! - if `|f(c)| < tol` the midpoint is returned immediately;
//! - otherwise the endpoint whose residual shares the sign of `f(c)` moves to
//!   `c`, halving the bracket.
//!
//! Iteration continues while the half-width is greater than `tol` and fewer
//! than `max_iters` halvings have been made. A bracket `[a, b]` therefore
//! converges in at most `ceil(log2((b - a) / tol))` halvings; hitting
//! `max_iters` first is reported as [`Error::NonConvergence`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per midpoint evaluation. Endpoint
//! evaluations are not observed. Observers can return [`Action::StopEarly`]
//! to accept the midpoint just evaluated.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use bracket::{Bracket, BracketError, Sign};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use log::{debug, trace};
use numkit_core::{EquationProblem, Model, Observer};

use crate::equation::{Evaluation, evaluate};

use bracket::Bounds;

/// Finds a root of the equation using the bisection method.
///
/// Observers see each midpoint evaluation together with the bracket it was
/// taken from.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or does not change sign, if a
/// residual is non-finite, if the iteration limit is reached before the
/// tolerance is met, or if the model or problem fails during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let bounds = Bounds::new(bracket)?;
    let [left, right] = bounds.as_array();

    let left_residual = finite_eval(model, problem, left)?.residuals[0];
    let right_residual = finite_eval(model, problem, right)?.residuals[0];

    let mut bracket = Bracket::new(bounds, Sign::of(left_residual), Sign::of(right_residual))?;
    let tol = config.tol();
    let mut iters = 0;

    while bracket.half_width() > tol && iters < config.max_iters() {
        let mid = bracket.midpoint();
        let eval = finite_eval(model, problem, mid)?;
        let residual = eval.residuals[0];
        trace!("bisection iter {}: x = {mid}, residual = {residual}", iters + 1);

        let event = Event {
            iter: iters + 1,
            bracket: bracket.as_array(),
            eval: &eval,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!("bisection stopped by observer at x = {mid}");
            let bounds = bracket.as_array();
            return Ok(Solution::from_eval(
                eval,
                Status::StoppedByObserver,
                iters,
                bounds,
            ));
        }

        if residual.abs() < tol {
            debug!("bisection converged on residual at x = {mid} after {iters} iterations");
            let bounds = bracket.as_array();
            return Ok(Solution::from_eval(eval, Status::Converged, iters, bounds));
        }

        bracket.shrink(mid, Sign::of(residual));
        iters += 1;
    }

    if bracket.half_width() > tol {
        return Err(Error::NonConvergence {
            iters,
            bracket: bracket.as_array(),
        });
    }

    let eval = finite_eval(model, problem, bracket.midpoint())?;
    debug!(
        "bisection converged on bracket width at x = {} after {iters} iterations",
        eval.x[0]
    );
    Ok(Solution::from_eval(
        eval,
        Status::Converged,
        iters,
        bracket.as_array(),
    ))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

/// Evaluates at `x`, rejecting non-finite residuals.
fn finite_eval<M, P>(
    model: &M,
    problem: &P,
    x: f64,
) -> Result<Evaluation<M::Input, M::Output, 1>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let eval = evaluate(model, problem, [x])?;
    let residual = eval.residuals[0];
    if !residual.is_finite() {
        return Err(Error::NonFiniteResidual { x, residual });
    }
    Ok(eval)
}
