use numkit_core::Snapshot;

use crate::equation::Evaluation;

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged on the residual or the step size.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton-Raphson solve.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the root.
    pub x: f64,

    /// Iterate at which `residual` and `snapshot` were evaluated.
    ///
    /// Equal to `x` unless the model could not be evaluated at a root
    /// accepted on step size.
    pub evaluated_x: f64,

    /// Residual at `evaluated_x`.
    pub residual: f64,

    /// Snapshot at `evaluated_x`.
    pub snapshot: Snapshot<I, O>,

    /// Completed iterations. A step accepted on its size is not counted.
    pub iters: usize,
}

impl<I, O> Solution<I, O> {
    pub(super) fn from_eval(eval: Evaluation<I, O, 1>, status: Status, iters: usize) -> Self {
        Self {
            status,
            x: eval.x[0],
            evaluated_x: eval.x[0],
            residual: eval.residuals[0],
            snapshot: eval.snapshot,
            iters,
        }
    }

    /// Accepts `x` on step size while keeping the evaluation it was taken from.
    pub(super) fn from_step(eval: Evaluation<I, O, 1>, x: f64, iters: usize) -> Self {
        Self {
            x,
            ..Self::from_eval(eval, Status::Converged, iters)
        }
    }
}
