use numkit_core::Snapshot;

use crate::equation::Evaluation;

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged on the residual or the bracket half-width.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the root.
    pub x: f64,

    /// Residual at the reported root estimate.
    pub residual: f64,

    /// Snapshot at the reported root estimate.
    pub snapshot: Snapshot<I, O>,

    /// Number of bracket halvings performed.
    pub iters: usize,

    /// Bracket that contained the root when the solver finished.
    pub bracket: [f64; 2],
}

impl<I, O> Solution<I, O> {
    /// Constructs a solution from an evaluation result.
    pub(super) fn from_eval(
        eval: Evaluation<I, O, 1>,
        status: Status,
        iters: usize,
        bracket: [f64; 2],
    ) -> Self {
        Self {
            status,
            x: eval.x[0],
            residual: eval.residuals[0],
            snapshot: eval.snapshot,
            iters,
            bracket,
        }
    }
}
