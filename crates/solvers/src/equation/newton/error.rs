use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during Newton-Raphson solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("initial guess must be finite, got {x0}")]
    NonFiniteGuess { x0: f64 },

    #[error("derivative {derivative} at x = {x} is too small (iteration {iter})")]
    DerivativeTooSmall { iter: usize, x: f64, derivative: f64 },

    #[error("non-finite {quantity} {value} at x = {x} (iteration {iter})")]
    NonFiniteValue {
        iter: usize,
        x: f64,
        quantity: &'static str,
        value: f64,
    },

    #[error("Newton-Raphson step failed at iteration {iter}")]
    StepFailed {
        iter: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("Newton-Raphson did not converge after {iters} iterations (last x = {x})")]
    NonConvergence { iters: usize, x: f64 },
}

impl Error {
    pub(crate) fn step_failed<E: StdError + Send + Sync + 'static>(iter: usize, err: E) -> Self {
        Self::StepFailed {
            iter,
            source: Box::new(err),
        }
    }
}
