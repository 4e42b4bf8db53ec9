use thiserror::Error;

use numkit_core::{EquationProblem, Model, Snapshot};

/// The result of evaluating an equation problem at a given `x`.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    pub x: [f64; N],
    pub residuals: [f64; N],
    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating an equation problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),
    /// Failed to construct input or compute residuals.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P, const N: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N>,
    EvalError<<M as Model>::Error, <P as EquationProblem<N>>::Error>,
>;

/// Evaluates the model in the context of an equation problem.
///
/// This function maps `x` to model input, calls the model, then computes
/// residuals from the input and output.
///
/// # Errors
///
/// Returns an error if input mapping, model call, or residual computation fails.
pub fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: EquationProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let residuals = problem
        .residuals(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        residuals,
        snapshot: Snapshot::new(input, output),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use numkit_core::{Function, Root};

    #[derive(Debug, thiserror::Error)]
    #[error("negative input")]
    struct NegativeInput;

    struct SquareRoot;

    impl Model for SquareRoot {
        type Input = f64;
        type Output = f64;
        type Error = NegativeInput;

        fn call(&self, input: &f64) -> Result<f64, NegativeInput> {
            if *input < 0.0 {
                Err(NegativeInput)
            } else {
                Ok(input.sqrt())
            }
        }
    }

    #[test]
    fn evaluation_captures_snapshot() {
        let eval = evaluate(&Function(|x: f64| x * x - 2.0), &Root, [3.0]).expect("evaluates");

        assert_relative_eq!(eval.x[0], 3.0);
        assert_relative_eq!(eval.residuals[0], 7.0);
        assert_relative_eq!(eval.snapshot.input, 3.0);
        assert_relative_eq!(eval.snapshot.output, 7.0);
    }

    #[test]
    fn model_failure_is_reported() {
        let result = evaluate(&SquareRoot, &Root, [-1.0]);
        assert!(matches!(result, Err(EvalError::Model(NegativeInput))));
    }
}
