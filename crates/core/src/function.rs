use std::convert::Infallible;

use crate::{DifferentiableProblem, EquationProblem, Model};

/// Adapts a plain `f64 -> f64` closure into a [`Model`].
///
/// # Example
///
/// ```
/// use numkit_core::{Function, Model};
///
/// let square = Function(|x: f64| x * x);
/// assert_eq!(square.call(&3.0), Ok(9.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Function<F>(pub F);

impl<F> Model for Function<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Infallible> {
        Ok((self.0)(*input))
    }
}

/// Equation problem whose residual is the model output itself.
///
/// Pairs with [`Function`] to find `x` such that `f(x) = 0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Root;

impl EquationProblem<1> for Root {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Infallible> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Infallible> {
        Ok([*output])
    }
}

/// Like [`Root`], with a closure that supplies the residual's derivative.
#[derive(Debug, Clone, Copy)]
pub struct RootWithDerivative<D>(pub D);

impl<D> EquationProblem<1> for RootWithDerivative<D>
where
    D: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Infallible> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Infallible> {
        Ok([*output])
    }
}

impl<D> DifferentiableProblem for RootWithDerivative<D>
where
    D: Fn(f64) -> f64,
{
    fn derivative(&self, input: &f64, _output: &f64) -> Result<f64, Infallible> {
        Ok((self.0)(*input))
    }
}
