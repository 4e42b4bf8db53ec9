/// Defines an equation problem to be solved.
///
/// An equation problem maps solver variables to a model input,
/// then computes residuals from the model input and output.
/// Solvers drive those residuals toward zero.
///
/// The const generic `N` is the number of solver variables and residuals.
/// For example, `N = 1` represents a scalar root-finding problem.
pub trait EquationProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Computes residuals from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the residuals cannot be computed.
    fn residuals(&self, input: &Self::Input, output: &Self::Output)
    -> Result<[f64; N], Self::Error>;
}

/// A scalar equation problem that can also report the slope of its residual.
///
/// Derivative-based solvers such as Newton-Raphson need `d residual / d x`
/// at the current iterate. The slope is computed from the same model input
/// and output the residual was computed from, so a problem can use an
/// analytic expression without calling the model again.
pub trait DifferentiableProblem: EquationProblem<1> {
    /// Returns the derivative of the residual with respect to the solver variable.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative is undefined at this point.
    fn derivative(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}
