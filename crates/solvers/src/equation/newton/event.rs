use crate::equation::Evaluation;

/// Event emitted by the Newton-Raphson solver after each step is computed.
///
/// The step has been computed but not yet taken: `next_x` already has the
/// domain policy applied.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Evaluation at the current iterate.
    pub eval: &'a Evaluation<I, O, 1>,

    /// Residual derivative at the current iterate.
    pub derivative: f64,

    /// Iterate the solver will move to next.
    pub next_x: f64,
}

impl<I, O> Event<'_, I, O> {
    /// Returns the current iterate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.eval.x[0]
    }

    /// Returns the residual at the current iterate.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval.residuals[0]
    }

    /// Returns the signed step `next_x - x`.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.next_x - self.x()
    }
}
