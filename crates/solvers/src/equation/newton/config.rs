use thiserror::Error;

/// How a Newton step is mapped back into the admissible domain.
///
/// Some problems only make sense for non-negative iterates, such as a
/// physical resistance. Rather than rejecting a step that lands below zero,
/// [`Domain::NonNegative`] reflects it to `|x|` and keeps iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Domain {
    /// Steps are used as computed.
    #[default]
    Unbounded,

    /// Negative steps are reflected to their absolute value.
    NonNegative,
}

impl Domain {
    /// Maps a raw Newton step into this domain.
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Domain::Unbounded => x,
            Domain::NonNegative if x < 0.0 => x.abs(),
            Domain::NonNegative => x,
        }
    }
}

/// Configuration for the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tol: f64,
    min_derivative: f64,
    domain: Domain,
}

/// Errors that can occur when validating a Newton-Raphson solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and positive")]
    Tol,

    #[error("min_derivative must be finite and non-negative")]
    MinDerivative,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-8, 1e-10).unwrap()
    }
}

impl Config {
    /// Creates a new config over an unbounded domain.
    ///
    /// `tol` bounds both the residual (`|f(x)| < tol`) and the step
    /// (`|x_new - x| < tol`). A derivative with magnitude below
    /// `min_derivative` stops the solver.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is not finite and positive, or if
    /// `min_derivative` is not finite and non-negative.
    pub fn new(max_iters: usize, tol: f64, min_derivative: f64) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ConfigError::Tol);
        }
        if !min_derivative.is_finite() || min_derivative < 0.0 {
            return Err(ConfigError::MinDerivative);
        }

        Ok(Self {
            max_iters,
            tol,
            min_derivative,
            domain: Domain::Unbounded,
        })
    }

    /// Returns this config with a different iterate domain.
    #[must_use]
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    /// Returns the maximum number of Newton steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns the smallest usable derivative magnitude.
    #[must_use]
    pub fn min_derivative(&self) -> f64 {
        self.min_derivative
    }

    /// Returns the iterate domain.
    #[must_use]
    pub fn domain(&self) -> Domain {
        self.domain
    }
}
