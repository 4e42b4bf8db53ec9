use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tol: f64,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and positive")]
    Tol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-6).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// The same `tol` bounds both the residual (`|f(c)| < tol`) and the
    /// bracket half-width (`(b - a) / 2 <= tol`).
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is non-finite or not strictly positive.
    pub fn new(max_iters: usize, tol: f64) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ConfigError::Tol);
        }

        Ok(Self { max_iters, tol })
    }

    /// Returns the maximum number of bracket halvings.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 100);
        assert!(config.tol() > 0.0);
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(Config::new(10, 0.0), Err(ConfigError::Tol));
        assert_eq!(Config::new(10, -1e-3), Err(ConfigError::Tol));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::Tol));
    }
}
