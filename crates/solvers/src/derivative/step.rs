use thiserror::Error;

/// A finite, strictly positive finite-difference step.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct StepSize(f64);

/// Error returned for an unusable step size.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("step size must be positive and finite, got {0}")]
pub struct StepSizeError(pub f64);

impl StepSize {
    /// Validates a step size.
    ///
    /// # Errors
    ///
    /// Returns [`StepSizeError`] if `h` is not finite or not greater than zero.
    pub fn new(h: f64) -> Result<Self, StepSizeError> {
        if h.is_finite() && h > 0.0 {
            Ok(Self(h))
        } else {
            Err(StepSizeError(h))
        }
    }

    /// Returns the step as a plain number.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for StepSize {
    fn default() -> Self {
        Self(1e-5)
    }
}

impl TryFrom<f64> for StepSize {
    type Error = StepSizeError;

    fn try_from(h: f64) -> Result<Self, StepSizeError> {
        Self::new(h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_finite_steps() {
        assert_eq!(StepSize::new(0.1).map(StepSize::get), Ok(0.1));
        assert_eq!(StepSize::default().get(), 1e-5);
        assert!(StepSize::try_from(f64::MIN_POSITIVE).is_ok());
    }

    #[test]
    fn rejects_unusable_steps() {
        for h in [0.0, -1e-3, f64::INFINITY] {
            assert_eq!(StepSize::new(h), Err(StepSizeError(h)));
        }
        assert!(StepSize::new(f64::NAN).is_err());
    }
}
