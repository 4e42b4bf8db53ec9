//! Beta-model NTC thermistor.
//!
//! `R(T) = R₀ · exp(β · (1/T - 1/T₀))` with `T` in kelvin. The analytic slope
//! `dR/dT = -R(T) · β / T²` is the reference the finite-difference schemes
//! are compared against.

use numkit_core::Model;
use numkit_solvers::derivative::{Scheme, StepSize, relative_error};
use thiserror::Error;

/// Errors from building or evaluating a thermistor.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ThermistorError {
    #[error("{name} must be positive and finite, got {value}")]
    Parameter { name: &'static str, value: f64 },

    #[error("temperature must be positive, got {0} K")]
    Temperature(f64),
}

/// Thermistor curve parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thermistor {
    r0: f64,
    beta: f64,
    t0: f64,
}

impl Thermistor {
    /// Creates a thermistor with resistance `r0` ohms at `t0` kelvin and
    /// material constant `beta` kelvin.
    ///
    /// # Errors
    ///
    /// Returns [`ThermistorError::Parameter`] unless every value is positive
    /// and finite.
    pub fn new(r0: f64, beta: f64, t0: f64) -> Result<Self, ThermistorError> {
        for (name, value) in [("r0", r0), ("beta", beta), ("t0", t0)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ThermistorError::Parameter { name, value });
            }
        }
        Ok(Self { r0, beta, t0 })
    }

    /// Resistance in ohms at `t` kelvin.
    ///
    /// # Errors
    ///
    /// Returns [`ThermistorError::Temperature`] unless `t > 0`.
    pub fn resistance(&self, t: f64) -> Result<f64, ThermistorError> {
        check_temperature(t)?;
        Ok(self.r0 * (self.beta * (1.0 / t - 1.0 / self.t0)).exp())
    }

    /// Exact `dR/dT` in ohms per kelvin.
    ///
    /// # Errors
    ///
    /// Returns [`ThermistorError::Temperature`] unless `t > 0`.
    pub fn slope(&self, t: f64) -> Result<f64, ThermistorError> {
        Ok(-self.resistance(t)? * self.beta / (t * t))
    }
}

impl Default for Thermistor {
    /// 5 kΩ at 298 K with β = 3500 K.
    fn default() -> Self {
        Self {
            r0: 5000.0,
            beta: 3500.0,
            t0: 298.0,
        }
    }
}

impl Model for Thermistor {
    type Input = f64;
    type Output = f64;
    type Error = ThermistorError;

    fn call(&self, t: &f64) -> Result<f64, ThermistorError> {
        self.resistance(*t)
    }
}

fn check_temperature(t: f64) -> Result<(), ThermistorError> {
    if t > 0.0 {
        Ok(())
    } else {
        Err(ThermistorError::Temperature(t))
    }
}

/// Numerical and exact slopes at one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeComparison {
    pub temperature: f64,
    pub exact: f64,
    /// Estimates in [`Scheme::ALL`] order.
    pub estimates: [f64; 4],
}

impl SlopeComparison {
    /// Relative errors in [`Scheme::ALL`] order.
    #[must_use]
    pub fn relative_errors(&self) -> [f64; 4] {
        self.estimates.map(|estimate| relative_error(estimate, self.exact))
    }

    /// Estimate produced by `scheme`.
    #[must_use]
    pub fn estimate(&self, scheme: Scheme) -> f64 {
        let index = Scheme::ALL
            .iter()
            .position(|&s| s == scheme)
            .unwrap_or_default();
        self.estimates[index]
    }
}

/// Compares every scheme against the analytic slope at each temperature.
///
/// # Errors
///
/// Returns [`ThermistorError::Temperature`] if a stencil point is not a
/// positive temperature.
pub fn compare_slopes(
    thermistor: &Thermistor,
    temperatures: impl IntoIterator<Item = f64>,
    h: StepSize,
) -> Result<Vec<SlopeComparison>, ThermistorError> {
    temperatures
        .into_iter()
        .map(|t| {
            let mut estimates = [0.0; 4];
            for (slot, scheme) in estimates.iter_mut().zip(Scheme::ALL) {
                *slot = scheme.estimate(thermistor, t, h)?;
            }
            Ok(SlopeComparison {
                temperature: t,
                exact: thermistor.slope(t)?,
                estimates,
            })
        })
        .collect()
}

/// Temperatures `start, start + step, ...` up to and including `end`.
///
/// Empty unless `step > 0` and `end >= start`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn temperature_sweep(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = if step > 0.0 && end >= start {
        ((end - start) / step + 1e-9).floor() as usize + 1
    } else {
        0
    };
    (0..count).map(move |i| start + i as f64 * step)
}
