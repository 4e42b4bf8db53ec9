//! Series RLC resonance.
//!
//! The damped resonance frequency of a series RLC circuit is
//!
//! ```text
//! f(R) = (1 / 2π) · sqrt(1 / (L·C) - R² / (4·L²))
//! ```
//!
//! which falls from its maximum at `R = 0` to zero at the critical resistance
//! `2·sqrt(L / C)`. The curve is concave, so Newton-Raphson started below the
//! root overshoots and can land past the critical resistance; start it above.
//!
//! [`ResonantFrequency`] evaluates `f(R)`, and [`TargetFrequency`] turns
//! "which `R` gives frequency `f₀`" into an equation problem with an analytic
//! slope, ready for bisection or Newton-Raphson.

use std::f64::consts::PI;

use log::debug;
use numkit_core::{DifferentiableProblem, EquationProblem, Model};
use thiserror::Error;

/// Invalid circuit parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParameterError {
    #[error("inductance must be positive, got {0} H")]
    Inductance(f64),

    #[error("capacitance must be positive, got {0} µF")]
    Capacitance(f64),

    #[error("resistance must not be negative, got {0} Ω")]
    Resistance(f64),

    #[error("target frequency {target} Hz is unreachable, the maximum is {max:.2} Hz at R = 0")]
    UnreachableTarget { target: f64, max: f64 },
}

/// Errors from evaluating the resonance frequency.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FrequencyError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// The circuit is critically damped or overdamped and does not oscillate.
    #[error("resistance {resistance} Ω is too large, the circuit does not oscillate")]
    Overdamped { resistance: f64 },
}

/// Inductance and capacitance of a series RLC circuit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circuit {
    inductance: f64,
    capacitance: f64,
}

impl Circuit {
    /// Creates a circuit from an inductance in henries and a capacitance in
    /// microfarads.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] unless both values are positive and finite.
    pub fn new(inductance: f64, capacitance_uf: f64) -> Result<Self, ParameterError> {
        if !(inductance.is_finite() && inductance > 0.0) {
            return Err(ParameterError::Inductance(inductance));
        }
        if !(capacitance_uf.is_finite() && capacitance_uf > 0.0) {
            return Err(ParameterError::Capacitance(capacitance_uf));
        }
        Ok(Self {
            inductance,
            capacitance: capacitance_uf * 1e-6,
        })
    }

    /// Inductance in henries.
    #[must_use]
    pub fn inductance(&self) -> f64 {
        self.inductance
    }

    /// Capacitance in farads.
    #[must_use]
    pub fn capacitance(&self) -> f64 {
        self.capacitance
    }

    /// Resistance at which the circuit stops oscillating.
    #[must_use]
    pub fn critical_resistance(&self) -> f64 {
        2.0 * (self.inductance / self.capacitance).sqrt()
    }

    /// Undamped resonance frequency, the largest frequency any `R` can give.
    #[must_use]
    pub fn max_frequency(&self) -> f64 {
        (1.0 / (self.inductance * self.capacitance)).sqrt() / (2.0 * PI)
    }

    /// Damped resonance frequency in hertz.
    ///
    /// # Errors
    ///
    /// Returns an error for a negative resistance or one at or above the
    /// critical resistance.
    pub fn frequency(&self, resistance: f64) -> Result<f64, FrequencyError> {
        Ok(self.radicand(resistance)?.sqrt() / (2.0 * PI))
    }

    /// Derivative of [`frequency`](Self::frequency) with respect to `R`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`frequency`](Self::frequency).
    pub fn frequency_slope(&self, resistance: f64) -> Result<f64, FrequencyError> {
        let root = self.radicand(resistance)?.sqrt();
        Ok(-resistance / (8.0 * PI * self.inductance.powi(2) * root))
    }

    /// Checks that some resistance produces `target` hertz.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::UnreachableTarget`] if `target` exceeds the
    /// undamped frequency or is not positive.
    pub fn check_target(&self, target: f64) -> Result<(), ParameterError> {
        let max = self.max_frequency();
        if target > 0.0 && target <= max {
            Ok(())
        } else {
            Err(ParameterError::UnreachableTarget { target, max })
        }
    }

    /// `1/(LC) - R²/(4L²)`, which must be positive for the circuit to ring.
    fn radicand(&self, resistance: f64) -> Result<f64, FrequencyError> {
        if resistance.is_nan() || resistance < 0.0 {
            return Err(ParameterError::Resistance(resistance).into());
        }
        let term = 1.0 / (self.inductance * self.capacitance)
            - resistance.powi(2) / (4.0 * self.inductance.powi(2));
        if term > 0.0 {
            Ok(term)
        } else {
            Err(FrequencyError::Overdamped { resistance })
        }
    }
}

/// Model mapping resistance (Ω) to damped resonance frequency (Hz).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResonantFrequency(pub Circuit);

impl Model for ResonantFrequency {
    type Input = f64;
    type Output = f64;
    type Error = FrequencyError;

    fn call(&self, resistance: &f64) -> Result<f64, FrequencyError> {
        self.0.frequency(*resistance)
    }
}

/// Equation problem `f(R) - target = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetFrequency {
    circuit: Circuit,
    target: f64,
}

impl TargetFrequency {
    /// Creates the problem after checking that the target is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::UnreachableTarget`] if no resistance gives
    /// `target` hertz.
    pub fn new(circuit: Circuit, target: f64) -> Result<Self, ParameterError> {
        circuit.check_target(target)?;
        debug!(
            "target {target} Hz, undamped maximum {:.3} Hz, critical resistance {:.3} Ω",
            circuit.max_frequency(),
            circuit.critical_resistance()
        );
        Ok(Self { circuit, target })
    }

    /// The target frequency in hertz.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// A bracket `[0, R_c)` that always contains the solution.
    ///
    /// The upper end sits just below the critical resistance so the
    /// frequency is still defined there.
    #[must_use]
    pub fn bracket(&self) -> [f64; 2] {
        [0.0, self.circuit.critical_resistance() * (1.0 - 1e-9)]
    }
}

impl EquationProblem<1> for TargetFrequency {
    type Input = f64;
    type Output = f64;
    type Error = FrequencyError;

    fn input(&self, x: &[f64; 1]) -> Result<f64, FrequencyError> {
        Ok(x[0])
    }

    fn residuals(&self, _resistance: &f64, frequency: &f64) -> Result<[f64; 1], FrequencyError> {
        Ok([frequency - self.target])
    }
}

impl DifferentiableProblem for TargetFrequency {
    fn derivative(&self, resistance: &f64, _frequency: &f64) -> Result<f64, FrequencyError> {
        self.circuit.frequency_slope(*resistance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use numkit_solvers::derivative::{self, StepSize};

    fn circuit() -> Circuit {
        Circuit::new(0.5, 10.0).expect("valid parameters")
    }

    #[test]
    fn validates_parameters() {
        assert_eq!(Circuit::new(0.0, 10.0), Err(ParameterError::Inductance(0.0)));
        assert_eq!(Circuit::new(0.5, -1.0), Err(ParameterError::Capacitance(-1.0)));
        assert_eq!(
            circuit().frequency(-1.0),
            Err(FrequencyError::Parameter(ParameterError::Resistance(-1.0)))
        );
    }

    #[test]
    fn frequency_limits() {
        let c = circuit();
        assert_relative_eq!(c.max_frequency(), 71.176_254_341_717_71, epsilon = 1e-10);
        assert_relative_eq!(c.frequency(0.0).unwrap(), c.max_frequency());
        assert_relative_eq!(c.critical_resistance(), 447.213_595_499_958, epsilon = 1e-9);
        assert!(matches!(
            c.frequency(1.001 * c.critical_resistance()),
            Err(FrequencyError::Overdamped { .. })
        ));
    }

    #[test]
    fn slope_matches_finite_difference() {
        let model = ResonantFrequency(circuit());
        let h = StepSize::new(1e-4).unwrap();
        for r in [10.0, 120.0, 300.0] {
            let numeric = derivative::central(&model, r, h).unwrap();
            let exact = circuit().frequency_slope(r).unwrap();
            assert_relative_eq!(exact, numeric, max_relative = 1e-6);
        }
    }

    #[test]
    fn unreachable_target_is_reported() {
        // 1 kHz is far above what L = 0.5 H, C = 10 µF can resonate at.
        let err = TargetFrequency::new(circuit(), 1000.0).unwrap_err();
        match err {
            ParameterError::UnreachableTarget { target, max } => {
                assert_relative_eq!(target, 1000.0);
                assert_relative_eq!(max, 71.176, epsilon = 1e-3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bracket_changes_sign() {
        let problem = TargetFrequency::new(circuit(), 60.0).unwrap();
        let [low, high] = problem.bracket();
        let model = ResonantFrequency(circuit());
        let at = |r: f64| problem.residuals(&r, &model.call(&r).unwrap()).unwrap()[0];
        assert!(at(low) > 0.0);
        assert!(at(high) < 0.0);
    }
}
