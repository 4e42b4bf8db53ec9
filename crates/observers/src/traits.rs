//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across bisection and Newton-Raphson.
//!
//! # Event traits
//!
//! - [`HasIterate`] — events that report an iteration number and iterate
//! - [`HasResidual`] — events that carry a residual value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use numkit_core::Observer;
//! use numkit_observers::traits::{CanStopEarly, HasIterate, HasResidual};
//!
//! /// Accepts the first iterate that is close enough after a warm-up.
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//! }
//!
//! impl<E: HasIterate + HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.iter() >= self.min_iters && event.residual().abs() < self.tolerance)
//!             .then(A::stop_early)
//!     }
//! }
//! ```

use numkit_solvers::equation::{bisection, newton};

/// An event that reports where the solver is.
pub trait HasIterate {
    /// Returns the 1-based iteration number.
    fn iter(&self) -> usize;

    /// Returns the point the event describes.
    fn x(&self) -> f64;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- bisection ---

impl<I, O> HasIterate for bisection::Event<'_, I, O> {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        bisection::Event::x(self)
    }
}

impl<I, O> HasResidual for bisection::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        bisection::Event::residual(self)
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- newton ---

impl<I, O> HasIterate for newton::Event<'_, I, O> {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        newton::Event::x(self)
    }
}

impl<I, O> HasResidual for newton::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        newton::Event::residual(self)
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use numkit_core::{Function, Observer, Root, RootWithDerivative};

    /// Stops once the residual is within a loose tolerance.
    struct Loose(f64);

    impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for Loose {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.residual().abs() < self.0).then(A::stop_early)
        }
    }

    #[test]
    fn one_observer_drives_both_solvers() {
        let model = Function(|x: f64| x * x - 2.0);

        let bisected = bisection::solve(
            &model,
            &Root,
            [0.0, 2.0],
            &bisection::Config::default(),
            Loose(1e-2),
        )
        .expect("stops early");
        assert_eq!(bisected.status, bisection::Status::StoppedByObserver);
        assert!(bisected.residual.abs() < 1e-2);

        let newton = newton::solve(
            &model,
            &RootWithDerivative(|x: f64| 2.0 * x),
            1.0,
            &newton::Config::default(),
            Loose(1e-2),
        )
        .expect("stops early");
        assert_eq!(newton.status, newton::Status::StoppedByObserver);
        assert_relative_eq!(newton.x, 1.416_666_666_666_666_7, epsilon = 1e-12);
    }

    #[test]
    fn iterates_are_reported_in_order() {
        let mut seen = Vec::new();
        newton::solve(
            &Function(|x: f64| x * x - 2.0),
            &RootWithDerivative(|x: f64| 2.0 * x),
            1.0,
            &newton::Config::default(),
            |event: &newton::Event<'_, f64, f64>| {
                seen.push((HasIterate::iter(event), HasIterate::x(event)));
                None
            },
        )
        .expect("converges");

        assert_eq!(seen[0], (1, 1.0));
        assert!(seen.windows(2).all(|pair| pair[1].0 == pair[0].0 + 1));
    }
}
