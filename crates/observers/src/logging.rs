use log::Level;
use numkit_core::Observer;

use crate::traits::{HasIterate, HasResidual};

/// An observer that writes one log record per solver event.
///
/// Each record names the iteration, iterate and residual, prefixed by the
/// label set with [`LogObserver::with_label`]. The observer never returns an
/// action, so it does not change the outcome of a solve.
///
/// # Example
///
/// ```
/// use numkit_core::{Function, Root};
/// use numkit_observers::LogObserver;
/// use numkit_solvers::equation::bisection;
///
/// let solution = bisection::solve(
///     &Function(|x: f64| x * x - 2.0),
///     &Root,
///     [0.0, 2.0],
///     &bisection::Config::default(),
///     LogObserver::new(log::Level::Debug).with_label("sqrt2"),
/// )
/// .unwrap();
///
/// assert!((solution.x - 2.0_f64.sqrt()).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct LogObserver {
    level: Level,
    label: Option<String>,
    events: usize,
}

impl LogObserver {
    /// Creates an observer that logs at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            label: None,
            events: 0,
        }
    }

    /// Prefixes every record with `label`.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events += 1;
        let label = self.label.as_deref().unwrap_or("solver");
        log::log!(
            self.level,
            "{label} iter {}: x = {:.10e}, residual = {:.3e}",
            event.iter(),
            event.x(),
            event.residual()
        );
        None
    }
}

/// Allows `&mut LogObserver` to be passed to solvers that take an observer by
/// value, so the event count can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut LogObserver
where
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    use numkit_core::{Function, Root, RootWithDerivative};
    use numkit_solvers::equation::{bisection, newton};

    #[test]
    fn counts_every_event_without_interfering() {
        let model = Function(|x: f64| x.cos() - x);

        let mut observer = LogObserver::new(Level::Trace).with_label("dottie");
        let observed = bisection::solve(
            &model,
            &Root,
            [0.0, 1.0],
            &bisection::Config::default(),
            &mut observer,
        )
        .expect("converges");
        let plain =
            bisection::solve_unobserved(&model, &Root, [0.0, 1.0], &bisection::Config::default())
                .expect("converges");

        assert_eq!(observed.x, plain.x);
        assert_eq!(observed.iters, plain.iters);
        assert!(observer.events() >= observed.iters);
    }

    #[test]
    fn works_with_newton_events() {
        let mut observer = LogObserver::default();
        let solution = newton::solve(
            &Function(|x: f64| x * x - 9.0),
            &RootWithDerivative(|x: f64| 2.0 * x),
            1.0,
            &newton::Config::default(),
            &mut observer,
        )
        .expect("converges");

        assert!(observer.events() >= solution.iters);
        assert!(observer.events() > 0);
    }
}
