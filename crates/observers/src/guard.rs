use odestep_core::Observer;

use crate::traits::{CanStopEarly, HasSample};

/// An observer that stops a solve once `y` is no longer finite.
///
/// The fixed-step solvers never inspect the values they produce, so a
/// singular derivative quietly fills the rest of the trajectory with NaN or
/// infinity. Attach this guard to cut the solve short at the first bad sample
/// instead. The offending sample is still part of the returned trajectory.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NonFiniteGuard {
    tripped_at: Option<usize>,
}

impl NonFiniteGuard {
    /// Creates a guard that has not yet tripped.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the step at which a non-finite `y` was first seen, if any.
    #[must_use]
    pub fn tripped_at(&self) -> Option<usize> {
        self.tripped_at
    }
}

impl<E: HasSample, A: CanStopEarly> Observer<E, A> for NonFiniteGuard {
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.sample().y.is_finite() {
            return None;
        }
        self.tripped_at.get_or_insert(event.step());
        Some(A::stop_early())
    }
}

/// Allows `&mut NonFiniteGuard` to be passed to solvers that take an observer
/// by value, so [`NonFiniteGuard::tripped_at`] can be read after the solve.
impl<E: HasSample, A: CanStopEarly> Observer<E, A> for &mut NonFiniteGuard {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use odestep_core::IntegrationSpec;
    use odestep_solvers::{
        Method,
        fixed_step::{self, Status},
    };

    #[test]
    fn stops_at_first_non_finite_sample() {
        // Starting at the singularity x = 0 poisons the first step.
        let spec = IntegrationSpec::new(2.0, 10, 0.0, 1.0).unwrap();
        let singular = |x: f64, y: f64| -y / x - 2.0 / (x * x);

        let mut guard = NonFiniteGuard::new();
        let solution = fixed_step::solve(&Method::Euler, &singular, &spec, &mut guard);

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 1);
        assert_eq!(solution.trajectory.len(), 2);
        assert_eq!(guard.tripped_at(), Some(1));
    }

    #[test]
    fn stays_quiet_on_well_posed_problems() {
        let spec = IntegrationSpec::new(2.0, 100, 1.0, 100.0).unwrap();
        let regular = |x: f64, y: f64| -y / x - 2.0 / (x * x);

        let mut guard = NonFiniteGuard::new();
        let solution = fixed_step::solve(&Method::Rk4, &regular, &spec, &mut guard);

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(guard.tripped_at(), None);
    }

    #[test]
    fn trips_on_non_finite_initial_value() {
        let spec = IntegrationSpec::new(f64::NAN, 5, 0.0, 1.0).unwrap();

        let mut guard = NonFiniteGuard::new();
        let solution = fixed_step::solve(&Method::Euler, &|_x: f64, y: f64| y, &spec, &mut guard);

        assert_eq!(solution.steps, 0);
        assert_eq!(guard.tripped_at(), Some(0));
    }
}
