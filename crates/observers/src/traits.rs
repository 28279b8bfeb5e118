//! What an observer may assume about events and actions.
//!
//! [`HasSample`] is implemented by events that report a step number and the
//! sample just produced. [`CanStopEarly`] is implemented by actions that can
//! end a solve. Observers bound on these traits instead of on
//! `fixed_step::Event` and `fixed_step::Action` directly.
//!
//! # Example
//!
//! ```rust
//! use odestep_core::Observer;
//! use odestep_observers::traits::{CanStopEarly, HasSample};
//!
//! struct StopPast {
//!     limit: f64,
//! }
//!
//! impl<E: HasSample, A: CanStopEarly> Observer<E, A> for StopPast {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.sample().y.abs() > self.limit).then(A::stop_early)
//!     }
//! }
//! ```

use odestep_core::Sample;
use odestep_solvers::fixed_step;

/// An event reporting one sample of a trajectory.
pub trait HasSample {
    /// Step index, 0 being the initial condition.
    fn step(&self) -> usize;

    fn sample(&self) -> Sample;
}

/// An action that can end a solve before its last step.
pub trait CanStopEarly {
    fn stop_early() -> Self;
}

impl HasSample for fixed_step::Event {
    fn step(&self) -> usize {
        self.step
    }

    fn sample(&self) -> Sample {
        self.sample
    }
}

impl CanStopEarly for fixed_step::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
