//! Fixed-step driver shared by every explicit method.
//!
//! The driver lays out the grid and calls a [`Stepper`] once per step:
//!
//! ```text
//! h       = (x_end - x0) / steps
//! x_i     = x0 + i * h
//! y_{i+1} = stepper.advance(f, (x_i, y_i), h)
//! ```
//!
//! The first sample is the initial condition, untouched. The last sample sits
//! at `x0 + steps * h`, which may differ from `x_end` in the last bit.
//!
//! Nothing here checks the values coming back from the derivative. If `f`
//! blows up inside the interval, the non-finite `y` is carried through the
//! remaining steps. Use an observer such as a non-finite guard if you need to
//! stop on it.
//!
//! # Example
//!
//! ```
//! use odestep_core::IntegrationSpec;
//! use odestep_solvers::{Method, fixed_step};
//!
//! let spec = IntegrationSpec::new(3.0, 30, 0.0, 3.0)?;
//! let decay = |_x: f64, y: f64| -2.0 * y;
//!
//! let euler = fixed_step::integrate(&Method::Euler, &decay, &spec);
//! let rk2 = fixed_step::integrate(&Method::Midpoint, &decay, &spec);
//!
//! assert_eq!(euler.len(), 31);
//! assert_eq!(euler.xs(), rk2.xs());
//! # Ok::<(), odestep_core::SpecError>(())
//! ```

mod action;
mod error;
mod event;
mod method;
mod solution;

pub mod euler;
pub mod heun;
pub mod midpoint;
pub mod rk4;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use method::{Method, ParseMethodError};
pub use solution::{Solution, Status};

use odestep_core::{Derivative, IntegrationSpec, Observer, Sample, Stepper, Trajectory};

/// Integrates a validated spec with the given stepper.
///
/// # Algorithm
///
/// 1. Record the initial sample `(x0, y0)` and emit it as step 0.
/// 2. For each step `i` in `1..=steps`:
///    - Advance `y` from the previous sample with step size `h`.
///    - Place the new sample at `x0 + i * h`.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns [`Action::StopEarly`], terminate.
/// 3. Return the solution with the full trajectory.
///
/// `IntegrationSpec` is validated on construction, so this cannot fail.
pub fn solve<S, D, Obs>(
    stepper: &S,
    derivative: &D,
    spec: &IntegrationSpec,
    mut observer: Obs,
) -> Solution
where
    S: Stepper + ?Sized,
    D: Derivative + ?Sized,
    Obs: Observer<Event, Action>,
{
    let steps = spec.steps();
    let h = spec.step_size();

    let mut samples = Vec::with_capacity(steps + 1);
    let mut current = spec.initial();
    samples.push(current);

    let event = Event {
        step: 0,
        sample: current,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Solution {
            status: Status::StoppedByObserver,
            trajectory: Trajectory::from_samples(samples),
            steps: 0,
        };
    }

    for step in 1..=steps {
        let y = stepper.advance(derivative, current, h);
        current = Sample::new(spec.x_at(step), y);
        samples.push(current);

        let event = Event {
            step,
            sample: current,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Solution {
                status: Status::StoppedByObserver,
                trajectory: Trajectory::from_samples(samples),
                steps: step,
            };
        }
    }

    Solution {
        status: Status::Complete,
        trajectory: Trajectory::from_samples(samples),
        steps,
    }
}

/// Integrates a validated spec without observation and returns the trajectory.
///
/// This is a convenience wrapper around [`solve`] that discards events. The
/// returned trajectory always has `spec.steps() + 1` samples.
pub fn integrate<S, D>(stepper: &S, derivative: &D, spec: &IntegrationSpec) -> Trajectory
where
    S: Stepper + ?Sized,
    D: Derivative + ?Sized,
{
    solve(stepper, derivative, spec, ()).trajectory
}

/// Validates raw arguments and integrates them with the given stepper.
///
/// This backs the `solve(f, y0, steps, x0, x_end)` function of each method
/// module, so every method shares the same call shape.
///
/// # Errors
///
/// Returns [`Error::InvalidSpec`] if `steps` is zero, the bounds are
/// non-finite, or `x0 == x_end`.
pub fn solve_with<S, D>(
    stepper: &S,
    derivative: &D,
    y0: f64,
    steps: usize,
    x0: f64,
    x_end: f64,
) -> Result<Trajectory, Error>
where
    S: Stepper + ?Sized,
    D: Derivative + ?Sized,
{
    let spec = IntegrationSpec::new(y0, steps, x0, x_end)?;
    Ok(integrate(stepper, derivative, &spec))
}
