//! Explicit midpoint, a second-order Runge–Kutta method.
//!
//! ```text
//! k1      = f(x_n, y_n)
//! k2      = f(x_n + h/2, y_n + h/2 * k1)
//! y_{n+1} = y_n + h * k2
//! ```
//!
//! Takes an Euler half step to the middle of the interval and uses the slope
//! found there for the full step. Local truncation error is O(h³), global
//! error O(h²).

use odestep_core::{Derivative, Sample, Stepper, Trajectory};

use super::{Error, solve_with};

/// The explicit midpoint update rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Midpoint;

impl Stepper for Midpoint {
    fn advance<D: Derivative + ?Sized>(&self, derivative: &D, at: Sample, h: f64) -> f64 {
        let half = 0.5 * h;
        let k1 = derivative.slope(at.x, at.y);
        let k2 = derivative.slope(at.x + half, at.y + half * k1);
        at.y + h * k2
    }
}

/// Integrates `y' = f(x, y)` from `(x0, y0)` to `x_end` in `steps` midpoint steps.
///
/// # Errors
///
/// Returns [`Error::InvalidSpec`] if `steps` is zero, the bounds are
/// non-finite, or `x0 == x_end`.
pub fn solve<D: Derivative + ?Sized>(
    derivative: &D,
    y0: f64,
    steps: usize,
    x0: f64,
    x_end: f64,
) -> Result<Trajectory, Error> {
    solve_with(&Midpoint, derivative, y0, steps, x0, x_end)
}
