//! Forward Euler, the first-order explicit method.
//!
//! ```text
//! y_{n+1} = y_n + h * f(x_n, y_n)
//! ```
//!
//! The slope at the start of the step is held constant across the whole step.
//! Local truncation error is O(h²), global error O(h).

use odestep_core::{Derivative, Sample, Stepper, Trajectory};

use super::{Error, solve_with};

/// The forward Euler update rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Euler;

impl Stepper for Euler {
    fn advance<D: Derivative + ?Sized>(&self, derivative: &D, at: Sample, h: f64) -> f64 {
        at.y + h * derivative.slope(at.x, at.y)
    }
}

/// Integrates `y' = f(x, y)` from `(x0, y0)` to `x_end` in `steps` Euler steps.
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
    solve_with(&Euler, derivative, y0, steps, x0, x_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn single_step_uses_start_slope() {
        let decay = |_x: f64, y: f64| -2.0 * y;
        let next = Euler.advance(&decay, Sample::new(0.0, 3.0), 0.1);

        assert_relative_eq!(next, 2.4);
    }

    #[test]
    fn decay_is_geometric() {
        // Each step multiplies y by (1 - 2h) = 0.8.
        let decay = |_x: f64, y: f64| -2.0 * y;
        let trajectory = solve(&decay, 3.0, 30, 0.0, 3.0).expect("valid spec");

        for (i, sample) in trajectory.iter().enumerate() {
            let i = i32::try_from(i).unwrap();
            assert_relative_eq!(sample.y, 3.0 * 0.8_f64.powi(i), max_relative = 1e-12);
        }
    }

    #[test]
    fn single_step_trajectory() {
        let trajectory = solve(&|x: f64, _y: f64| x, 1.0, 1, 0.0, 2.0).expect("valid spec");

        assert_eq!(trajectory.samples(), [Sample::new(0.0, 1.0), Sample::new(2.0, 1.0)]);
    }
}
