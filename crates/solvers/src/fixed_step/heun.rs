//! Heun's method, the trapezoidal second-order Runge–Kutta variant.
//!
//! ```text
//! k1      = f(x_n, y_n)
//! k2      = f(x_n + h, y_n + h * k1)
//! y_{n+1} = y_n + h * (k1 + k2) / 2
//! ```
//!
//! Predicts the end of the step with Euler, then averages the start and end
//! slopes. Same order as [`midpoint`](super::midpoint) with a different error
//! constant; for linear autonomous problems the two coincide.

use odestep_core::{Derivative, Sample, Stepper, Trajectory};

use super::{Error, solve_with};

/// Heun's predictor-corrector update rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Heun;

impl Stepper for Heun {
    fn advance<D: Derivative + ?Sized>(&self, derivative: &D, at: Sample, h: f64) -> f64 {
        let k1 = derivative.slope(at.x, at.y);
        let k2 = derivative.slope(at.x + h, at.y + h * k1);
        at.y + 0.5 * h * (k1 + k2)
    }
}

/// Integrates `y' = f(x, y)` from `(x0, y0)` to `x_end` in `steps` Heun steps.
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
    solve_with(&Heun, derivative, y0, steps, x0, x_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::fixed_step::midpoint;

    #[test]
    fn single_step_averages_slopes() {
        // k1 = 1 at x = 0, k2 = 3 at x = 1 for y' = 1 + 2x.
        let line = |x: f64, _y: f64| 1.0 + 2.0 * x;
        let next = Heun.advance(&line, Sample::new(0.0, 0.0), 1.0);

        assert_relative_eq!(next, 2.0);
    }

    #[test]
    fn matches_midpoint_on_linear_autonomous_problem() {
        let decay = |_x: f64, y: f64| -2.0 * y;
        let heun = solve(&decay, 3.0, 30, 0.0, 3.0).unwrap();
        let midpoint = midpoint::solve(&decay, 3.0, 30, 0.0, 3.0).unwrap();

        for (a, b) in heun.iter().zip(&midpoint) {
            assert_relative_eq!(a.y, b.y, max_relative = 1e-12);
        }
    }

    #[test]
    fn differs_from_midpoint_when_slope_depends_on_x() {
        let inverse_square = |x: f64, y: f64| -y / x - 2.0 / (x * x);
        let heun = solve(&inverse_square, 2.0, 10, 1.0, 10.0).unwrap();
        let midpoint = midpoint::solve(&inverse_square, 2.0, 10, 1.0, 10.0).unwrap();

        assert!((heun.last().unwrap().y - midpoint.last().unwrap().y).abs() > 1e-6);
    }
}
