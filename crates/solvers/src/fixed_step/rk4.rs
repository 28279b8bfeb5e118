//! Classical fourth-order Runge–Kutta.
//!
//! ```text
//! k1      = f(x_n,         y_n)
//! k2      = f(x_n + h/2,   y_n + h/2 * k1)
//! k3      = f(x_n + h/2,   y_n + h/2 * k2)
//! k4      = f(x_n + h,     y_n + h * k3)
//! y_{n+1} = y_n + h/6 * (k1 + 2 k2 + 2 k3 + k4)
//! ```
//!
//! Four evaluations per step, global error O(h⁴).

use odestep_core::{Derivative, Sample, Stepper, Trajectory};

use super::{Error, solve_with};

/// The classical RK4 update rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rk4;

impl Stepper for Rk4 {
    fn advance<D: Derivative + ?Sized>(&self, derivative: &D, at: Sample, h: f64) -> f64 {
        let half = 0.5 * h;
        let k1 = derivative.slope(at.x, at.y);
        let k2 = derivative.slope(at.x + half, at.y + half * k1);
        let k3 = derivative.slope(at.x + half, at.y + half * k2);
        let k4 = derivative.slope(at.x + h, at.y + h * k3);
        at.y + h / 6.0 * (k1 + 2.0 * k2 + 2.0 * k3 + k4)
    }
}

/// Integrates `y' = f(x, y)` from `(x0, y0)` to `x_end` in `steps` RK4 steps.
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
    solve_with(&Rk4, derivative, y0, steps, x0, x_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn integrates_cubic_exactly() {
        // y' = 4x³ gives y = x⁴, which RK4 (Simpson's rule here) resolves exactly.
        let quartic = |x: f64, _y: f64| 4.0 * x.powi(3);
        let trajectory = solve(&quartic, 0.0, 4, 0.0, 2.0).expect("valid spec");

        for sample in &trajectory {
            assert_relative_eq!(sample.y, sample.x.powi(4), epsilon = 1e-12);
        }
    }

    #[test]
    fn decay_step_matches_taylor_polynomial() {
        // For y' = λy one step multiplies y by 1 + z + z²/2 + z³/6 + z⁴/24, z = λh.
        let decay = |_x: f64, y: f64| -2.0 * y;
        let z: f64 = -0.2;
        let factor = 1.0 + z + z * z / 2.0 + z.powi(3) / 6.0 + z.powi(4) / 24.0;

        let next = Rk4.advance(&decay, Sample::new(0.0, 3.0), 0.1);

        assert_relative_eq!(next, 3.0 * factor, max_relative = 1e-14);
    }
}
