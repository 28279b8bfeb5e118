use thiserror::Error;

use crate::Sample;

/// Errors that can occur when validating an [`IntegrationSpec`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SpecError {
    /// At least one step is required.
    #[error("steps must be at least 1")]
    ZeroSteps,

    /// The interval has zero length, giving a zero step size.
    #[error("x_end must differ from x0")]
    ZeroLength,

    /// One or both interval bounds are non-finite.
    #[error("x0 and x_end must be finite")]
    NonFiniteBound,
}

/// A validated fixed-step integration request.
///
/// Holds the initial condition `(x0, y0)`, the number of steps, and the end of
/// the interval. The interval may run in either direction; a decreasing
/// interval (`x_end < x0`) gives a negative step size.
///
/// The initial `y0` is not checked. A non-finite `y0` is a caller choice that
/// simply propagates through the solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationSpec {
    y0: f64,
    steps: usize,
    x0: f64,
    x_end: f64,
}

impl IntegrationSpec {
    /// Creates a new spec, rejecting degenerate intervals before any stepping.
    ///
    /// Arguments follow the conventional `(y0, steps, x0, x_end)` order.
    ///
    /// # Errors
    ///
    /// Returns an error if `steps` is zero, if either bound is non-finite, or
    /// if `x0 == x_end`.
    pub fn new(y0: f64, steps: usize, x0: f64, x_end: f64) -> Result<Self, SpecError> {
        if steps == 0 {
            return Err(SpecError::ZeroSteps);
        }
        if !x0.is_finite() || !x_end.is_finite() {
            return Err(SpecError::NonFiniteBound);
        }
        if x0 == x_end {
            return Err(SpecError::ZeroLength);
        }

        Ok(Self {
            y0,
            steps,
            x0,
            x_end,
        })
    }

    /// Returns the initial value of the dependent variable.
    #[must_use]
    pub fn y0(&self) -> f64 {
        self.y0
    }

    /// Returns the number of integration steps.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the start of the interval.
    #[must_use]
    pub fn x0(&self) -> f64 {
        self.x0
    }

    /// Returns the requested end of the interval.
    #[must_use]
    pub fn x_end(&self) -> f64 {
        self.x_end
    }

    /// Returns the initial condition as a sample.
    #[must_use]
    pub fn initial(&self) -> Sample {
        Sample::new(self.x0, self.y0)
    }

    /// Returns the constant step size `h = (x_end - x0) / steps`.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let steps = self.steps as f64;
        (self.x_end - self.x0) / steps
    }

    /// Returns the grid point `x0 + i * h`.
    ///
    /// Index 0 is exactly `x0`. Index `steps` is `x0 + steps * h`, which equals
    /// `x_end` mathematically but may differ from it in the last bit.
    #[must_use]
    pub fn x_at(&self, i: usize) -> f64 {
        if i == 0 {
            return self.x0;
        }
        #[allow(clippy::cast_precision_loss)]
        let i = i as f64;
        self.x0 + i * self.step_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rejects_zero_steps() {
        assert_eq!(
            IntegrationSpec::new(3.0, 0, 0.0, 3.0),
            Err(SpecError::ZeroSteps)
        );
    }

    #[test]
    fn rejects_zero_length_interval() {
        assert_eq!(
            IntegrationSpec::new(3.0, 10, 1.5, 1.5),
            Err(SpecError::ZeroLength)
        );
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert_eq!(
            IntegrationSpec::new(3.0, 10, 0.0, f64::INFINITY),
            Err(SpecError::NonFiniteBound)
        );
        assert_eq!(
            IntegrationSpec::new(3.0, 10, f64::NAN, 1.0),
            Err(SpecError::NonFiniteBound)
        );
    }

    #[test]
    fn accepts_non_finite_initial_value() {
        let spec = IntegrationSpec::new(f64::NAN, 1, 0.0, 1.0).expect("y0 is unchecked");
        assert!(spec.y0().is_nan());
    }

    #[test]
    fn step_size_and_grid() {
        let spec = IntegrationSpec::new(3.0, 30, 0.0, 3.0).unwrap();

        assert_relative_eq!(spec.step_size(), 0.1);
        assert_eq!(spec.x_at(0), 0.0);
        assert_relative_eq!(spec.x_at(15), 1.5);
        assert_relative_eq!(spec.x_at(30), 3.0, epsilon = 1e-12);
        assert_eq!(spec.initial(), Sample::new(0.0, 3.0));
    }

    #[test]
    fn decreasing_interval_has_negative_step() {
        let spec = IntegrationSpec::new(1.0, 4, 2.0, 0.0).unwrap();

        assert_relative_eq!(spec.step_size(), -0.5);
        assert_relative_eq!(spec.x_at(4), 0.0);
    }
}
