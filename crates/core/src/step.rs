use crate::{Derivative, Sample};

/// A single-step update rule for an explicit fixed-step method.
///
/// Implementing this trait enables the generic fixed-step driver to integrate
/// with the method. The driver owns the grid (`x_i = x0 + i * h`), the initial
/// sample, and event emission; the stepper only answers "given the current
/// sample and step size, what is the next `y`?".
///
/// `h` is negative when integrating toward a smaller `x`.
pub trait Stepper {
    /// Returns `y` at `at.x + h`, advanced from `at` using `derivative`.
    #[must_use]
    fn advance<D: Derivative + ?Sized>(&self, derivative: &D, at: Sample, h: f64) -> f64;
}

impl<S: Stepper + ?Sized> Stepper for &S {
    fn advance<D: Derivative + ?Sized>(&self, derivative: &D, at: Sample, h: f64) -> f64 {
        (**self).advance(derivative, at, h)
    }
}
