/// The right-hand side of a first-order ODE `y'(x) = f(x, y)`.
///
/// Implementations must be deterministic: solvers call [`slope`] any number of
/// times, at whatever `(x, y)` pairs the method generates, and expect the same
/// answer for the same arguments.
///
/// Non-finite results are not rejected. If `f` has a singularity inside the
/// integration interval, the NaN or infinity flows into the trajectory and it
/// is up to the caller to choose a well-posed interval.
///
/// Any `Fn(f64, f64) -> f64` closure is a `Derivative`:
///
/// ```
/// use odestep_core::Derivative;
///
/// let decay = |_x: f64, y: f64| -2.0 * y;
/// assert_eq!(decay.slope(0.0, 3.0), -6.0);
/// ```
///
/// [`slope`]: Derivative::slope
pub trait Derivative {
    /// Returns `dy/dx` at the point `(x, y)`.
    fn slope(&self, x: f64, y: f64) -> f64;
}

/// Blanket implementation for derivative closures.
impl<F> Derivative for F
where
    F: Fn(f64, f64) -> f64,
{
    fn slope(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// f(x, y) = -y/x - 2/x²
    struct InverseSquare;

    impl Derivative for InverseSquare {
        fn slope(&self, x: f64, y: f64) -> f64 {
            -y / x - 2.0 / (x * x)
        }
    }

    fn slope_via_trait(f: &impl Derivative, x: f64, y: f64) -> f64 {
        f.slope(x, y)
    }

    #[test]
    fn closures_are_derivatives() {
        let linear = |x: f64, y: f64| 2.0 * x - 1.0 - 3.0 * y;
        assert_eq!(slope_via_trait(&linear, 1.0, 1.0), -2.0);
    }

    #[test]
    fn structs_are_derivatives() {
        assert_eq!(slope_via_trait(&InverseSquare, 1.0, 2.0), -4.0);
    }

    #[test]
    fn singularities_are_not_masked() {
        assert!(!InverseSquare.slope(0.0, 2.0).is_finite());
    }
}
