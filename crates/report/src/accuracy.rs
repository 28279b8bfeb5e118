//! Error measurements against a closed-form solution.
//!
//! ```ignore
//! let profiles = vec![
//!     ErrorProfile::new("RK1", &rk1, exact),
//!     ErrorProfile::new("RK4", &rk4, exact),
//! ];
//! println!("{}", Summary::new(profiles));
//! ```
//!
//! prints
//!
//! ```text
//! RK1  max |error| = 1.2060e-1  final |error| = 3.7224e-3
//! RK4  max |error| = 1.7391e-5  final |error| = 7.0310e-7
//! RK4 vs RK1: 5294.3x more accurate
//! ```

use std::fmt;

use odestep_core::Trajectory;

/// Absolute error of one trajectory at each of its samples.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorProfile {
    name: String,
    errors: Vec<[f64; 2]>,
}

impl ErrorProfile {
    /// Measures `|y_i - exact(x_i)|` at every sample of `trajectory`.
    pub fn new(
        name: impl Into<String>,
        trajectory: &Trajectory,
        exact: impl Fn(f64) -> f64,
    ) -> Self {
        let errors = trajectory
            .iter()
            .map(|s| [s.x, (s.y - exact(s.x)).abs()])
            .collect();
        Self {
            name: name.into(),
            errors,
        }
    }

    /// Returns the name given at construction.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `[x, |error|]` pairs, ready for plotting.
    #[must_use]
    pub fn errors(&self) -> &[[f64; 2]] {
        &self.errors
    }

    /// Returns the largest error over the trajectory.
    ///
    /// NaN errors are treated as larger than any number.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.errors
            .iter()
            .map(|e| e[1])
            .fold(0.0, |max, e| if e.is_nan() || e > max { e } else { max })
    }

    /// Returns the error at the last sample, or zero for an empty trajectory.
    #[must_use]
    pub fn last(&self) -> f64 {
        self.errors.last().map_or(0.0, |e| e[1])
    }

    /// Returns how many times smaller this profile's final error is than `other`'s.
    #[must_use]
    pub fn improvement_over(&self, other: &ErrorProfile) -> f64 {
        other.last() / self.last()
    }
}

/// Error profiles for several methods on the same problem.
///
/// The `Display` impl prints one line per profile followed by how the most
/// accurate method compares with each of the others.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    profiles: Vec<ErrorProfile>,
}

impl Summary {
    #[must_use]
    pub fn new(profiles: Vec<ErrorProfile>) -> Self {
        Self { profiles }
    }

    /// Returns the profiles in the order given.
    #[must_use]
    pub fn profiles(&self) -> &[ErrorProfile] {
        &self.profiles
    }

    /// Returns the profile with the smallest final error.
    #[must_use]
    pub fn best(&self) -> Option<&ErrorProfile> {
        self.profiles
            .iter()
            .filter(|p| !p.last().is_nan())
            .min_by(|a, b| a.last().total_cmp(&b.last()))
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.profiles.iter().map(|p| p.name.len()).max().unwrap_or(0);

        for p in &self.profiles {
            writeln!(
                f,
                "{:<width$}  max |error| = {:.4e}  final |error| = {:.4e}",
                p.name,
                p.max(),
                p.last(),
            )?;
        }

        if let Some(best) = self.best() {
            for other in self.profiles.iter().filter(|p| p.name != best.name) {
                if best.last() == 0.0 {
                    writeln!(f, "{} vs {}: exact (final |error| = 0)", best.name, other.name)?;
                } else {
                    writeln!(
                        f,
                        "{} vs {}: {:.1}x more accurate",
                        best.name,
                        other.name,
                        best.improvement_over(other),
                    )?;
                }
            }
        }
        Ok(())
    }
}
