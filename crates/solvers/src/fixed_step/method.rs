use std::{fmt, str::FromStr};

use odestep_core::{Derivative, Sample, Stepper};
use thiserror::Error;

use super::{euler::Euler, heun::Heun, midpoint::Midpoint, rk4::Rk4};

/// A fixed-step method chosen at run time.
///
/// Every variant implements [`Stepper`], so a `Method` can be passed anywhere
/// a concrete stepper is accepted and callers can swap methods without
/// changing call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Method {
    /// Forward Euler (RK1).
    #[cfg_attr(feature = "serde", serde(alias = "rk1"))]
    Euler,
    /// Explicit midpoint (RK2).
    #[cfg_attr(feature = "serde", serde(alias = "rk2"))]
    Midpoint,
    /// Heun's trapezoidal RK2.
    Heun,
    /// Classical fourth-order Runge–Kutta.
    Rk4,
}

/// Error returned when parsing an unknown method name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown method `{0}` (expected euler, midpoint, heun, or rk4)")]
pub struct ParseMethodError(String);

impl Method {
    /// All methods, from lowest to highest order.
    pub const ALL: [Method; 4] = [Method::Euler, Method::Midpoint, Method::Heun, Method::Rk4];

    /// Returns the global order of accuracy.
    #[must_use]
    pub fn order(self) -> u32 {
        match self {
            Method::Euler => 1,
            Method::Midpoint | Method::Heun => 2,
            Method::Rk4 => 4,
        }
    }

    /// Returns the number of derivative evaluations per step.
    #[must_use]
    pub fn evaluations_per_step(self) -> usize {
        match self {
            Method::Euler => 1,
            Method::Midpoint | Method::Heun => 2,
            Method::Rk4 => 4,
        }
    }

    /// Returns the lowercase identifier used for parsing and configuration.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Method::Euler => "euler",
            Method::Midpoint => "midpoint",
            Method::Heun => "heun",
            Method::Rk4 => "rk4",
        }
    }

    /// Returns a short label for column headers and legends.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Method::Euler => "RK1",
            Method::Midpoint => "RK2",
            Method::Heun => "Heun",
            Method::Rk4 => "RK4",
        }
    }
}

impl Stepper for Method {
    fn advance<D: Derivative + ?Sized>(&self, derivative: &D, at: Sample, h: f64) -> f64 {
        match self {
            Method::Euler => Euler.advance(derivative, at, h),
            Method::Midpoint => Midpoint.advance(derivative, at, h),
            Method::Heun => Heun.advance(derivative, at, h),
            Method::Rk4 => Rk4.advance(derivative, at, h),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" | "rk1" => Ok(Method::Euler),
            "midpoint" | "rk2" => Ok(Method::Midpoint),
            "heun" => Ok(Method::Heun),
            "rk4" => Ok(Method::Rk4),
            _ => Err(ParseMethodError(s.to_owned())),
        }
    }
}
