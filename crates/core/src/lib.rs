//! Core traits and types for fixed-step ODE integration.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! reports build on:
//!
//! - [`Derivative`]: the right-hand side `f(x, y)` of `y' = f(x, y)`
//! - [`IntegrationSpec`]: a validated initial condition, step count, and end point
//! - [`Sample`] and [`Trajectory`]: the points a solver produces
//! - [`Stepper`]: a single-step update rule shared by all fixed-step methods
//! - [`Observer`]: receives solver events and optionally returns control actions

mod derivative;
mod observer;
mod problem;
mod sample;
mod step;
mod trajectory;

pub use derivative::Derivative;
pub use observer::Observer;
pub use problem::{IntegrationSpec, SpecError};
pub use sample::Sample;
pub use step::Stepper;
pub use trajectory::Trajectory;
