//! Explicit fixed-step solvers for scalar ODEs `y'(x) = f(x, y)`.
//!
//! All methods share one driver in [`fixed_step`] and differ only in their
//! [`Stepper`] rule:
//!
//! - [`euler`]: first order, one evaluation per step
//! - [`midpoint`]: second order, slope taken at the middle of the step
//! - [`heun`]: second order, average of start and predicted end slopes
//! - [`rk4`]: classical fourth order
//!
//! [`Stepper`]: odestep_core::Stepper

pub mod fixed_step;

pub use fixed_step::{Method, euler, heun, midpoint, rk4};
