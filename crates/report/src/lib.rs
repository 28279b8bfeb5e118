//! Tabular output and accuracy summaries for odestep trajectories.
//!
//! - [`Table`] lines trajectories up on a shared x-grid and writes them as
//!   whitespace-aligned columns or CSV.
//! - [`accuracy`] measures trajectories against a closed-form solution.

pub mod accuracy;

mod error;
mod table;

pub use error::Error;
pub use table::{Format, ParseFormatError, Table};
