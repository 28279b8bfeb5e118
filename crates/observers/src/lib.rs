//! Observers for the odestep fixed-step driver.
//!
//! Everything here works through the capability traits in [`traits`], so an
//! observer written once applies to any event that carries a sample.
//!
//! - [`StepLog`] prints a line per step to any [`std::io::Write`].
//! - [`NonFiniteGuard`] stops a solve at the first NaN or infinite `y`.
//!
//! With the `plot` feature (which pulls in `eframe` and `egui_plot`):
//!
//! - `PlotObserver` records one line per solve while it runs.
//! - `ComparisonPlot` overlays finished trajectories on an exact solution.

pub mod traits;

mod guard;
mod step_log;

pub use guard::NonFiniteGuard;
pub use step_log::StepLog;

#[cfg(feature = "plot")]
mod comparison;
#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use comparison::{ComparisonPlot, Marker};
#[cfg(feature = "plot")]
pub use plot::{PlotObserver, ShowConfig, Trace};
