use std::io;

use thiserror::Error;

/// Errors that can occur when building or writing a report.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no trajectories to report")]
    Empty,

    #[error("column `{column}` has {found} values, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("column `{column}` is off the shared x-grid at row {row}")]
    GridMismatch { column: String, row: usize },

    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}
