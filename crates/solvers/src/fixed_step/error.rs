use odestep_core::SpecError;

/// Errors that can occur when solving from raw arguments.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid integration spec: {0}")]
    InvalidSpec(#[from] SpecError),
}
