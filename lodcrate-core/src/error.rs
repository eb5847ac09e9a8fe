//! Error types for lodcrate

use thiserror::Error;

/// Main error type for lodcrate operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// An internal invariant of the simplification engine did not hold.
    /// Never recoverable by retrying the same step.
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for lodcrate operations
pub type Result<T> = std::result::Result<T, Error>;
