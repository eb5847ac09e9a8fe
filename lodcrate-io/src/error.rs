//! Error types for I/O operations

use thiserror::Error;

/// Errors that can occur during I/O operations
#[derive(Error, Debug)]
pub enum IoError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Mesh has {count} unique vertices, more than a 16-bit index buffer can address")]
    TooManyVertices { count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<IoError> for lodcrate_core::Error {
    fn from(e: IoError) -> Self {
        match e {
            IoError::Io(io) => lodcrate_core::Error::Io(io),
            IoError::FileNotFound { path } => lodcrate_core::Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("file not found: {path}"),
            )),
            other => lodcrate_core::Error::InvalidData(other.to_string()),
        }
    }
}
