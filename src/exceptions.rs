//! Error types for packinstr

use crate::exit_codes::{EXIT_ENCODING_ERROR, EXIT_IO_ERROR, EXIT_VALIDATION_ERROR};
use std::fmt;

/// Main error type for packinstr operations
#[derive(Debug)]
pub enum PackError {
    /// Input rejected when an instruction or key/value pair was constructed
    Validation(String),

    /// Output could not be encoded
    Encoding(String),

    /// IO error
    Io(std::io::Error),
}

impl PackError {
    /// Exit code a binary should report for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PackError::Validation(_) => EXIT_VALIDATION_ERROR,
            PackError::Encoding(_) => EXIT_ENCODING_ERROR,
            PackError::Io(_) => EXIT_IO_ERROR,
        }
    }
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackError::Validation(msg) => write!(f, "Validation error: {msg}"),
            PackError::Encoding(msg) => write!(f, "Encoding error: {msg}"),
            PackError::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for PackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PackError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PackError {
    fn from(err: std::io::Error) -> Self {
        PackError::Io(err)
    }
}

impl From<serde_json::Error> for PackError {
    fn from(err: serde_json::Error) -> Self {
        PackError::Encoding(err.to_string())
    }
}

/// Result type for packinstr operations
pub type Result<T> = std::result::Result<T, PackError>;
