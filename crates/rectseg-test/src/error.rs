//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing regression test inputs
#[derive(Debug, Error)]
pub enum TestError {
    /// Synthetic image parameters do not describe a valid image
    #[error("invalid test image '{name}': {message}")]
    InvalidImage { name: String, message: String },

    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
