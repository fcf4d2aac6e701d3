//! Error types for rectseg-core
//!
//! Provides a unified error type for the core data structures. The numeric
//! search itself never fails; these variants only arise when a caller hands
//! over a buffer or rectangle that does not describe a valid image region.

use thiserror::Error;

/// rectseg-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Pixel buffer length does not match the image dimensions
    #[error("pixel buffer length mismatch: expected {expected} values, got {actual}")]
    BufferLength { expected: usize, actual: usize },

    /// Image dimensions overflow the addressable buffer size
    #[error("image dimensions overflow: {ny}x{nx}")]
    DimensionOverflow { ny: usize, nx: usize },

    /// Rectangle corners are out of order
    #[error("invalid rectangle: ({y0}, {x0}) .. ({y1}, {x1})")]
    InvalidRect {
        y0: usize,
        x0: usize,
        y1: usize,
        x1: usize,
    },
}

/// Result type alias for rectseg-core operations
pub type Result<T> = std::result::Result<T, Error>;
