//! Error types for rectseg-search

use thiserror::Error;

/// Errors that can occur when setting up a rectangle search
#[derive(Debug, Error)]
pub enum SearchError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rectseg_core::Error),

    /// Invalid search options
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Worker pool could not be created
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;
