//! Search options and worker pool setup

use crate::error::{SearchError, SearchResult};
use rayon::ThreadPoolBuilder;

/// Search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Score every rectangle across all three color channels
    #[default]
    Direct,
    /// Find the best shape on the first channel, then its position
    ShapeThenPosition,
}

impl Strategy {
    /// Natural strategy for an image with `channels` meaningful channels
    ///
    /// Single-channel images use the shape-then-position search, anything
    /// else the direct search.
    pub fn for_channels(channels: usize) -> Self {
        if channels == 1 {
            Self::ShapeThenPosition
        } else {
            Self::Direct
        }
    }
}

/// Options for a rectangle search
#[derive(Debug, Clone)]
pub struct SegmentOptions {
    /// Worker count; `None` runs on the global rayon pool
    pub threads: Option<usize>,
    /// Minimum number of shapes handed to a worker at once
    pub chunk_size: usize,
    /// Search strategy
    pub strategy: Strategy,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            threads: None,
            chunk_size: 2,
            strategy: Strategy::Direct,
        }
    }
}

impl SegmentOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Run on a dedicated pool of `threads` workers
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Set the scheduling chunk size
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the search strategy
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Check the options for values the search cannot run with
    pub fn validate(&self) -> SearchResult<()> {
        if self.threads == Some(0) {
            return Err(SearchError::InvalidParameters(
                "thread count must be at least 1".into(),
            ));
        }
        if self.chunk_size == 0 {
            return Err(SearchError::InvalidParameters(
                "chunk size must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Number of workers the search will use
    pub fn worker_count(&self) -> usize {
        self.threads.unwrap_or_else(rayon::current_num_threads)
    }

    /// Run `op` on the pool these options describe
    ///
    /// A dedicated pool lives only for the duration of `op`.
    pub(crate) fn install<R, F>(&self, op: F) -> SearchResult<R>
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        match self.threads {
            None => Ok(op()),
            Some(threads) => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|idx| format!("rectseg-worker-{idx}"))
                    .build()
                    .map_err(|err| SearchError::ThreadPool(err.to_string()))?;
                Ok(pool.install(op))
            }
        }
    }
}
