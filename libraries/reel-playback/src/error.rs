//! Error types for the story viewer

use thiserror::Error;

/// Story viewer errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewerError {
    /// Input arrived while no story was active (before activation or after
    /// the viewer exited to the feed)
    #[error("no story is active")]
    NotActive,

    /// A fetch result was delivered for a generation that is no longer
    /// current and was discarded
    #[error("stale fetch result for generation {0}")]
    StaleGeneration(u64),
}

/// Result type for viewer operations
pub type Result<T> = std::result::Result<T, ViewerError>;
