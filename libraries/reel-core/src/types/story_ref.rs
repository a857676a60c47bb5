//! Story sequence position

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error building a [`StoryRef`]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoryRefError {
    /// Index is zero or greater than the sequence length
    #[error("story index {index} is outside 1..={total}")]
    OutOfRange {
        /// Requested story index
        index: u32,
        /// Total stories in the sequence
        total: u32,
    },
}

/// Which story out of how many.
///
/// Identifies a position in a stories sequence. The invariant
/// `1 <= index <= total` always holds; navigation produces new refs rather
/// than mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRef {
    index: u32,
    total: u32,
}

impl StoryRef {
    /// Create a story ref, validating `1 <= index <= total`
    pub fn new(index: u32, total: u32) -> Result<Self, StoryRefError> {
        if index == 0 || index > total {
            return Err(StoryRefError::OutOfRange { index, total });
        }
        Ok(Self { index, total })
    }

    /// One-based position in the sequence
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Total stories in the sequence
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Whether this is the first story
    pub fn is_first(&self) -> bool {
        self.index == 1
    }

    /// Whether this is the last story
    pub fn is_last(&self) -> bool {
        self.index == self.total
    }

    /// The ref one position forward, or `None` at the end of the sequence
    pub fn next(&self) -> Option<Self> {
        if self.is_last() {
            None
        } else {
            Some(Self {
                index: self.index + 1,
                total: self.total,
            })
        }
    }

    /// The ref one position back, or `None` at the start of the sequence
    pub fn previous(&self) -> Option<Self> {
        if self.is_first() {
            None
        } else {
            Some(Self {
                index: self.index - 1,
                total: self.total,
            })
        }
    }
}

impl std::fmt::Display for StoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.index, self.total)
    }
}
