//! Reel Core
//!
//! Platform-agnostic core types for Reel's story subsystem.
//!
//! This crate provides the foundational building blocks shared by the
//! playback state machine, the feed HTTP client, and the async viewer
//! driver:
//! - **`StoryRef`**: the validated (index, total) pair identifying which
//!   story is being viewed and how many exist in the sequence
//! - **`StoryContent`**: the media payload fetched for a single story
//! - **`RailStory`**: one entry of the stories-rail listing
//!
//! # Example
//!
//! ```rust
//! use reel_core::types::StoryRef;
//!
//! let story = StoryRef::new(2, 5).expect("2 of 5 is in range");
//! assert!(!story.is_first());
//! assert_eq!(story.next().unwrap().index(), 3);
//! ```

#![forbid(unsafe_code)]

pub mod types;

// Re-export commonly used types
pub use types::{RailStory, StoryContent, StoryRef, StoryRefError};
