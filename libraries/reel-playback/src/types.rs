//! Core types for the story viewer

use reel_core::StoryContent;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The raw navigation trigger that activates the viewer.
///
/// `index`/`total` stay optional so that missing or non-numeric route
/// parameters are representable; the entry guard decides what to do with
/// them. `from_rail` is the context flag proving the request came from the
/// stories rail rather than a bare deep link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRequest {
    /// Requested story index (one-based)
    pub index: Option<u32>,

    /// Total stories in the sequence
    pub total: Option<u32>,

    /// Whether the request carries the stories-rail context
    pub from_rail: bool,
}

impl EntryRequest {
    /// Build the legitimate trigger issued by the stories rail
    pub fn from_rail(index: u32, total: u32) -> Self {
        Self {
            index: Some(index),
            total: Some(total),
            from_rail: true,
        }
    }

    /// Build a bare deep-link request (no rail context)
    pub fn deep_link(index: u32, total: u32) -> Self {
        Self {
            index: Some(index),
            total: Some(total),
            from_rail: false,
        }
    }

    /// Parse raw route parameters. Non-numeric values become `None` and are
    /// rejected by the guard.
    pub fn from_params(index: &str, total: &str, from_rail: bool) -> Self {
        Self {
            index: index.trim().parse().ok(),
            total: total.trim().parse().ok(),
            from_rail,
        }
    }
}

/// Loader state for the current story
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadState {
    /// Fetch in flight
    Loading,

    /// Story content available
    Ready(StoryContent),

    /// Fetch failed; absorbing until the viewer navigates
    Failed(String),
}

impl LoadState {
    /// Whether content is available
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Whether the fetch failed
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The loaded content, if any
    pub fn content(&self) -> Option<&StoryContent> {
        match self {
            Self::Ready(content) => Some(content),
            _ => None,
        }
    }

    /// The failure message, if any
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Configuration for the story viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// How long each story plays before auto-advancing (default: 8s)
    pub story_duration: Duration,

    /// Progress sampling interval (default: 100ms)
    pub tick_interval: Duration,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            story_duration: Duration::from_millis(8000),
            tick_interval: Duration::from_millis(100),
        }
    }
}
