//! Viewer events
//!
//! Event-based communication for UI synchronization. Events are queued by
//! the viewer as transitions happen and drained by the platform layer via
//! [`crate::StoryViewer::take_events`].

use serde::{Deserialize, Serialize};

/// Events emitted by the story viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewerEvent {
    /// The viewer moved to a new story (activation or navigation)
    StoryChanged {
        /// Index of the story now loading
        index: u32,
        /// Total stories in the sequence
        total: u32,
    },

    /// The current story's content arrived
    StoryLoaded {
        /// Index of the loaded story
        index: u32,
    },

    /// The current story's fetch failed
    LoadFailed {
        /// Human-readable failure message
        message: String,
    },

    /// Progress indicator advanced
    ProgressUpdated {
        /// Progress percentage (0 to 100)
        progress: f32,
    },

    /// The current story's countdown reached 100
    StoryCompleted {
        /// Index of the completed story
        index: u32,
    },

    /// The pause flag flipped
    PausedChanged {
        /// New pause state
        paused: bool,
    },

    /// The viewer redirected to the feed root
    RedirectedToFeed {
        /// Whether the navigation entry was replaced (invalid-entry guard)
        replace: bool,
    },

    /// Overlay controls were revealed or hidden
    ControlsVisibilityChanged {
        /// New visibility
        visible: bool,
    },

    /// The like toggle flipped
    LikeToggled {
        /// Story the toggle applies to
        index: u32,
        /// New value
        liked: bool,
    },

    /// The save toggle flipped
    SaveToggled {
        /// Story the toggle applies to
        index: u32,
        /// New value
        saved: bool,
    },

    /// The comment affordance was invoked
    CommentRequested {
        /// Story the request applies to
        index: u32,
    },
}
