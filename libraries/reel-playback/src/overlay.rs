//! Interaction overlay
//!
//! Transient presentation state: hover/touch-revealed controls and the
//! like/save toggles. Purely a projection; the only coupling to playback
//! is that an image tap pauses first and hides the overlay second.

use reel_core::StoryRef;
use serde::{Deserialize, Serialize};

/// Per-story interaction state.
///
/// `liked`/`saved` are scoped to the current story and reset on every
/// navigation. `controls_visible` tracks pointer/touch presence and
/// survives navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionState {
    /// Story is liked (session-local, per story)
    pub liked: bool,

    /// Story is saved (session-local, per story)
    pub saved: bool,

    /// Overlay controls are revealed
    pub controls_visible: bool,
}

impl InteractionState {
    /// Fresh state for viewer activation
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the per-story toggles; overlay visibility survives navigation
    pub fn reset_for_story(&mut self) {
        self.liked = false;
        self.saved = false;
    }

    /// Pointer entered or touch started: reveal the controls.
    /// Returns whether visibility changed.
    pub fn show_controls(&mut self) -> bool {
        let changed = !self.controls_visible;
        self.controls_visible = true;
        changed
    }

    /// Pointer left (or the image was tapped): hide the controls.
    /// Returns whether visibility changed.
    pub fn hide_controls(&mut self) -> bool {
        let changed = self.controls_visible;
        self.controls_visible = false;
        changed
    }

    /// Flip the like toggle, returning the new value
    pub fn toggle_liked(&mut self) -> bool {
        self.liked = !self.liked;
        self.liked
    }

    /// Flip the save toggle, returning the new value
    pub fn toggle_saved(&mut self) -> bool {
        self.saved = !self.saved;
        self.saved
    }
}

/// Outbound hooks for like/save/comment.
///
/// A backend-integration layer implements this to deliver interactions to a
/// server; every method defaults to a no-op, so an unbound viewer only
/// mutates local state. Delivery itself is outside this subsystem.
pub trait InteractionSink: Send {
    /// The like toggle flipped for `story`
    fn like_toggled(&mut self, story: StoryRef, liked: bool) {
        let _ = (story, liked);
    }

    /// The save toggle flipped for `story`
    fn save_toggled(&mut self, story: StoryRef, saved: bool) {
        let _ = (story, saved);
    }

    /// The comment affordance was invoked for `story`
    fn comment_requested(&mut self, story: StoryRef) {
        let _ = story;
    }
}
