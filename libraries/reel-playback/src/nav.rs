//! Navigation controller
//!
//! The single source of truth for "what index comes next". Every entry
//! point routes through [`advance`]/[`retreat`]: arrow keys, tap zones,
//! the compact-layout controls, and the clock's completion callback.

use reel_core::StoryRef;

/// Where a forward navigation lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// Another story in the sequence
    Story(StoryRef),

    /// Back to the feed root (end of the sequence, close, or Escape)
    FeedRoot,
}

/// Keyboard surface of the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Previous story
    ArrowLeft,

    /// Next story
    ArrowRight,

    /// Close the viewer
    Escape,

    /// Toggle pause
    Space,
}

/// What an input resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Go to the previous story
    Previous,

    /// Go to the next story
    Next,

    /// Exit to the feed root
    Close,

    /// Toggle the pause flag
    TogglePause,
}

/// Half of the story surface a tap landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapZone {
    /// Left half: previous
    Previous,

    /// Right half: next
    Next,
}

/// Label of the forward control in the compact layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextControl {
    /// More stories remain
    Next,

    /// Last story: the control exits to the feed
    Finish,
}

/// Forward navigation: the next story, or the feed root at the end of the
/// sequence
pub fn advance(current: StoryRef) -> NavTarget {
    match current.next() {
        Some(next) => NavTarget::Story(next),
        None => NavTarget::FeedRoot,
    }
}

/// Backward navigation: the previous story, or `None` at index 1 (no-op)
pub fn retreat(current: StoryRef) -> Option<StoryRef> {
    current.previous()
}

/// Map a key press to its action
pub fn action_for_key(key: Key) -> InputAction {
    match key {
        Key::ArrowLeft => InputAction::Previous,
        Key::ArrowRight => InputAction::Next,
        Key::Escape => InputAction::Close,
        Key::Space => InputAction::TogglePause,
    }
}

/// Resolve a tap at horizontal position `x` on a surface of the given width
pub fn zone_for_tap(x: f32, surface_width: f32) -> TapZone {
    if x < surface_width / 2.0 {
        TapZone::Previous
    } else {
        TapZone::Next
    }
}

/// Whether the compact layout shows a "Previous" control (hidden at index 1)
pub fn shows_previous_control(current: StoryRef) -> bool {
    !current.is_first()
}

/// Which forward control the compact layout shows
pub fn next_control(current: StoryRef) -> NextControl {
    if current.is_last() {
        NextControl::Finish
    } else {
        NextControl::Next
    }
}
