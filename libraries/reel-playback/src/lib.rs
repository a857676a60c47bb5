//! Reel - Story Playback
//!
//! Platform-agnostic story playback state machine for Reel.
//!
//! This crate provides:
//! - Entry guarding (rail context + index range, redirect on violation)
//! - Per-story loading state with stale-response protection
//! - The auto-advance progress clock (pause/resume, idempotent completion)
//! - Navigation (keyboard, tap zones, compact controls, auto-advance)
//! - The interaction overlay (like/save/comment, hover-revealed controls)
//!
//! # Architecture
//!
//! `reel-playback` is completely platform-agnostic:
//! - No HTTP client and no timers; fetches and ticks are injected
//! - No dependency on any UI shell
//!
//! The platform layer drives the [`StoryViewer`] with input events and timer
//! ticks, performs the side effects it requests via [`Directive`] values,
//! and renders from its state queries and [`ViewerEvent`] queue.
//!
//! # Example
//!
//! ```rust
//! use reel_core::StoryContent;
//! use reel_playback::{Directive, EntryRequest, StoryViewer};
//!
//! let mut viewer = StoryViewer::default();
//!
//! // Enter story 1 of 3 from the stories rail
//! let Directive::Load(request) = viewer.activate(&EntryRequest::from_rail(1, 3)) else {
//!     panic!("valid rail entry loads");
//! };
//!
//! // The platform fetches `GET /stories/1` and reports back
//! viewer
//!     .loaded(
//!         request.generation,
//!         Ok(StoryContent {
//!             image: "https://cdn.example.com/s/1.jpg".into(),
//!             avatar: "https://cdn.example.com/a/1.jpg".into(),
//!             username: "alice".into(),
//!             title: None,
//!             description: None,
//!         }),
//!     )
//!     .unwrap();
//!
//! // Each timer tick advances the progress indicator toward auto-advance
//! assert!(viewer.is_playing());
//! viewer.tick();
//! assert!(viewer.progress() > 0.0);
//! ```

mod clock;
mod error;
mod events;
pub mod guard;
mod nav;
mod overlay;
mod types;
mod viewer;

// Public exports
pub use clock::{ClockTick, ProgressClock};
pub use error::{Result, ViewerError};
pub use events::ViewerEvent;
pub use guard::GuardOutcome;
pub use nav::{
    action_for_key, advance, next_control, retreat, shows_previous_control, zone_for_tap,
    InputAction, Key, NavTarget, NextControl, TapZone,
};
pub use overlay::{InteractionSink, InteractionState};
pub use types::{EntryRequest, LoadState, ViewerConfig};
pub use viewer::{Directive, LoadRequest, StoryViewer};
