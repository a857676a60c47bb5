//! Story viewer - core orchestration
//!
//! Coordinates the entry guard, loader state, playback clock, navigation,
//! and interaction overlay for the single live viewer instance.
//!
//! The viewer is platform-agnostic: it never fetches or sleeps. Mutating
//! operations return a [`Directive`] telling the platform layer what side
//! effect to perform (fetch a story, or leave the viewer), and UI-facing
//! transitions queue [`ViewerEvent`]s drained with [`StoryViewer::take_events`].

use crate::{
    clock::{ClockTick, ProgressClock},
    error::{Result, ViewerError},
    events::ViewerEvent,
    guard::{self, GuardOutcome},
    nav::{self, InputAction, Key, NavTarget, TapZone},
    overlay::{InteractionSink, InteractionState},
    types::{EntryRequest, LoadState, ViewerConfig},
};
use reel_core::{StoryContent, StoryRef};

/// A fetch the platform layer must perform.
///
/// The generation tags the request so a response that arrives after the
/// viewer has moved on is discarded rather than applied to the wrong story.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    /// Story to fetch
    pub story: StoryRef,

    /// Generation the result must match to be applied
    pub generation: u64,
}

/// Side effect requested from the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Nothing to do
    None,

    /// Fetch a story and report back via [`StoryViewer::loaded`]
    Load(LoadRequest),

    /// Tear the viewer down and navigate to the feed root
    ExitToFeed {
        /// Whether to replace the current navigation entry
        replace: bool,
    },
}

/// Central story viewer state machine.
///
/// Owns the current story ref, loader state, progress clock, and
/// interaction overlay. Exactly one instance is live per viewing session;
/// after it exits to the feed it stays inert.
pub struct StoryViewer {
    config: ViewerConfig,

    // Per-story state
    current: Option<StoryRef>,
    load: LoadState,
    clock: ProgressClock,
    interactions: InteractionState,

    // Stale-response protection: bumped on every navigation
    generation: u64,

    // Event queue for UI synchronization
    pending_events: Vec<ViewerEvent>,

    // Outbound interaction hooks (optional)
    sink: Option<Box<dyn InteractionSink>>,

    // Set once the viewer has redirected to the feed root
    exited: bool,
}

impl StoryViewer {
    /// Create a viewer with the given timing configuration
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            clock: ProgressClock::new(&config),
            config,
            current: None,
            load: LoadState::Loading,
            interactions: InteractionState::new(),
            generation: 0,
            pending_events: Vec::new(),
            sink: None,
            exited: false,
        }
    }

    /// Bind outbound interaction hooks
    pub fn set_interaction_sink(&mut self, sink: Box<dyn InteractionSink>) {
        self.sink = Some(sink);
    }

    // ===== Activation & Navigation =====

    /// Activate the viewer from a navigation trigger.
    ///
    /// Runs the entry guard once for this request; an invalid entry
    /// redirects without issuing any fetch.
    pub fn activate(&mut self, request: &EntryRequest) -> Directive {
        match guard::check(request) {
            GuardOutcome::Enter(story) => self.begin_story(story),
            GuardOutcome::RedirectReplace => self.exit_to_feed(true),
            GuardOutcome::Redirect => self.exit_to_feed(false),
        }
    }

    /// Go to the next story, or exit to the feed at the end of the sequence
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Directive {
        let Some(story) = self.active_story() else {
            return Directive::None;
        };
        self.advance_from(story)
    }

    /// Go to the previous story; a no-op at index 1
    pub fn previous(&mut self) -> Directive {
        let Some(story) = self.active_story() else {
            return Directive::None;
        };
        match nav::retreat(story) {
            Some(prev) => self.begin_story(prev),
            None => Directive::None,
        }
    }

    /// Close the viewer and return to the feed root
    pub fn close(&mut self) -> Directive {
        if self.exited {
            return Directive::None;
        }
        self.exit_to_feed(false)
    }

    /// Internal: start a new story. Everything per-story is re-derived:
    /// progress to 0, like/save toggles cleared, the previous story's clock
    /// and in-flight fetch invalidated.
    fn begin_story(&mut self, story: StoryRef) -> Directive {
        if self.clock.is_paused() {
            self.emit(ViewerEvent::PausedChanged { paused: false });
        }

        self.generation += 1;
        self.current = Some(story);
        self.load = LoadState::Loading;
        self.clock.restart();
        self.interactions.reset_for_story();

        self.emit(ViewerEvent::StoryChanged {
            index: story.index(),
            total: story.total(),
        });

        Directive::Load(LoadRequest {
            story,
            generation: self.generation,
        })
    }

    fn advance_from(&mut self, story: StoryRef) -> Directive {
        match nav::advance(story) {
            NavTarget::Story(next) => self.begin_story(next),
            NavTarget::FeedRoot => self.exit_to_feed(false),
        }
    }

    fn exit_to_feed(&mut self, replace: bool) -> Directive {
        self.exited = true;
        self.current = None;
        // Invalidate any in-flight fetch
        self.generation += 1;
        self.emit(ViewerEvent::RedirectedToFeed { replace });
        Directive::ExitToFeed { replace }
    }

    // ===== Loading =====

    /// Apply a fetch result.
    ///
    /// A result tagged with a generation other than the current one belongs
    /// to a story the viewer already left; it is discarded and reported as
    /// [`ViewerError::StaleGeneration`].
    pub fn loaded(
        &mut self,
        generation: u64,
        result: std::result::Result<StoryContent, String>,
    ) -> Result<()> {
        let Some(story) = self.active_story() else {
            return Err(ViewerError::NotActive);
        };
        if generation != self.generation {
            return Err(ViewerError::StaleGeneration(generation));
        }

        match result {
            Ok(content) => {
                self.interactions.reset_for_story();
                self.load = LoadState::Ready(content);
                self.emit(ViewerEvent::StoryLoaded {
                    index: story.index(),
                });
            }
            Err(message) => {
                self.load = LoadState::Failed(message.clone());
                self.emit(ViewerEvent::LoadFailed { message });
            }
        }
        Ok(())
    }

    // ===== Playback =====

    /// Advance the playback clock by one timer tick.
    ///
    /// Only meaningful while the current story is ready; completion
    /// triggers forward navigation exactly once.
    pub fn tick(&mut self) -> Directive {
        let Some(story) = self.active_story() else {
            return Directive::None;
        };
        if !self.load.is_ready() {
            return Directive::None;
        }

        match self.clock.tick() {
            ClockTick::Idle => Directive::None,
            ClockTick::Advanced(progress) => {
                self.emit(ViewerEvent::ProgressUpdated { progress });
                Directive::None
            }
            ClockTick::Completed => {
                self.emit(ViewerEvent::ProgressUpdated { progress: 100.0 });
                self.emit(ViewerEvent::StoryCompleted {
                    index: story.index(),
                });
                self.advance_from(story)
            }
        }
    }

    /// Toggle the pause flag, returning the new value
    pub fn toggle_pause(&mut self) -> Result<bool> {
        if self.active_story().is_none() {
            return Err(ViewerError::NotActive);
        }
        let paused = self.clock.toggle_paused();
        self.emit(ViewerEvent::PausedChanged { paused });
        Ok(paused)
    }

    // ===== Input Surfaces =====

    /// Keyboard surface: arrows navigate, Escape closes, Space pauses
    pub fn handle_key(&mut self, key: Key) -> Directive {
        match nav::action_for_key(key) {
            InputAction::Next => self.next(),
            InputAction::Previous => self.previous(),
            InputAction::Close => self.close(),
            InputAction::TogglePause => {
                self.toggle_pause().ok();
                Directive::None
            }
        }
    }

    /// Tap on the story surface at horizontal position `x`: left half goes
    /// back, right half goes forward
    pub fn tap(&mut self, x: f32, surface_width: f32) -> Directive {
        match nav::zone_for_tap(x, surface_width) {
            TapZone::Previous => self.previous(),
            TapZone::Next => self.next(),
        }
    }

    /// Pointer entered the viewer surface: reveal the overlay
    pub fn pointer_entered(&mut self) {
        if self.interactions.show_controls() {
            self.emit(ViewerEvent::ControlsVisibilityChanged { visible: true });
        }
    }

    /// Pointer left the viewer surface: hide the overlay
    pub fn pointer_left(&mut self) {
        if self.interactions.hide_controls() {
            self.emit(ViewerEvent::ControlsVisibilityChanged { visible: false });
        }
    }

    /// Touch started on the viewer surface: reveal the overlay
    pub fn touch_started(&mut self) {
        self.pointer_entered();
    }

    /// Tap on the story image: toggle pause FIRST, then collapse the
    /// overlay. The ordering is part of the contract.
    pub fn image_tapped(&mut self) -> Result<bool> {
        let paused = self.toggle_pause()?;
        if self.interactions.hide_controls() {
            self.emit(ViewerEvent::ControlsVisibilityChanged { visible: false });
        }
        Ok(paused)
    }

    // ===== Interactions =====

    /// Flip the like toggle for the current story
    pub fn toggle_like(&mut self) -> Result<bool> {
        let Some(story) = self.active_story() else {
            return Err(ViewerError::NotActive);
        };
        let liked = self.interactions.toggle_liked();
        if let Some(sink) = self.sink.as_mut() {
            sink.like_toggled(story, liked);
        }
        self.emit(ViewerEvent::LikeToggled {
            index: story.index(),
            liked,
        });
        Ok(liked)
    }

    /// Flip the save toggle for the current story
    pub fn toggle_save(&mut self) -> Result<bool> {
        let Some(story) = self.active_story() else {
            return Err(ViewerError::NotActive);
        };
        let saved = self.interactions.toggle_saved();
        if let Some(sink) = self.sink.as_mut() {
            sink.save_toggled(story, saved);
        }
        self.emit(ViewerEvent::SaveToggled {
            index: story.index(),
            saved,
        });
        Ok(saved)
    }

    /// Invoke the comment affordance. An entry point only: no state changes
    pub fn comment(&mut self) -> Result<()> {
        let Some(story) = self.active_story() else {
            return Err(ViewerError::NotActive);
        };
        if let Some(sink) = self.sink.as_mut() {
            sink.comment_requested(story);
        }
        self.emit(ViewerEvent::CommentRequested {
            index: story.index(),
        });
        Ok(())
    }

    // ===== State Queries =====

    /// The story currently in the viewer, if any
    pub fn current_story(&self) -> Option<StoryRef> {
        self.active_story()
    }

    /// Loader state for the current story
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Current progress percentage (0 to 100)
    pub fn progress(&self) -> f32 {
        self.clock.progress()
    }

    /// Whether playback is paused
    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// Whether the clock should be ticking: a story is active, its content
    /// is ready, playback is neither paused nor completed
    pub fn is_playing(&self) -> bool {
        self.active_story().is_some()
            && self.load.is_ready()
            && !self.clock.is_paused()
            && !self.clock.is_completed()
    }

    /// Interaction overlay state
    pub fn interactions(&self) -> &InteractionState {
        &self.interactions
    }

    /// Whether the viewer has redirected to the feed root
    pub fn has_exited(&self) -> bool {
        self.exited
    }

    /// Timing configuration
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Drain queued events for UI synchronization
    pub fn take_events(&mut self) -> Vec<ViewerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn active_story(&self) -> Option<StoryRef> {
        if self.exited {
            None
        } else {
            self.current
        }
    }

    fn emit(&mut self, event: ViewerEvent) {
        self.pending_events.push(event);
    }
}

impl Default for StoryViewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}
