//! Viewer engine
//!
//! Drives the [`StoryViewer`] state machine on a tokio task: one loop
//! serializes user commands, timer ticks, and fetch completions, so every
//! transition observes a consistent state. The tick interval exists only
//! while a story is actually playing and is torn down on pause, navigation,
//! load failure, and exit; fetch results carry the generation they were
//! requested under and stale ones are discarded.

use crate::fetcher::StoryFetcher;
use reel_core::StoryContent;
use reel_playback::{
    Directive, EntryRequest, Key, StoryViewer, ViewerConfig, ViewerError, ViewerEvent,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, Interval};
use tracing::{debug, warn};

/// Commands sent to the engine task
#[derive(Debug, Clone)]
pub enum ViewerCommand {
    /// Activate the viewer from a navigation trigger
    Enter(EntryRequest),

    /// Key press on the viewer
    Key(Key),

    /// Tap on the story surface at horizontal position `x`
    Tap {
        /// Horizontal tap position
        x: f32,
        /// Width of the story surface
        surface_width: f32,
    },

    /// Pointer entered the viewer surface
    PointerEntered,

    /// Pointer left the viewer surface
    PointerLeft,

    /// Touch started on the viewer surface
    TouchStarted,

    /// Tap on the story image (pause + collapse overlay)
    ImageTapped,

    /// Go to the next story
    Next,

    /// Go to the previous story
    Previous,

    /// Close the viewer
    Close,

    /// Toggle pause
    TogglePause,

    /// Toggle the like state of the current story
    ToggleLike,

    /// Toggle the save state of the current story
    ToggleSave,

    /// Invoke the comment affordance
    Comment,
}

/// Engine errors
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine task has already finished
    #[error("viewer engine has shut down")]
    Closed,
}

/// A fetch completion, tagged with the generation it was requested under
type FetchOutcome = (u64, std::result::Result<StoryContent, String>);

/// Async driver for a single viewing session.
///
/// Spawns the engine task on construction; the task runs until the viewer
/// exits to the feed root (auto-advance past the last story, Escape/close,
/// or an entry-guard redirect) or the engine handle is dropped.
pub struct ViewerEngine {
    command_tx: mpsc::Sender<ViewerCommand>,
    event_rx: mpsc::Receiver<ViewerEvent>,
    task: JoinHandle<()>,
}

impl ViewerEngine {
    /// Spawn an engine driving a fresh viewer
    pub fn new(fetcher: Arc<dyn StoryFetcher>, config: ViewerConfig) -> Self {
        let (command_tx, command_rx) = mpsc::channel(32);
        let (event_tx, event_rx) = mpsc::channel(32);

        let viewer = StoryViewer::new(config);
        let task = tokio::spawn(run(viewer, fetcher, command_rx, event_tx));

        Self {
            command_tx,
            event_rx,
            task,
        }
    }

    /// Send a command to the engine task
    pub async fn send(&self, command: ViewerCommand) -> Result<(), EngineError> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| EngineError::Closed)
    }

    /// Enter a story from the stories rail (the legitimate entry path)
    pub async fn enter(&self, index: u32, total: u32) -> Result<(), EngineError> {
        self.send(ViewerCommand::Enter(EntryRequest::from_rail(index, total)))
            .await
    }

    /// Forward a key press
    pub async fn key(&self, key: Key) -> Result<(), EngineError> {
        self.send(ViewerCommand::Key(key)).await
    }

    /// Go to the next story
    pub async fn next(&self) -> Result<(), EngineError> {
        self.send(ViewerCommand::Next).await
    }

    /// Go to the previous story
    pub async fn previous(&self) -> Result<(), EngineError> {
        self.send(ViewerCommand::Previous).await
    }

    /// Close the viewer
    pub async fn close(&self) -> Result<(), EngineError> {
        self.send(ViewerCommand::Close).await
    }

    /// Toggle pause
    pub async fn toggle_pause(&self) -> Result<(), EngineError> {
        self.send(ViewerCommand::TogglePause).await
    }

    /// Receive the next viewer event
    pub async fn recv_event(&mut self) -> Option<ViewerEvent> {
        self.event_rx.recv().await
    }

    /// Receive a viewer event without waiting
    pub fn try_recv_event(&mut self) -> Option<ViewerEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Whether the engine task has finished
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the engine and wait for the task to finish
    pub async fn shutdown(self) {
        drop(self.command_tx);
        let _ = self.task.await;
    }
}

/// Engine task body
async fn run(
    mut viewer: StoryViewer,
    fetcher: Arc<dyn StoryFetcher>,
    mut commands: mpsc::Receiver<ViewerCommand>,
    events: mpsc::Sender<ViewerEvent>,
) {
    // Fetch tasks report back here; the sender half stays alive in-scope so
    // recv() below never closes
    let (fetch_tx, mut fetch_rx) = mpsc::channel::<FetchOutcome>(8);
    let mut ticker: Option<Interval> = None;

    loop {
        if !flush_events(&mut viewer, &events).await {
            break;
        }

        if viewer.has_exited() {
            debug!("viewer exited to feed root, stopping engine");
            break;
        }

        sync_ticker(&viewer, &mut ticker);

        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else { break };
                let directive = handle_command(&mut viewer, command);
                perform(directive, &fetcher, &fetch_tx);
            }
            Some((generation, result)) = fetch_rx.recv() => {
                apply_fetch(&mut viewer, generation, result);
            }
            _ = next_tick(&mut ticker) => {
                let directive = viewer.tick();
                perform(directive, &fetcher, &fetch_tx);
            }
        }
    }
}

/// Drain viewer events into the event channel. Returns false once the
/// receiving side is gone.
async fn flush_events(viewer: &mut StoryViewer, events: &mpsc::Sender<ViewerEvent>) -> bool {
    for event in viewer.take_events() {
        if events.send(event).await.is_err() {
            return false;
        }
    }
    true
}

/// Keep the tick interval in lockstep with playback state: alive only while
/// a ready, unpaused, uncompleted story is on screen.
fn sync_ticker(viewer: &StoryViewer, ticker: &mut Option<Interval>) {
    if viewer.is_playing() {
        if ticker.is_none() {
            let period = viewer.config().tick_interval;
            *ticker = Some(interval_at(Instant::now() + period, period));
        }
    } else {
        *ticker = None;
    }
}

/// Await the next tick, or forever if the ticker is torn down
async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker.as_mut() {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}

fn handle_command(viewer: &mut StoryViewer, command: ViewerCommand) -> Directive {
    match command {
        ViewerCommand::Enter(request) => viewer.activate(&request),
        ViewerCommand::Key(key) => viewer.handle_key(key),
        ViewerCommand::Tap { x, surface_width } => viewer.tap(x, surface_width),
        ViewerCommand::Next => viewer.next(),
        ViewerCommand::Previous => viewer.previous(),
        ViewerCommand::Close => viewer.close(),
        ViewerCommand::PointerEntered => {
            viewer.pointer_entered();
            Directive::None
        }
        ViewerCommand::PointerLeft => {
            viewer.pointer_left();
            Directive::None
        }
        ViewerCommand::TouchStarted => {
            viewer.touch_started();
            Directive::None
        }
        ViewerCommand::ImageTapped => {
            log_ignored(viewer.image_tapped());
            Directive::None
        }
        ViewerCommand::TogglePause => {
            log_ignored(viewer.toggle_pause());
            Directive::None
        }
        ViewerCommand::ToggleLike => {
            log_ignored(viewer.toggle_like());
            Directive::None
        }
        ViewerCommand::ToggleSave => {
            log_ignored(viewer.toggle_save());
            Directive::None
        }
        ViewerCommand::Comment => {
            log_ignored(viewer.comment());
            Directive::None
        }
    }
}

/// Spawn the side effect a directive asks for
fn perform(directive: Directive, fetcher: &Arc<dyn StoryFetcher>, fetch_tx: &mpsc::Sender<FetchOutcome>) {
    match directive {
        Directive::None => {}
        Directive::Load(request) => {
            let fetcher = Arc::clone(fetcher);
            let fetch_tx = fetch_tx.clone();
            tokio::spawn(async move {
                let result = fetcher
                    .fetch_story(request.story.index())
                    .await
                    .map_err(|e| e.to_string());
                fetch_tx.send((request.generation, result)).await.ok();
            });
        }
        Directive::ExitToFeed { .. } => {
            // The RedirectedToFeed event is already queued; the loop stops
            // once it is flushed
        }
    }
}

fn apply_fetch(
    viewer: &mut StoryViewer,
    generation: u64,
    result: std::result::Result<StoryContent, String>,
) {
    match viewer.loaded(generation, result) {
        Ok(()) => {}
        Err(ViewerError::StaleGeneration(generation)) => {
            debug!(generation, "discarding stale story response");
        }
        Err(ViewerError::NotActive) => {
            debug!("discarding story response delivered after exit");
        }
    }
}

fn log_ignored<T>(result: reel_playback::Result<T>) {
    if let Err(error) = result {
        warn!(%error, "ignoring viewer input");
    }
}
