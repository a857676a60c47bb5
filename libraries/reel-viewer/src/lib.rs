//! Reel - Viewer Engine
//!
//! Async driver for the story playback state machine.
//!
//! This crate wires `reel-playback` to the outside world:
//! - A single tokio task serializes user commands, timer ticks, and fetch
//!   completions, so state transitions never race
//! - The auto-advance tick interval lives only while a story is playing and
//!   is torn down on pause, navigation, load failure, and exit
//! - Stories are fetched through the [`StoryFetcher`] seam (implemented by
//!   `reel_feed_client::FeedClient`); results carry a generation tag and
//!   late responses for a story the viewer already left are discarded
//!
//! # Example
//!
//! ```ignore
//! use reel_feed_client::FeedClient;
//! use reel_playback::ViewerConfig;
//! use reel_viewer::ViewerEngine;
//! use std::sync::Arc;
//!
//! let client = Arc::new(FeedClient::new("http://localhost:3000")?);
//! let mut engine = ViewerEngine::new(client, ViewerConfig::default());
//!
//! // The stories rail hands over (index, total)
//! engine.enter(1, 3).await?;
//!
//! while let Some(event) = engine.recv_event().await {
//!     println!("viewer: {event:?}");
//! }
//! ```

mod engine;
mod fetcher;

pub use engine::{EngineError, ViewerCommand, ViewerEngine};
pub use fetcher::StoryFetcher;
