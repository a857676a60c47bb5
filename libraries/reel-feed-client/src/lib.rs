//! Reel - Feed Server Client
//!
//! HTTP client for the feed server's story endpoints:
//! - `GET /stories` - the stories-rail listing
//! - `GET /stories/{index}` - content of a single story
//!
//! Any non-2xx status or transport failure maps to a [`FeedClientError`];
//! the viewer renders those as a terminal error for the current story.
//! There is no authentication: the feed server's story endpoints are public
//! within the app.

mod client;
mod error;

pub use client::FeedClient;
pub use error::{FeedClientError, Result};
