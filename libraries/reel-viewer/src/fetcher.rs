//! Story fetching seam
//!
//! The engine fetches through this trait rather than a concrete HTTP
//! client, so tests (and alternative transports) can supply their own
//! implementation.

use async_trait::async_trait;
use reel_core::StoryContent;
use reel_feed_client::{FeedClient, Result};

/// Source of story content for the viewer engine.
#[async_trait]
pub trait StoryFetcher: Send + Sync {
    /// Fetch the story at `index`.
    async fn fetch_story(&self, index: u32) -> Result<StoryContent>;
}

#[async_trait]
impl StoryFetcher for FeedClient {
    async fn fetch_story(&self, index: u32) -> Result<StoryContent> {
        FeedClient::fetch_story(self, index).await
    }
}
