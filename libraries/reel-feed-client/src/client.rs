//! Main feed server client.

use crate::error::{FeedClientError, Result};
use reel_core::{RailStory, StoryContent};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Client for the feed server's story endpoints.
///
/// # Example
///
/// ```ignore
/// use reel_feed_client::FeedClient;
///
/// let client = FeedClient::new("http://localhost:3000")?;
///
/// // Rail listing for the feed shell
/// let rail = client.fetch_rail().await?;
/// println!("{} stories on the rail", rail.len());
///
/// // Single story for the viewer
/// let story = client.fetch_story(1).await?;
/// println!("showing story by {}", story.username);
/// ```
#[derive(Debug)]
pub struct FeedClient {
    http: Client,
    base_url: String,
}

impl FeedClient {
    /// Create a new client for the given server URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url: String = base_url.into();

        // Validate URL
        if base_url.is_empty() {
            return Err(FeedClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let base_url = base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(FeedClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Reel/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FeedClientError::Request)?;

        Ok(Self { http, base_url })
    }

    /// Get the server URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the content of a single story (`GET /stories/{index}`).
    pub async fn fetch_story(&self, index: u32) -> Result<StoryContent> {
        let url = format!("{}/stories/{}", self.base_url, index);

        debug!(url = %url, index, "Fetching story");

        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                FeedClientError::ServerUnreachable(e.to_string())
            } else {
                FeedClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            let story: StoryContent = response.json().await.map_err(|e| {
                FeedClientError::ParseError(format!("Failed to parse story: {}", e))
            })?;

            debug!(index, username = %story.username, "Fetched story");

            Ok(story)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(FeedClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Fetch the stories-rail listing (`GET /stories`).
    ///
    /// The feed shell renders this and uses the entry count as the `total`
    /// of the triggers it hands to the viewer.
    pub async fn fetch_rail(&self) -> Result<Vec<RailStory>> {
        let url = format!("{}/stories", self.base_url);

        debug!(url = %url, "Fetching stories rail");

        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                FeedClientError::ServerUnreachable(e.to_string())
            } else {
                FeedClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            let rail: Vec<RailStory> = response.json().await.map_err(|e| {
                FeedClientError::ParseError(format!("Failed to parse rail listing: {}", e))
            })?;

            info!(stories = rail.len(), "Fetched stories rail");

            Ok(rail)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(FeedClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
