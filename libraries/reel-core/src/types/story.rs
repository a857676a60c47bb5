//! Story payload types

use serde::{Deserialize, Serialize};

/// Content of a single story, as returned by `GET /stories/{index}`.
///
/// Owned by the loader for the lifetime of the current story; replaced
/// wholesale when the viewer navigates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryContent {
    /// Full-screen story image URI
    pub image: String,

    /// Author avatar URI
    pub avatar: String,

    /// Author username
    pub username: String,

    /// Headline (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Caption text (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One entry of the stories-rail listing (`GET /stories`).
///
/// The rail itself is rendered by the feed shell; this type only exists so
/// the shell can build the entry trigger for the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RailStory {
    /// Story identifier, doubling as its rail position
    pub id: u32,

    /// Author username
    pub username: String,

    /// Author avatar URI
    pub avatar: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_content_deserializes_without_optional_fields() {
        let json = r#"{
            "image": "https://cdn.example.com/s/1.jpg",
            "avatar": "https://cdn.example.com/a/1.jpg",
            "username": "alice"
        }"#;

        let content: StoryContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.username, "alice");
        assert!(content.title.is_none());
        assert!(content.description.is_none());
    }

    #[test]
    fn story_content_roundtrips_full_payload() {
        let content = StoryContent {
            image: "https://cdn.example.com/s/2.jpg".to_string(),
            avatar: "https://cdn.example.com/a/2.jpg".to_string(),
            username: "bob".to_string(),
            title: Some("Sunset".to_string()),
            description: Some("From the pier".to_string()),
        };

        let json = serde_json::to_string(&content).unwrap();
        let back: StoryContent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, content);
    }
}
