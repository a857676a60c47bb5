//! Tests for the feed client library.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real feed server.

use reel_feed_client::{FeedClient, FeedClientError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_valid_https_url() {
        assert!(FeedClient::new("https://example.com").is_ok());
    }

    #[test]
    fn test_valid_http_url() {
        assert!(FeedClient::new("http://localhost:3000").is_ok());
    }

    #[test]
    fn test_empty_url_rejected() {
        let result = FeedClient::new("");

        assert!(result.is_err());
        match result.unwrap_err() {
            FeedClientError::InvalidUrl(msg) => {
                assert!(msg.contains("empty"));
            }
            _ => panic!("Expected InvalidUrl error"),
        }
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        let result = FeedClient::new("example.com");

        assert!(result.is_err());
        match result.unwrap_err() {
            FeedClientError::InvalidUrl(msg) => {
                assert!(msg.contains("http://") || msg.contains("https://"));
            }
            _ => panic!("Expected InvalidUrl error"),
        }
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let client = FeedClient::new("https://example.com/").unwrap();
        assert_eq!(client.base_url(), "https://example.com");
    }
}

// =============================================================================
// Story Fetch Tests
// =============================================================================

mod fetch_story {
    use super::*;

    #[tokio::test]
    async fn test_successful_fetch() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/stories/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "image": "https://cdn.example.com/stories/1.jpg",
                "avatar": "https://cdn.example.com/avatars/alice.jpg",
                "username": "alice",
                "title": "Morning hike",
                "description": "Up before sunrise"
            })))
            .mount(&mock_server)
            .await;

        let client = FeedClient::new(mock_server.uri()).unwrap();
        let story = client.fetch_story(1).await.unwrap();

        assert_eq!(story.username, "alice");
        assert_eq!(story.title.as_deref(), Some("Morning hike"));
        assert_eq!(story.image, "https://cdn.example.com/stories/1.jpg");
    }

    #[tokio::test]
    async fn test_optional_fields_absent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/stories/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "image": "https://cdn.example.com/stories/2.jpg",
                "avatar": "https://cdn.example.com/avatars/bob.jpg",
                "username": "bob"
            })))
            .mount(&mock_server)
            .await;

        let client = FeedClient::new(mock_server.uri()).unwrap();
        let story = client.fetch_story(2).await.unwrap();

        assert!(story.title.is_none());
        assert!(story.description.is_none());
    }

    #[tokio::test]
    async fn test_not_found_maps_to_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/stories/99"))
            .respond_with(ResponseTemplate::new(404).set_body_string("story not found"))
            .mount(&mock_server)
            .await;

        let client = FeedClient::new(mock_server.uri()).unwrap();
        let result = client.fetch_story(99).await;

        match result.unwrap_err() {
            FeedClientError::ServerError { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "story not found");
            }
            other => panic!("Expected ServerError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_failure_maps_to_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/stories/1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = FeedClient::new(mock_server.uri()).unwrap();

        match client.fetch_story(1).await.unwrap_err() {
            FeedClientError::ServerError { status, .. } => assert_eq!(status, 500),
            other => panic!("Expected ServerError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/stories/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = FeedClient::new(mock_server.uri()).unwrap();

        match client.fetch_story(1).await.unwrap_err() {
            FeedClientError::ParseError(msg) => {
                assert!(msg.contains("story"));
            }
            other => panic!("Expected ParseError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        // Nothing is listening on this port
        let client = FeedClient::new("http://127.0.0.1:1").unwrap();

        match client.fetch_story(1).await.unwrap_err() {
            FeedClientError::ServerUnreachable(_) => {}
            other => panic!("Expected ServerUnreachable, got {other:?}"),
        }
    }
}

// =============================================================================
// Rail Listing Tests
// =============================================================================

mod fetch_rail {
    use super::*;

    #[tokio::test]
    async fn test_successful_listing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/stories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": 1, "username": "alice", "avatar": "https://cdn.example.com/avatars/alice.jpg" },
                { "id": 2, "username": "bob", "avatar": "https://cdn.example.com/avatars/bob.jpg" }
            ])))
            .mount(&mock_server)
            .await;

        let client = FeedClient::new(mock_server.uri()).unwrap();
        let rail = client.fetch_rail().await.unwrap();

        assert_eq!(rail.len(), 2);
        assert_eq!(rail[0].username, "alice");
        assert_eq!(rail[1].id, 2);
    }

    #[tokio::test]
    async fn test_empty_rail() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/stories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = FeedClient::new(mock_server.uri()).unwrap();
        let rail = client.fetch_rail().await.unwrap();
        assert!(rail.is_empty());
    }

    #[tokio::test]
    async fn test_rail_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/stories"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&mock_server)
            .await;

        let client = FeedClient::new(mock_server.uri()).unwrap();

        match client.fetch_rail().await.unwrap_err() {
            FeedClientError::ServerError { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("Expected ServerError, got {other:?}"),
        }
    }
}
