//! HTTP client for the community backend.

use crate::api::error::ApiError;
use crate::api::models::{Event, MarkRead, NewEvent, NewPost, Notification, Post};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

const POSTS: &str = "/api/posts";
const EVENTS: &str = "/api/events";
const NOTIFICATIONS: &str = "/api/notifications";
const NOTIFICATIONS_READ: &str = "/api/notifications/read";

/// The six backend operations the client relies on.
///
/// Mutation responses are not used by callers, so they return `()`.
#[async_trait]
pub trait CommunityApi: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError>;
    async fn list_events(&self) -> Result<Vec<Event>, ApiError>;
    async fn list_notifications(&self) -> Result<Vec<Notification>, ApiError>;
    async fn create_post(&self, payload: &NewPost) -> Result<(), ApiError>;
    async fn create_event(&self, payload: &NewEvent) -> Result<(), ApiError>;
    async fn mark_notification_read(&self, id: &str) -> Result<(), ApiError>;
}

/// `reqwest`-backed implementation of [`CommunityApi`].
///
/// No retries and no timeouts: a request either completes, fails at the
/// transport level, or hangs.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_list<T: DeserializeOwned>(&self, endpoint: &'static str) -> Result<Vec<T>, ApiError> {
        let response = self.client.get(self.url(endpoint)).send().await?;
        debug!(endpoint, status = %response.status(), "fetched");
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { endpoint, source })
    }

    async fn post_json<B: Serialize + ?Sized>(&self, endpoint: &'static str, body: &B) -> Result<(), ApiError> {
        let response = self.client.post(self.url(endpoint)).json(body).send().await?;
        let status = response.status();
        if status.is_success() {
            debug!(endpoint, %status, "submitted");
        } else {
            warn!(endpoint, %status, "backend answered with a non-success status");
        }
        Ok(())
    }
}

#[async_trait]
impl CommunityApi for ApiClient {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get_list(POSTS).await
    }

    async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        self.get_list(EVENTS).await
    }

    async fn list_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get_list(NOTIFICATIONS).await
    }

    async fn create_post(&self, payload: &NewPost) -> Result<(), ApiError> {
        self.post_json(POSTS, payload).await
    }

    async fn create_event(&self, payload: &NewEvent) -> Result<(), ApiError> {
        self.post_json(EVENTS, payload).await
    }

    async fn mark_notification_read(&self, id: &str) -> Result<(), ApiError> {
        self.post_json(NOTIFICATIONS_READ, &MarkRead { id }).await
    }
}
