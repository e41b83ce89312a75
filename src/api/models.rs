//! Wire types for the community backend.
//!
//! Resources are server-owned; the client only ever holds read copies of them.
//! Identifiers arrive under `_id` (document stores) and are accepted as `id`
//! as well.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTHOR: &str = "anonymous";
pub const DEFAULT_ORGANIZER: &str = "community";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default = "default_author")]
    pub author: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default = "default_organizer")]
    pub organizer: String,
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(with = "crate::api::timefmt")]
    pub start_time: DateTime<Utc>,
    #[serde(default, with = "crate::api::timefmt::option")]
    pub end_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
}

/// Body of `POST /api/posts`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPost {
    pub author: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
}

/// Body of `POST /api/events`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEvent {
    pub organizer: String,
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(with = "crate::api::timefmt")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "crate::api::timefmt::option")]
    pub end_time: Option<DateTime<Utc>>,
}

/// Body of `POST /api/notifications/read`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkRead<'a> {
    pub id: &'a str,
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}
fn default_organizer() -> String {
    DEFAULT_ORGANIZER.to_string()
}
