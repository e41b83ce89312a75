//! Client-side mirror of the three server-owned resource collections.
//!
//! [`Feed`] is replaced wholesale from a [`Snapshot`] on every successful
//! refresh and never patched item by item. Each refresh is tagged with a
//! [`RefreshToken`]; only the most recently issued one may touch state, so an
//! older response that arrives late cannot overwrite a fresher one.

use crate::api::client::CommunityApi;
use crate::api::error::ApiError;
use crate::api::models::{Event, Notification, Post};
use chrono::{DateTime, Local};
use tracing::{debug, error, info};

/// Monotonically increasing tag for one refresh request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshToken(u64);

/// All three collections as returned by one full refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub posts: Vec<Post>,
    pub events: Vec<Event>,
    pub notifications: Vec<Notification>,
}

/// Fetch the three collections concurrently. Succeeds only if all three do.
///
/// The three reads are independent, so the snapshot is not guaranteed to
/// reflect a single server-side instant.
pub async fn fetch_snapshot(api: &dyn CommunityApi) -> Result<Snapshot, ApiError> {
    let (posts, events, notifications) = tokio::try_join!(
        api.list_posts(),
        api.list_events(),
        api.list_notifications(),
    )?;
    Ok(Snapshot {
        posts,
        events,
        notifications,
    })
}

/// What happened when a refresh result was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Replaced,
    Failed,
    Stale,
}

#[derive(Debug, Default)]
pub struct Feed {
    posts: Vec<Post>,
    events: Vec<Event>,
    notifications: Vec<Notification>,
    loading: bool,
    latest: u64,
    last_synced: Option<DateTime<Local>>,
    last_error: Option<String>,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn last_synced(&self) -> Option<DateTime<Local>> {
        self.last_synced
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    /// Start a refresh: raises the loading flag and issues a new token.
    pub fn begin_refresh(&mut self) -> RefreshToken {
        self.latest += 1;
        self.loading = true;
        debug!(token = self.latest, "refresh started");
        RefreshToken(self.latest)
    }

    /// Apply the result of the refresh identified by `token`.
    ///
    /// A failure keeps the previous collections; stale-but-present data is
    /// preferred over clearing.
    pub fn apply(&mut self, token: RefreshToken, result: Result<Snapshot, ApiError>) -> ApplyOutcome {
        if token.0 < self.latest {
            debug!(token = token.0, latest = self.latest, "discarding superseded refresh");
            return ApplyOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(snapshot) => {
                info!(
                    posts = snapshot.posts.len(),
                    events = snapshot.events.len(),
                    notifications = snapshot.notifications.len(),
                    "refresh complete"
                );
                self.posts = snapshot.posts;
                self.events = snapshot.events;
                self.notifications = snapshot.notifications;
                self.last_synced = Some(Local::now());
                self.last_error = None;
                ApplyOutcome::Replaced
            }
            Err(e) => {
                error!(error = %e, "refresh failed, keeping previous data");
                self.last_error = Some(e.to_string());
                ApplyOutcome::Failed
            }
        }
    }
}
