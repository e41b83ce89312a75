use crate::api::client::CommunityApi;
use crate::api::error::ApiError;
use crate::api::models::{NewEvent, NewPost};
use crate::app::event::{AppEvent, Mutation};
use crate::forms::Form;
use crate::sync::{self, RefreshToken};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

/// Runs backend requests off the event loop.
///
/// Each request is a spawned task that reports its outcome as an
/// [`AppEvent`], so the UI keeps handling input while requests are in flight.
/// Overlapping requests are not coalesced.
pub struct ApiManager {
    api: Arc<dyn CommunityApi>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl ApiManager {
    pub fn new(api: Arc<dyn CommunityApi>, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { api, event_tx }
    }

    pub fn fetch_snapshot(&self, token: RefreshToken) {
        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = sync::fetch_snapshot(api.as_ref()).await;
            let _ = tx.send(AppEvent::SnapshotLoaded { token, result });
        });
    }

    pub fn create_post(&self, payload: NewPost, draft: Form) {
        let api = Arc::clone(&self.api);
        self.report(Mutation::CreatePost { draft }, async move { api.create_post(&payload).await });
    }

    pub fn create_event(&self, payload: NewEvent, draft: Form) {
        let api = Arc::clone(&self.api);
        self.report(Mutation::CreateEvent { draft }, async move { api.create_event(&payload).await });
    }

    pub fn mark_read(&self, id: String) {
        let api = Arc::clone(&self.api);
        let mutation = Mutation::MarkRead { id: id.clone() };
        self.report(mutation, async move { api.mark_notification_read(&id).await });
    }

    fn report<F>(&self, mutation: Mutation, request: F)
    where
        F: Future<Output = Result<(), ApiError>> + Send + 'static,
    {
        let tx = self.event_tx.clone();
        debug!(what = %mutation.describe(), "submitting");
        tokio::spawn(async move {
            let result = request.await;
            let _ = tx.send(AppEvent::MutationFinished { mutation, result });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;
    use crate::app::handler;
    use crate::app::state::{AppState, Overlay};
    use crate::config::AppConfig;
    use crate::sync::testing::{notification, post, FakeBackend};
    use crate::sync::Snapshot;
    use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    /// Runs actions the way the main loop does and feeds completions back
    /// into the handler until nothing is left in flight.
    async fn drive(
        state: &mut AppState,
        manager: &ApiManager,
        rx: &mut mpsc::UnboundedReceiver<AppEvent>,
        mut actions: Vec<Action>,
    ) {
        let mut pending = 0usize;
        loop {
            for action in actions.drain(..) {
                pending += 1;
                match action {
                    Action::FetchSnapshot { token } => manager.fetch_snapshot(token),
                    Action::CreatePost { payload, draft } => manager.create_post(payload, draft),
                    Action::CreateEvent { payload, draft } => manager.create_event(payload, draft),
                    Action::MarkRead { id } => manager.mark_read(id),
                    Action::Quit => pending -= 1,
                }
            }
            if pending == 0 {
                break;
            }
            let event = rx.recv().await.expect("event channel closed");
            pending -= 1;
            actions = handler::handle_event(state, event);
        }
    }

    fn setup(backend: Arc<FakeBackend>) -> (AppState, ApiManager, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let state = AppState::new(AppConfig::default(), "fake://".into());
        (state, ApiManager::new(backend, tx), rx)
    }

    #[tokio::test]
    async fn test_mount_with_empty_backend() {
        let backend = Arc::new(FakeBackend::default());
        let (mut state, manager, mut rx) = setup(backend);
        let actions = handler::on_mount(&mut state);
        drive(&mut state, &manager, &mut rx, actions).await;

        assert!(state.feed.posts().is_empty());
        assert!(state.feed.events().is_empty());
        assert!(state.feed.notifications().is_empty());
        assert!(!state.feed.loading());
    }

    #[tokio::test]
    async fn test_mark_read_then_refresh_flips_only_target() {
        let backend = Arc::new(FakeBackend::with_snapshot(Snapshot {
            posts: vec![post("p1", "Welcome")],
            events: vec![],
            notifications: vec![
                notification("n1", false),
                notification("n2", false),
                notification("n3", true),
            ],
        }));
        let (mut state, manager, mut rx) = setup(Arc::clone(&backend));
        let actions = handler::on_mount(&mut state);
        drive(&mut state, &manager, &mut rx, actions).await;

        drive(&mut state, &manager, &mut rx, vec![Action::MarkRead { id: "n2".into() }]).await;

        let read: Vec<(&str, bool)> = state
            .feed
            .notifications()
            .iter()
            .map(|n| (n.id.as_str(), n.is_read))
            .collect();
        assert_eq!(read, vec![("n1", false), ("n2", true), ("n3", true)]);
        assert_eq!(*backend.marked.lock().unwrap(), vec!["n2".to_string()]);
    }

    #[tokio::test]
    async fn test_create_post_appears_after_refresh() {
        let backend = Arc::new(FakeBackend::default());
        let (mut state, manager, mut rx) = setup(Arc::clone(&backend));
        state.open_overlay(Overlay::PostForm);
        state.post_form.form.set(1, "Hi");
        state.post_form.form.set(2, "Hello");
        let submit = CEvent::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        let actions = handler::handle_event(&mut state, AppEvent::Terminal(submit));

        drive(&mut state, &manager, &mut rx, actions).await;

        assert_eq!(state.feed.posts().len(), 1);
        assert_eq!(state.feed.posts()[0].title, "Hi");
        assert_eq!(state.feed.posts()[0].author, "anonymous");
        assert!(state.post_form.form.is_blank());
    }

    #[tokio::test]
    async fn test_failed_post_puts_draft_back() {
        let backend = Arc::new(FakeBackend::default());
        *backend.fail_mutations.lock().unwrap() = true;
        let (mut state, manager, mut rx) = setup(Arc::clone(&backend));
        state.open_overlay(Overlay::PostForm);
        state.post_form.form.set(1, "Hi");
        state.post_form.form.set(2, "Hello");
        let submit = CEvent::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        let actions = handler::handle_event(&mut state, AppEvent::Terminal(submit));
        assert!(state.post_form.form.is_blank());

        drive(&mut state, &manager, &mut rx, actions).await;

        assert!(state.feed.posts().is_empty());
        assert_eq!(state.post_form.form.value(1), "Hi");
        assert_eq!(state.in_flight, 0);
    }

    #[tokio::test]
    async fn test_failed_mutation_leaves_feed_alone() {
        let backend = Arc::new(FakeBackend::with_snapshot(Snapshot {
            notifications: vec![notification("n1", false)],
            ..Default::default()
        }));
        *backend.fail_mutations.lock().unwrap() = true;
        let (mut state, manager, mut rx) = setup(Arc::clone(&backend));
        let actions = handler::on_mount(&mut state);
        drive(&mut state, &manager, &mut rx, actions).await;

        drive(&mut state, &manager, &mut rx, vec![Action::MarkRead { id: "n1".into() }]).await;

        assert!(!state.feed.notifications()[0].is_read);
        assert!(backend.marked.lock().unwrap().is_empty());
        assert!(state.status.is_some());
    }

    #[tokio::test]
    async fn test_events_failure_keeps_previous_snapshot() {
        let backend = Arc::new(FakeBackend::with_snapshot(Snapshot {
            posts: vec![post("p1", "Old")],
            events: vec![],
            notifications: vec![notification("n1", false)],
        }));
        let (mut state, manager, mut rx) = setup(Arc::clone(&backend));
        let actions = handler::on_mount(&mut state);
        drive(&mut state, &manager, &mut rx, actions).await;

        backend.snapshot.lock().unwrap().posts.push(post("p2", "New"));
        *backend.fail_events.lock().unwrap() = true;
        let actions = vec![Action::FetchSnapshot { token: state.feed.begin_refresh() }];
        drive(&mut state, &manager, &mut rx, actions).await;

        assert_eq!(state.feed.posts().len(), 1);
        assert!(!state.feed.loading());
    }
}
