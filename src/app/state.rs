use crate::api::models::Notification;
use crate::config::AppConfig;
use crate::forms::{EventForm, Form, PostForm};
use crate::sync::Feed;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    Posts,
    Events,
    Notifications,
}

impl FocusPanel {
    pub fn index(self) -> usize {
        match self {
            FocusPanel::Posts => 0,
            FocusPanel::Events => 1,
            FocusPanel::Notifications => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    PostForm,
    EventForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub set_at: Instant,
}

pub struct AppState {
    pub config: AppConfig,
    pub backend_url: String,
    pub feed: Feed,
    pub focus: FocusPanel,
    /// Selected row per panel, indexed by [`FocusPanel::index`].
    pub selected: [usize; 3],
    pub overlay: Option<Overlay>,
    pub post_form: PostForm,
    pub event_form: EventForm,
    pub in_flight: usize,
    pub status: Option<StatusMessage>,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, backend_url: String) -> Self {
        Self {
            config,
            backend_url,
            feed: Feed::new(),
            focus: FocusPanel::Posts,
            selected: [0; 3],
            overlay: None,
            post_form: PostForm::new(),
            event_form: EventForm::new(),
            in_flight: 0,
            status: None,
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.set_status(text.into(), StatusKind::Info);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.set_status(text.into(), StatusKind::Error);
    }

    fn set_status(&mut self, text: String, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text,
            kind,
            set_at: Instant::now(),
        });
        self.dirty = true;
    }

    /// Drop the status message once it has been shown long enough.
    pub fn expire_status(&mut self, now: Instant) {
        let timeout = Duration::from_secs(self.config.ui.status_timeout_secs);
        if let Some(status) = &self.status {
            if now.duration_since(status.set_at) >= timeout {
                self.status = None;
                self.dirty = true;
            }
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Posts => FocusPanel::Events,
            FocusPanel::Events => FocusPanel::Notifications,
            FocusPanel::Notifications => FocusPanel::Posts,
        };
        self.dirty = true;
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Posts => FocusPanel::Notifications,
            FocusPanel::Events => FocusPanel::Posts,
            FocusPanel::Notifications => FocusPanel::Events,
        };
        self.dirty = true;
    }

    pub fn panel_len(&self, panel: FocusPanel) -> usize {
        match panel {
            FocusPanel::Posts => self.feed.posts().len(),
            FocusPanel::Events => self.feed.events().len(),
            FocusPanel::Notifications => self.feed.notifications().len(),
        }
    }

    pub fn selected_in(&self, panel: FocusPanel) -> usize {
        self.selected[panel.index()]
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.panel_len(self.focus);
        let slot = &mut self.selected[self.focus.index()];
        if len == 0 {
            *slot = 0;
            return;
        }
        *slot = slot.saturating_add_signed(delta).min(len - 1);
        self.dirty = true;
    }

    /// Keep every selection inside its list after the lists were replaced.
    pub fn clamp_selection(&mut self) {
        for panel in [FocusPanel::Posts, FocusPanel::Events, FocusPanel::Notifications] {
            let len = self.panel_len(panel);
            let slot = &mut self.selected[panel.index()];
            *slot = (*slot).min(len.saturating_sub(1));
        }
    }

    pub fn selected_notification(&self) -> Option<&Notification> {
        self.feed
            .notifications()
            .get(self.selected_in(FocusPanel::Notifications))
    }

    pub fn open_overlay(&mut self, overlay: Overlay) {
        self.overlay = Some(overlay);
        self.dirty = true;
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
        self.dirty = true;
    }

    pub fn active_form(&self) -> Option<&Form> {
        match self.overlay? {
            Overlay::PostForm => Some(&self.post_form.form),
            Overlay::EventForm => Some(&self.event_form.form),
        }
    }

    pub fn active_form_mut(&mut self) -> Option<&mut Form> {
        match self.overlay? {
            Overlay::PostForm => Some(&mut self.post_form.form),
            Overlay::EventForm => Some(&mut self.event_form.form),
        }
    }

    /// Spinner frame for in-progress work, advanced by ticks.
    pub fn spinner(&self) -> char {
        const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
        FRAMES[(self.tick_count / 2 % FRAMES.len() as u64) as usize]
    }
}
