//! Turns terminal input and I/O completions into state changes and actions.
//!
//! Everything here is synchronous and side-effect free apart from `AppState`;
//! network work is requested by returning [`Action`]s, and its results come
//! back later as [`AppEvent`]s.

use crate::app::action::Action;
use crate::app::event::{AppEvent, Mutation};
use crate::app::state::*;
use crate::api::error::ApiError;
use crate::forms::Form;
use crate::sync::ApplyOutcome;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;
use tracing::{error, info, warn};

/// Actions to run once the UI is up: the initial full refresh.
pub fn on_mount(state: &mut AppState) -> Vec<Action> {
    vec![start_refresh(state)]
}

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::SnapshotLoaded { token, result } => {
            if state.feed.apply(token, result) == ApplyOutcome::Failed {
                let reason = state.feed.last_error().unwrap_or("unknown error").to_string();
                state.error(format!("Refresh failed: {}", reason));
            }
            state.clamp_selection();
            state.dirty = true;
            vec![]
        }
        AppEvent::MutationFinished { mutation, result } => {
            handle_mutation_finished(state, mutation, result)
        }
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    }
}

fn start_refresh(state: &mut AppState) -> Action {
    let token = state.feed.begin_refresh();
    state.dirty = true;
    Action::FetchSnapshot { token }
}

fn handle_mutation_finished(
    state: &mut AppState,
    mutation: Mutation,
    result: Result<(), ApiError>,
) -> Vec<Action> {
    state.in_flight = state.in_flight.saturating_sub(1);
    state.dirty = true;

    if let Err(e) = result {
        let what = mutation.describe();
        error!(error = %e, what = %what, "mutation failed");
        state.error(format!("{} failed: {}", what, e));
        match mutation {
            Mutation::CreatePost { draft } => restore_draft(&mut state.post_form.form, draft),
            Mutation::CreateEvent { draft } => restore_draft(&mut state.event_form.form, draft),
            Mutation::MarkRead { .. } => {}
        }
        return vec![];
    }

    match &mutation {
        Mutation::CreatePost { .. } => state.info("Post published."),
        Mutation::CreateEvent { .. } => state.info("Event created."),
        Mutation::MarkRead { id } => {
            info!(id = %id, "notification marked read");
        }
    }
    vec![start_refresh(state)]
}

/// Put a failed submission back into its form unless a newer draft is there.
fn restore_draft(form: &mut Form, draft: Form) {
    if form.is_blank() {
        *form = draft;
    } else {
        warn!(form = form.title, "newer draft in progress, failed submission not restored");
    }
}

fn handle_tick(state: &mut AppState) {
    state.tick_count = state.tick_count.wrapping_add(1);
    state.expire_status(Instant::now());
    if state.feed.loading() || state.in_flight > 0 {
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Open form captures all input
    if state.overlay.is_some() {
        return handle_form_key(state, key);
    }

    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Tab => {
            state.cycle_focus();
            vec![]
        }
        KeyCode::BackTab => {
            state.cycle_focus_back();
            vec![]
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.move_selection(-1);
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.move_selection(1);
            vec![]
        }
        KeyCode::PageUp => {
            state.move_selection(-10);
            vec![]
        }
        KeyCode::PageDown => {
            state.move_selection(10);
            vec![]
        }
        KeyCode::Home => {
            state.selected[state.focus.index()] = 0;
            vec![]
        }
        KeyCode::End => {
            state.move_selection(isize::MAX);
            vec![]
        }
        KeyCode::Char('p') => {
            state.open_overlay(Overlay::PostForm);
            vec![]
        }
        KeyCode::Char('e') => {
            state.open_overlay(Overlay::EventForm);
            vec![]
        }
        KeyCode::Char('r') | KeyCode::F(5) => vec![start_refresh(state)],
        KeyCode::Enter | KeyCode::Char('m') if state.focus == FocusPanel::Notifications => {
            mark_selected_read(state)
        }
        _ => vec![],
    }
}

fn mark_selected_read(state: &mut AppState) -> Vec<Action> {
    let Some(notification) = state.selected_notification() else {
        return vec![];
    };
    if notification.is_read {
        state.info("Already read.");
        return vec![];
    }
    let id = notification.id.clone();
    state.in_flight += 1;
    vec![Action::MarkRead { id }]
}

fn handle_form_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('s') {
        return submit_form(state);
    }

    let Some(form) = state.active_form_mut() else {
        return vec![];
    };

    // Alt+Enter or Ctrl+J breaks the line in multiline fields
    let newline = (key.code == KeyCode::Enter && key.modifiers.contains(KeyModifiers::ALT))
        || (ctrl && key.code == KeyCode::Char('j'));
    if newline {
        if form.focused_is_multiline() {
            if let Some(input) = form.focused_input_mut() {
                input.insert_char('\n');
            }
        }
        return vec![];
    }

    match key.code {
        KeyCode::Esc => {
            state.close_overlay();
            return vec![];
        }
        KeyCode::Enter => {
            if form.on_last_field() {
                return submit_form(state);
            }
            form.focus_next();
        }
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        _ => {
            if let Some(input) = form.focused_input_mut() {
                match key.code {
                    KeyCode::Char('w') if ctrl => input.delete_word_back(),
                    KeyCode::Char('u') if ctrl => input.clear(),
                    KeyCode::Char(c) if !ctrl => input.insert_char(c),
                    KeyCode::Backspace => input.delete_back(),
                    KeyCode::Delete => input.delete_forward(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    KeyCode::Home => input.move_home(),
                    KeyCode::End => input.move_end(),
                    _ => {}
                }
            }
        }
    }
    vec![]
}

/// Build the payload for the open form and take the draft out of it. Nothing
/// is sent when the form does not convert; the draft then stays as typed.
fn submit_form(state: &mut AppState) -> Vec<Action> {
    let built = match state.overlay {
        Some(Overlay::PostForm) => state.post_form.to_payload().map(|payload| {
            let draft = state.post_form.form.clone();
            state.post_form.reset();
            Action::CreatePost { payload, draft }
        }),
        Some(Overlay::EventForm) => state.event_form.to_payload().map(|payload| {
            let draft = state.event_form.form.clone();
            state.event_form.reset();
            Action::CreateEvent { payload, draft }
        }),
        None => return vec![],
    };

    match built {
        Ok(action) => {
            state.close_overlay();
            state.in_flight += 1;
            vec![action]
        }
        Err(e) => {
            warn!(error = %e, "form not submitted");
            state.error(e.to_string());
            vec![]
        }
    }
}
