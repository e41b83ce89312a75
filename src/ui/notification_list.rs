use super::{panel_block, panel_title, render_placeholder};
use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState};

/// `"event"` → `"Event"`.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let notifications = state.feed.notifications();
    let block = panel_block(
        panel_title("Notifications", notifications.len(), state),
        FocusPanel::Notifications,
        state,
    );

    if render_placeholder(frame, area, block.clone(), state, notifications.len(), "No notifications yet.") {
        return;
    }

    let items: Vec<ListItem> = notifications
        .iter()
        .map(|n| {
            let (label, label_style) = if n.is_read {
                ("read", Theme::read())
            } else {
                ("unread", Theme::unread())
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!(" {}", capitalize(&n.kind)), Theme::item_title()),
                    Span::styled(format!(": {}", n.message), Theme::body()),
                ]),
                Line::from(Span::styled(format!(" {}", label), label_style)),
            ])
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(Theme::selected());
    let mut list_state =
        ListState::default().with_selected(Some(state.selected_in(FocusPanel::Notifications)));
    frame.render_stateful_widget(list, area, &mut list_state);
}
