use super::{panel_block, panel_title, render_placeholder};
use crate::app::state::*;
use crate::ui::theme::Theme;
use chrono::{DateTime, Local, Utc};
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState};

fn local(instant: &DateTime<Utc>, fmt: &str) -> String {
    instant.with_timezone(&Local).format(fmt).to_string()
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let events = state.feed.events();
    let block = panel_block(panel_title("Events", events.len(), state), FocusPanel::Events, state);

    if render_placeholder(frame, area, block.clone(), state, events.len(), "No events yet.") {
        return;
    }

    let fmt = state.config.ui.timestamp_format.as_str();
    let items: Vec<ListItem> = events
        .iter()
        .map(|ev| {
            let when = match &ev.end_time {
                Some(end) => format!(" {} → {}", local(&ev.start_time, fmt), local(end, fmt)),
                None => format!(" {}", local(&ev.start_time, fmt)),
            };
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(format!(" {}", ev.title), Theme::item_title()),
                    Span::styled(format!("  by {}", ev.organizer), Theme::byline()),
                ]),
                Line::from(Span::styled(when, Theme::tag())),
                Line::from(Span::styled(format!(" at {}", ev.location), Theme::byline())),
            ];
            lines.extend(
                ev.description
                    .lines()
                    .map(|l| Line::from(Span::styled(format!(" {}", l), Theme::body()))),
            );
            lines.push(Line::default());
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(Theme::selected());
    let mut list_state = ListState::default().with_selected(Some(state.selected_in(FocusPanel::Events)));
    frame.render_stateful_widget(list, area, &mut list_state);
}
