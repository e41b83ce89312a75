mod event_list;
mod form_overlay;
mod header;
mod layout;
mod notification_list;
mod post_list;
mod status_bar;
mod theme;

use crate::app::state::{AppState, FocusPanel};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use theme::Theme;

/// Redraw the whole screen from application state.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    header::render(frame, app_layout.header, state);
    post_list::render(frame, app_layout.posts, state);
    event_list::render(frame, app_layout.events, state);
    notification_list::render(frame, app_layout.notifications, state);
    status_bar::render(frame, app_layout.status_bar, state);

    if state.active_form().is_some() {
        form_overlay::render(frame, area, state);
    }
}

/// Bordered block for one of the three resource panels.
fn panel_block<'a>(title: String, panel: FocusPanel, state: &AppState) -> Block<'a> {
    let focused = state.focus == panel && state.overlay.is_none();
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };
    Block::default()
        .title(title)
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
}

/// Placeholder shown instead of a list: first load, or nothing to show.
///
/// Returns `true` if it rendered something.
fn render_placeholder(frame: &mut Frame, area: Rect, block: Block, state: &AppState, len: usize, empty: &str) -> bool {
    let text = if state.feed.loading() && state.feed.last_synced().is_none() {
        "Loading..."
    } else if len == 0 {
        empty
    } else {
        return false;
    };
    let paragraph = Paragraph::new(Span::styled(format!(" {}", text), Theme::muted())).block(block);
    frame.render_widget(paragraph, area);
    true
}

/// Panel title with an item count and a refresh marker.
fn panel_title(name: &str, count: usize, state: &AppState) -> String {
    if state.feed.loading() && state.feed.last_synced().is_some() {
        format!(" {} ({}) {} ", name, count, state.spinner())
    } else if count > 0 {
        format!(" {} ({}) ", name, count)
    } else {
        format!(" {} ", name)
    }
}
