use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const HINTS: &str = "p post  e event  r refresh  Tab panel  q quit ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = vec![
        Span::styled(" ◆ Community ", Theme::brand()),
        Span::styled(format!(" {} ", state.backend_url), Theme::header()),
    ];

    if state.feed.loading() {
        parts.push(Span::styled(format!(" {} Loading... ", state.spinner()), Theme::loading()));
    } else if let Some(at) = state.feed.last_synced() {
        parts.push(Span::styled(
            format!(" synced {} ", at.format(&state.config.ui.timestamp_format)),
            Theme::header(),
        ));
    }

    let unread = state.feed.unread_count();
    if unread > 0 {
        parts.push(Span::styled(format!(" {} unread ", unread), Theme::unread().bg(Theme::BG_ELEVATED)));
    }

    // Right-align the key hints
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + HINTS.len());
    parts.push(Span::styled(" ".repeat(remaining), Theme::header()));
    parts.push(Span::styled(HINTS, Theme::header().fg(Theme::TEXT_MUTED)));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
