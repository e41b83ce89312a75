use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    match &state.status {
        Some(status) => {
            let style = match status.kind {
                StatusKind::Error => Theme::status_error(),
                StatusKind::Info => Theme::status_info(),
            };
            parts.push(Span::styled(format!(" {} ", status.text), style));
        }
        None => {
            parts.push(Span::styled(
                format!(
                    " {} posts | {} events | {} notifications ",
                    state.feed.posts().len(),
                    state.feed.events().len(),
                    state.feed.notifications().len(),
                ),
                Theme::status_bar(),
            ));
        }
    }

    if state.in_flight > 0 {
        parts.push(Span::styled(
            format!(" {} Submitting ({}) ", state.spinner(), state.in_flight),
            Theme::status_spinner(),
        ));
    }

    // Unsent drafts survive closing the form
    if state.overlay != Some(Overlay::PostForm) && !state.post_form.form.is_blank() {
        parts.push(Span::styled(" draft post (p) ", Theme::status_draft()));
    }
    if state.overlay != Some(Overlay::EventForm) && !state.event_form.form.is_blank() {
        parts.push(Span::styled(" draft event (e) ", Theme::status_draft()));
    }

    // Focus indicator
    let focus_name = match (state.overlay, state.focus) {
        (Some(Overlay::PostForm), _) => "NEW POST",
        (Some(Overlay::EventForm), _) => "NEW EVENT",
        (None, FocusPanel::Posts) => "POSTS",
        (None, FocusPanel::Events) => "EVENTS",
        (None, FocusPanel::Notifications) => "NOTIFICATIONS",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Theme::status_focus(),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn row(state: &AppState) -> (String, Vec<Style>) {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal.draw(|f| render(f, f.area(), state)).unwrap();
        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect();
        let styles = buffer.content().iter().map(|c| c.style()).collect();
        (text, styles)
    }

    #[test]
    fn test_spinner_and_focus_use_theme() {
        let mut state = AppState::new(AppConfig::default(), "http://localhost:8000".into());
        state.in_flight = 1;
        let (text, styles) = row(&state);
        let spin_at = text.find("Submitting").unwrap();
        assert_eq!(styles[spin_at].fg, Theme::status_spinner().fg);
        let focus_at = text.find("[POSTS]").unwrap();
        assert_eq!(styles[focus_at].fg, Theme::status_focus().fg);
    }

    #[test]
    fn test_closed_draft_is_flagged() {
        let mut state = AppState::new(AppConfig::default(), "http://localhost:8000".into());
        state.post_form.form.set(1, "Half written");
        let (text, _) = row(&state);
        assert!(text.contains("draft post (p)"));
        assert!(!text.contains("draft event"));
    }
}
