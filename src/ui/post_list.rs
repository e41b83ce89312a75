use super::{panel_block, panel_title, render_placeholder};
use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let posts = state.feed.posts();
    let block = panel_block(panel_title("Latest Posts", posts.len(), state), FocusPanel::Posts, state);

    if render_placeholder(frame, area, block.clone(), state, posts.len(), "No posts yet.") {
        return;
    }

    let items: Vec<ListItem> = posts
        .iter()
        .map(|post| {
            let mut lines = vec![Line::from(vec![
                Span::styled(format!(" {}", post.title), Theme::item_title()),
                Span::styled(format!("  by {}", post.author), Theme::byline()),
            ])];
            lines.extend(
                post.content
                    .lines()
                    .map(|l| Line::from(Span::styled(format!(" {}", l), Theme::body()))),
            );
            if !post.tags.is_empty() {
                let chips: Vec<String> = post.tags.iter().map(|t| format!("#{}", t)).collect();
                lines.push(Line::from(Span::styled(format!(" {}", chips.join(" ")), Theme::tag())));
            }
            if let Some(url) = &post.image_url {
                lines.push(Line::from(Span::styled(format!(" [image] {}", url), Theme::byline())));
            }
            lines.push(Line::default());
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(Theme::selected());
    let mut list_state = ListState::default().with_selected(Some(state.selected_in(FocusPanel::Posts)));
    frame.render_stateful_widget(list, area, &mut list_state);
}
