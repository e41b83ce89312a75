use crate::app::state::AppState;
use crate::forms::FormField;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthChar;

const LABEL_WIDTH: usize = 14;
const MULTILINE_ROWS: usize = 3;
const HINT: &str = "Tab/↑↓ move  Enter next  Alt+Enter newline  Ctrl+S submit  Esc close";

fn field_rows(field: &FormField) -> usize {
    if field.multiline {
        MULTILINE_ROWS
    } else {
        1
    }
}

/// First column to show so that `cursor_col` fits in `width` columns.
fn scroll_offset(cursor_col: usize, width: usize) -> usize {
    cursor_col.saturating_sub(width.saturating_sub(1))
}

/// Columns `skip..skip + width` of `line`. Wide chars cut by either edge are dropped.
fn clip(line: &str, skip: usize, width: usize) -> String {
    let mut col = 0;
    let mut out = String::new();
    for c in line.chars() {
        let w = c.width().unwrap_or(0);
        if col >= skip + width {
            break;
        }
        if col >= skip && col + w <= skip + width {
            out.push(c);
        }
        col += w;
    }
    out
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(form) = state.active_form() else {
        return;
    };

    // Field rows, a blank line, the hint line, borders
    let rows: usize = form.fields.iter().map(field_rows).sum();
    let height = to_u16(rows + 4);
    let width = (area.width.saturating_mul(7) / 10).max(50);
    let popup = centered(area, width, height);

    let block = Block::default()
        .title(format!(" {} ", form.title))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(1));

    let inner = block.inner(popup);
    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    let value_width = (inner.width as usize).saturating_sub(LABEL_WIDTH);
    let mut lines: Vec<Line> = Vec::with_capacity(rows + 2);
    let mut cursor: Option<(usize, usize)> = None;

    for (idx, field) in form.fields.iter().enumerate() {
        let focused = idx == form.focused;
        let rows = field_rows(field);
        let start = lines.len();

        let marker = if field.required { "*" } else { " " };
        let label = format!("{:<width$}", format!("{}{}", field.label, marker), width = LABEL_WIDTH);
        let label_style = if focused {
            Theme::field_label_focused()
        } else {
            Theme::field_label()
        };
        let gutter = || Span::raw(" ".repeat(LABEL_WIDTH));

        let input = &field.input;
        let (first_line, skip) = if focused {
            (
                input.cursor_line().saturating_sub(rows - 1),
                scroll_offset(input.cursor_column(), value_width),
            )
        } else {
            (0, 0)
        };

        if input.text.is_empty() {
            lines.push(Line::from(vec![
                Span::styled(label, label_style),
                Span::styled(field.placeholder, Theme::placeholder()),
            ]));
        } else {
            let mut label = Some(Span::styled(label, label_style));
            for text_line in input.lines().skip(first_line).take(rows) {
                let head = label.take().unwrap_or_else(gutter);
                let value = Span::styled(clip(text_line, skip, value_width), Theme::input_text());
                lines.push(Line::from(vec![head, value]));
            }
        }
        while lines.len() < start + rows {
            lines.push(Line::from(gutter()));
        }

        if focused {
            let row = start + input.cursor_line() - first_line;
            cursor = Some((row, LABEL_WIDTH + input.cursor_column() - skip));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(HINT, Theme::muted())));
    frame.render_widget(Paragraph::new(lines), inner);

    if let Some((row, col)) = cursor {
        let x = inner.x.saturating_add(to_u16(col));
        let y = inner.y.saturating_add(to_u16(row));
        if inner.width > 0 && y < inner.bottom() {
            frame.set_cursor_position((x.min(inner.right() - 1), y));
        }
    }
}
