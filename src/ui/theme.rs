use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Rgb(99, 102, 241);
    pub const ACCENT_SOFT: Color = Color::Rgb(165, 180, 252);
    pub const TEXT_MUTED: Color = Color::DarkGray;
    pub const BG_ELEVATED: Color = Color::Rgb(30, 32, 48);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_SOFT)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn item_title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn byline() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn body() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn tag() -> Style {
        Style::default().fg(Self::ACCENT_SOFT)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED).add_modifier(Modifier::ITALIC)
    }

    pub fn selected() -> Style {
        Style::default().bg(Self::BG_ELEVATED)
    }

    pub fn unread() -> Style {
        Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD)
    }

    pub fn read() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn header() -> Style {
        Style::default().fg(Color::White).bg(Self::BG_ELEVATED)
    }

    pub fn brand() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn loading() -> Style {
        Style::default().fg(Color::Yellow).bg(Self::BG_ELEVATED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_error() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_info() -> Style {
        Style::default().fg(Color::Black).bg(Color::Green)
    }

    pub fn status_spinner() -> Style {
        Style::default().fg(Color::Yellow).bg(Color::DarkGray)
    }

    pub fn status_focus() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }

    pub fn status_draft() -> Style {
        Style::default().fg(Self::ACCENT_SOFT).bg(Color::DarkGray)
    }

    pub fn field_label() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn field_label_focused() -> Style {
        Style::default().fg(Self::ACCENT_SOFT).add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }
}
