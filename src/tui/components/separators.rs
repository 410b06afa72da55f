//! Separator labels between wheel columns.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Widget,
};

use crate::tui::theme::*;

/// Columns a separator occupies: its text plus one space either side.
pub fn separator_width(text: &str) -> u16 {
    if text.is_empty() {
        0
    } else {
        (Line::raw(text).width() as u16).saturating_add(2)
    }
}

/// Render `text` centered in `area` on screen row `y`.
pub fn render_separator_label(buf: &mut Buffer, area: Rect, text: &str, y: u16) {
    if text.is_empty() || y < area.y || y >= area.bottom() {
        return;
    }
    let row = Rect { y, height: 1, ..area };
    Line::styled(
        text,
        Style::new().fg(ACCENT_GOLD).add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .render(row, buf);
}
