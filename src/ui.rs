use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use wheelpicker::tui::theme::*;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let picker_height = app.picker.height() + 2; // borders

    let layout = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(picker_height),
        Constraint::Length(1), // Spacing
        Constraint::Length(1), // Selection
        Constraint::Fill(1),
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    let width = (app.picker.column_count() as u16 * 14).min(area.width);
    let picker_area = centered(layout[1], width);

    let block = Block::default()
        .title(" Pick a time ")
        .title_style(Style::new().fg(ACCENT_MINT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::new().fg(TEXT_DIM));
    let inner = block.inner(picker_area);
    frame.render_widget(block, picker_area);
    frame.render_stateful_widget(&app.picker, inner, &mut app.state);

    let selection = Line::from(vec![
        Span::styled("Selected: ", Style::new().fg(TEXT_DIM)),
        Span::styled(
            app.selected_text(),
            Style::new().fg(TEXT_WHITE).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(selection).alignment(Alignment::Center),
        layout[3],
    );

    render_hotkeys(frame, layout[5]);
}

fn render_hotkeys(frame: &mut Frame, area: Rect) {
    let hotkeys = Line::from(vec![
        Span::styled("[↑/↓]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" scroll · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[←/→]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" column · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[r]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" reset · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" quit", Style::new().fg(TEXT_DIM)),
    ]);
    frame.render_widget(Paragraph::new(hotkeys).alignment(Alignment::Center), area);
}

fn centered(area: Rect, width: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    Rect::new(x, area.y, width.min(area.width), area.height)
}
