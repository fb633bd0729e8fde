//! Tabs widget rendering.
//!
//! Displays one tab per page.

use crate::app::{App, Page};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the tabs widget.
///
/// # Details
/// Highlights the active page. `Tab` and `Shift-Tab` switch pages.
pub fn render_tabs(app: &App, area: Rect, buf: &mut Buffer) {
    let mut spans = Vec::new();
    for (i, page) in Page::ALL.iter().enumerate() {
        let is_active = *page == app.page;
        let style = if is_active {
            Style::default()
                .fg(Color::Yellow)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }

        let label = if is_active {
            format!("▶ {} ◀", page.title())
        } else {
            format!("  {}  ", page.title())
        };
        spans.push(Span::styled(label, style));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().title("Atelier").borders(Borders::ALL))
        .alignment(Alignment::Center);

    Widget::render(paragraph, area, buf);
}
