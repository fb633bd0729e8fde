//! Search widget rendering.
//!
//! Displays the filter input of the active table.

use crate::app::{App, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the search widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Displays the active table's filter text. Highlights when in search mode.
pub fn render_search(app: &App, area: Rect, buf: &mut Buffer) {
    let is_active = app.mode == UiMode::Search;
    let query = app.search_query();
    let prompt = if is_active {
        "Recherche : "
    } else {
        "Recherche ('/') : "
    };

    let line = Line::from(vec![
        Span::styled(prompt, Style::default().fg(Color::Yellow)),
        Span::styled(
            query,
            Style::default().fg(if is_active { Color::White } else { Color::Gray }),
        ),
        Span::styled(
            if is_active { "_" } else { "" },
            Style::default().fg(Color::Yellow),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(if is_active {
                "Recherche (Entrée/Échap pour terminer, Ctrl-U pour effacer)"
            } else {
                "Recherche"
            })
            .borders(Borders::ALL)
            .style(if is_active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            }),
    );

    Widget::render(paragraph, area, buf);
}
