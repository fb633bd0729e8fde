//! Dashboard watch list rendering.

use crate::app::App;
use crate::records::dashboard::{Stage, WatchedProject, watched_projects};
use crate::records::format::{progress_bar, status_badge};
use crate::records::{InstallationStatus, ProductionStatus};
use crate::table::CellValue;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const EMPTY_WATCH_LIST: &str = "Aucun projet à surveiller";

fn stage_badge(stage: Stage) -> Line<'static> {
    match stage {
        Stage::Production(status) => {
            status_badge::<ProductionStatus>(&CellValue::text(status.label()))
        }
        Stage::Installation(status) => {
            status_badge::<InstallationStatus>(&CellValue::text(status.label()))
        }
    }
}

fn project_lines(project: &WatchedProject<'_>) -> [Line<'static>; 4] {
    let mut title = vec![
        Span::styled(
            format!("{} - {}", project.client_name, project.number),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    title.extend(stage_badge(project.stage).spans);
    [
        Line::from(title),
        Line::from(Span::styled(
            format!("{} : {}% complétée", project.stage.label(), project.progress),
            Style::default().fg(Color::Gray),
        )),
        progress_bar(&CellValue::from(project.progress)),
        Line::default(),
    ]
}

/// Render the "Projets à surveiller" list of the dashboard.
///
/// # Details
/// Lists unfinished production jobs then installations, each with its
/// status badge and a progress bar.
pub fn render_dashboard(app: &App, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(Span::styled(
            " Projets à surveiller ",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL);

    let projects = watched_projects(&app.store);
    if projects.is_empty() {
        let empty = Paragraph::new(EMPTY_WATCH_LIST)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(block);
        Widget::render(empty, area, buf);
        return;
    }

    let lines: Vec<Line> = projects.iter().flat_map(project_lines).collect();
    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    Widget::render(paragraph, area, buf);
}
