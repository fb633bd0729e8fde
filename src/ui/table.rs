//! Table widget rendering.
//!
//! Draws any [`TableView`] with its header, rows, empty state and footer.

use crate::table::view::{EMPTY_MESSAGE, result_label};
use crate::table::{Record, TableView};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

/// Lines taken by the header row.
const HEADER_HEIGHT: u16 = 1;
const COLUMN_SPACING: u16 = 1;

/// Areas of a table block: rows (header included) and the footer line.
fn split(area: Rect) -> (Rect, Rect) {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let [rows, footer] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
    (rows, footer)
}

/// Area holding the data rows, below the header.
pub fn body_area(area: Rect) -> Rect {
    let (rows, _) = split(area);
    Rect {
        y: rows.y.saturating_add(HEADER_HEIGHT),
        height: rows.height.saturating_sub(HEADER_HEIGHT),
        ..rows
    }
}

/// Line holding the column headers.
pub fn header_area(area: Rect) -> Rect {
    let (rows, _) = split(area);
    Rect {
        height: rows.height.min(HEADER_HEIGHT),
        ..rows
    }
}

fn column_widths(count: usize) -> Vec<Constraint> {
    vec![Constraint::Fill(1); count]
}

/// Column under screen column `x`, for a table of `count` columns.
///
/// # Details
/// Uses the same split as rendering. The gaps between columns belong to no column.
pub fn column_at(area: Rect, count: usize, x: u16) -> Option<usize> {
    let (rows, _) = split(area);
    let cells = Layout::horizontal(column_widths(count))
        .spacing(COLUMN_SPACING)
        .split(rows);
    cells.iter().position(|cell| x >= cell.x && x < cell.x + cell.width)
}

/// First visible row so that the selection stays centred.
///
/// # Arguments
/// * `selected` - Selected row index
/// * `count` - Number of rows
/// * `visible` - Number of rows that fit on screen
pub fn scroll_offset(selected: usize, count: usize, visible: usize) -> usize {
    let visible = visible.max(1);
    let offset = selected.saturating_sub(visible / 2);
    offset.min(count.saturating_sub(visible))
}

/// Render a table view.
///
/// # Arguments
/// * `view` - Table view to draw
/// * `rows` - Records of the page
/// * `focused` - Whether the table receives navigation keys
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// The title carries the "add new" hint when the view exposes that action.
/// The header marks the sort column with an arrow and the header cursor with
/// an underline. With no row passing the filter, an empty-state message
/// replaces the body. The footer always shows the filtered row count.
pub fn render_table<R: Record>(view: &TableView<R>, rows: &[R], focused: bool, area: Rect, buf: &mut Buffer) {
    let mut title = vec![Span::styled(
        format!(" {} ", view.title()),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if let Some(label) = view.add_new_label() {
        title.push(Span::styled(
            format!("[n] + {} ", label),
            Style::default().fg(Color::Green),
        ));
    }
    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        });
    Widget::render(block, area, buf);

    let (rows_area, footer_area) = split(area);
    let derived = view.derive(rows);

    let footer = Paragraph::new(Span::styled(
        result_label(derived.len()),
        Style::default().fg(Color::Gray),
    ));
    Widget::render(footer, footer_area, buf);

    if derived.is_empty() {
        let empty = Paragraph::new(EMPTY_MESSAGE)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        Widget::render(empty, rows_area, buf);
        return;
    }

    let state = view.state();
    let header = Row::new(view.columns().iter().enumerate().map(|(i, column)| {
        let mut text = column.header().to_string();
        if state.sort_field == Some(column.accessor()) {
            text.push(' ');
            text.push_str(state.sort_direction.arrow());
        }
        let mut style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        if focused && i == view.header_cursor() {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        Cell::from(text).style(style)
    }))
    .height(HEADER_HEIGHT);

    let visible = rows_area.height.saturating_sub(HEADER_HEIGHT) as usize;
    let selected = view.selected().min(derived.len() - 1);
    let offset = scroll_offset(selected, derived.len(), visible);

    let body: Vec<Row> = derived
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(idx, row)| {
            let cells = view.columns().iter().map(|column| Cell::from(column.render(row)));
            let style = if idx == selected && focused {
                Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(cells).style(style)
        })
        .collect();

    let table = Table::new(body, column_widths(view.columns().len()))
        .header(header)
        .column_spacing(COLUMN_SPACING);
    Widget::render(table, rows_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Client, columns, fixtures};

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(0, 20, 5), 0);
        assert_eq!(scroll_offset(10, 20, 5), 8);
        assert_eq!(scroll_offset(19, 20, 5), 15);
        assert_eq!(scroll_offset(3, 4, 10), 0);
    }

    #[test]
    fn test_body_area_skips_border_and_header() {
        let body = body_area(Rect::new(0, 0, 40, 12));
        assert_eq!(body, Rect::new(1, 2, 38, 8));
    }

    #[test]
    fn test_header_area_is_first_inner_line() {
        assert_eq!(header_area(Rect::new(0, 0, 40, 12)), Rect::new(1, 1, 38, 1));
    }

    #[test]
    fn test_column_at_matches_rendered_headers() {
        let rows = fixtures::clients();
        let view = columns::clients_table().unwrap();
        let area = Rect::new(0, 0, 140, 14);
        let mut buf = Buffer::empty(area);
        render_table(&view, &rows, false, area, &mut buf);

        let header = header_area(area);
        let count = view.columns().len();
        for (i, column) in view.columns().iter().enumerate() {
            let label = column.header();
            let line: String = (header.left()..header.right())
                .map(|x| buf[(x, header.y)].symbol().to_string())
                .collect();
            let start = line.find(label).unwrap();
            let x = header.x + line[..start].chars().count() as u16;
            assert_eq!(column_at(area, count, x), Some(i), "header {}", label);
        }
        assert_eq!(column_at(area, count, 0), None);
    }

    #[test]
    fn test_render_rows_and_footer() {
        let rows = fixtures::clients();
        let view = columns::clients_table().unwrap();
        let area = Rect::new(0, 0, 140, 14);
        let mut buf = Buffer::empty(area);
        render_table(&view, &rows, true, area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Liste des clients"));
        assert!(text.contains("Nouveau Client"));
        assert!(text.contains("Constructions Modernes"));
        assert!(text.contains("8 résultats"));
    }

    #[test]
    fn test_render_empty_state() {
        let rows: Vec<Client> = Vec::new();
        let view = columns::clients_table().unwrap();
        let area = Rect::new(0, 0, 80, 8);
        let mut buf = Buffer::empty(area);
        render_table(&view, &rows, true, area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains(EMPTY_MESSAGE));
        assert!(text.contains("0 résultat"));
        assert!(!text.contains("Nom du contact"));
    }

    #[test]
    fn test_render_sort_arrow() {
        let rows = fixtures::clients();
        let mut view = columns::clients_table().unwrap();
        view.toggle_sort("city").unwrap();
        view.toggle_sort("city").unwrap();
        let area = Rect::new(0, 0, 140, 14);
        let mut buf = Buffer::empty(area);
        render_table(&view, &rows, false, area, &mut buf);
        assert!(buffer_text(&buf).contains("Ville ▼"));
    }
}
