//! Record editor rendering.
//!
//! Draws the open form as a modal over the table.

use crate::editor::{Editor, FieldKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Rectangle of the given size centred in `area`, clamped to it.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn field_line<'a>(label: &'a str, value: &'a str, kind: &FieldKind, required: bool, focused: bool) -> Line<'a> {
    let marker = if focused { "▶ " } else { "  " };
    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let value_style = if focused {
        Style::default().fg(Color::White).bg(Color::Blue)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![
        Span::styled(marker, label_style),
        Span::styled(label, label_style),
        Span::styled(if required { " * : " } else { " : " }, label_style),
    ];
    match kind {
        FieldKind::Choice(_) => {
            spans.push(Span::styled("◀ ", label_style));
            spans.push(Span::styled(value, value_style));
            spans.push(Span::styled(" ▶", label_style));
        }
        _ => {
            spans.push(Span::styled(value, value_style));
            if focused {
                spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
            }
        }
    }
    Line::from(spans)
}

/// Render the editor modal.
///
/// # Arguments
/// * `editor` - Open editor
/// * `area` - Full screen area; the modal is centred in it
/// * `buf` - Buffer to render to
///
/// # Details
/// One line per field, the focused one highlighted. Choice fields show
/// arrows since `←`/`→` cycle their values.
pub fn render_editor(editor: &Editor, area: Rect, buf: &mut Buffer) {
    let form = &editor.form;
    let height = form.fields().len() as u16 + 4;
    let modal = centered(area, 70, height);
    Widget::render(Clear, modal, buf);

    let block = Block::default()
        .title(format!(" {} ", editor.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(modal);
    Widget::render(block, modal, buf);

    let [fields_area, hint_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let lines: Vec<Line> = form
        .fields()
        .iter()
        .zip(form.values())
        .enumerate()
        .map(|(i, (field, value))| {
            field_line(field.label, value, &field.kind, field.required, i == form.focus())
        })
        .collect();
    Widget::render(Paragraph::new(lines), fields_area, buf);

    let hint = Paragraph::new(Span::styled(
        "Tab/↑/↓ champ  ←/→ choix  Entrée enregistrer  Échap annuler",
        Style::default().fg(Color::DarkGray),
    ));
    Widget::render(hint, hint_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Page;
    use crate::records::Client;
    use crate::store::Store;

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
    fn test_centered() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered(area, 70, 10), Rect::new(15, 15, 70, 10));
        assert_eq!(centered(Rect::new(0, 0, 20, 5), 70, 10), Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn test_render_edit_form() {
        let store = Store::fixtures();
        let editor = Editor::edit(Page::Clients, &store.clients[1], &store);
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        render_editor(&editor, area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains(editor.title()));
        assert!(text.contains("Immobilier Québec"));
        assert!(text.contains("◀ "));
        assert!(text.contains("Échap annuler"));
    }

    #[test]
    fn test_render_new_form() {
        let store = Store::fixtures();
        let editor = Editor::create::<Client>(Page::Clients, &store);
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        render_editor(&editor, area, &mut buf);
        assert!(buffer_text(&buf).contains(editor.title()));
    }
}
