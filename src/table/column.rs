//! Column descriptors.
//!
//! A column binds an accessor name to a typed getter and an optional cell renderer.

use super::value::CellValue;
use ratatui::text::Line;

/// Custom cell renderer. Receives the extracted value and the full row.
pub type Renderer<R> = Box<dyn Fn(&CellValue, &R) -> Line<'static>>;

/// Describes how to extract and display one field across all rows.
pub struct Column<R> {
    accessor: &'static str,
    header: &'static str,
    getter: fn(&R) -> CellValue,
    renderer: Option<Renderer<R>>,
}

impl<R> Column<R> {
    /// Create a column displaying the raw value.
    ///
    /// # Arguments
    /// * `accessor` - Field name, unique within a table
    /// * `header` - Header label
    /// * `getter` - Extracts the field from a row
    pub fn new(accessor: &'static str, header: &'static str, getter: fn(&R) -> CellValue) -> Self {
        Self {
            accessor,
            header,
            getter,
            renderer: None,
        }
    }

    /// Replace the raw display with a custom renderer.
    pub fn with_renderer(
        mut self,
        renderer: impl Fn(&CellValue, &R) -> Line<'static> + 'static,
    ) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn accessor(&self) -> &'static str {
        self.accessor
    }

    pub fn header(&self) -> &'static str {
        self.header
    }

    /// Extract this column's value from a row.
    pub fn value(&self, row: &R) -> CellValue {
        (self.getter)(row)
    }

    /// Render this column's cell for a row.
    ///
    /// # Details
    /// Uses the custom renderer when one is set, otherwise the value's string form.
    pub fn render(&self, row: &R) -> Line<'static> {
        let value = self.value(row);
        match &self.renderer {
            Some(renderer) => renderer(&value, row),
            None => Line::from(value.to_string()),
        }
    }
}

impl<R> std::fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("accessor", &self.accessor)
            .field("header", &self.header)
            .field("custom_renderer", &self.renderer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Style};
    use ratatui::text::Span;

    struct Row {
        name: String,
        amount: f64,
    }

    fn row() -> Row {
        Row {
            name: "Laval".to_string(),
            amount: 12.0,
        }
    }

    #[test]
    fn test_raw_render() {
        let column: Column<Row> = Column::new("name", "Nom", |r| CellValue::text(r.name.clone()));
        assert_eq!(column.render(&row()), Line::from("Laval"));
        assert_eq!(column.accessor(), "name");
        assert_eq!(column.header(), "Nom");
    }

    #[test]
    fn test_custom_renderer_sees_row() {
        let column: Column<Row> = Column::new("amount", "Montant", |r: &Row| CellValue::Number(r.amount))
            .with_renderer(|value, row| {
                Line::from(Span::styled(
                    format!("{} ({})", value, row.name),
                    Style::default().fg(Color::Green),
                ))
            });
        let line = column.render(&row());
        assert_eq!(line.spans[0].content, "12 (Laval)");
        assert_eq!(line.spans[0].style.fg, Some(Color::Green));
    }
}
