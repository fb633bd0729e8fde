//! Table view state and derivation.
//!
//! Owns the filter text, sort key and selection of one table. Rows are
//! borrowed from the caller on every derivation and never modified.

use super::column::Column;
use super::error::TableError;
use super::value::compare_for_sort;
use super::Record;
use std::collections::HashSet;

/// Message shown in place of the table body when no row passes the filter.
pub const EMPTY_MESSAGE: &str = "Aucune donnée trouvée";

/// Sort direction of the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }

    /// Header indicator for this direction.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Filter and sort state of one table view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Free-text filter, matched case-insensitively against every field
    pub filter_text: String,
    /// Accessor of the sort column, if any
    pub sort_field: Option<&'static str>,
    /// Direction of the sort column
    pub sort_direction: SortDirection,
}

/// Action requested by the user on a table, handed back to the host page.
#[derive(Debug, PartialEq)]
pub enum TableEvent<'a, R> {
    /// A row was activated. Carries the full record.
    RowClicked(&'a R),
    /// The "add new" action was triggered.
    AddNew,
}

/// A filterable, sortable table over records of type `R`.
#[derive(Debug)]
pub struct TableView<R> {
    title: String,
    columns: Vec<Column<R>>,
    state: ViewState,
    /// Selected index in the derived (filtered and sorted) rows
    selected: usize,
    /// Column under the header cursor, used for keyboard sorting
    header_cursor: usize,
    add_new_label: Option<String>,
    row_click: bool,
}

impl<R: Record> TableView<R> {
    /// Build a table view.
    ///
    /// # Arguments
    /// * `title` - Table title
    /// * `columns` - Ordered column descriptors
    ///
    /// # Returns
    /// * `Result<TableView<R>, TableError>` - The view, or an error if there are
    ///   no columns or an accessor is declared twice
    pub fn new(title: impl Into<String>, columns: Vec<Column<R>>) -> Result<Self, TableError> {
        let title = title.into();
        if columns.is_empty() {
            return Err(TableError::NoColumns(title));
        }
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.accessor()) {
                return Err(TableError::DuplicateColumn(column.accessor().to_string()));
            }
        }
        Ok(Self {
            title,
            columns,
            state: ViewState::default(),
            selected: 0,
            header_cursor: 0,
            add_new_label: None,
            row_click: false,
        })
    }

    /// Expose an "add new" action with the given label.
    pub fn with_add_new(mut self, label: impl Into<String>) -> Self {
        self.add_new_label = Some(label.into());
        self
    }

    /// Make rows activatable as a whole.
    pub fn with_row_click(mut self) -> Self {
        self.row_click = true;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn header_cursor(&self) -> usize {
        self.header_cursor
    }

    pub fn add_new_label(&self) -> Option<&str> {
        self.add_new_label.as_deref()
    }

    /// Rows passing the current filter, in input order.
    ///
    /// # Details
    /// An empty filter keeps every row. Otherwise a row is kept when at least one
    /// of its fields contains the filter text, ignoring case.
    pub fn filter<'a>(&self, rows: &'a [R]) -> Vec<&'a R> {
        if self.state.filter_text.is_empty() {
            return rows.iter().collect();
        }
        let needle = self.state.filter_text.to_lowercase();
        rows.iter().filter(|row| row.matches(&needle)).collect()
    }

    /// Rows passing the filter, ordered by the current sort column.
    ///
    /// # Details
    /// Without a sort column the filtered order is kept. The sort is stable:
    /// rows with equal keys keep their input order in both directions.
    pub fn derive<'a>(&self, rows: &'a [R]) -> Vec<&'a R> {
        let filtered = self.filter(rows);
        let Some(column) = self.sort_column() else {
            return filtered;
        };
        let ascending = self.state.sort_direction.is_ascending();
        let mut keyed: Vec<_> = filtered
            .into_iter()
            .map(|row| (column.value(row), row))
            .collect();
        keyed.sort_by(|a, b| compare_for_sort(&a.0, &b.0, ascending));
        keyed.into_iter().map(|(_, row)| row).collect()
    }

    fn sort_column(&self) -> Option<&Column<R>> {
        let field = self.state.sort_field?;
        self.columns.iter().find(|c| c.accessor() == field)
    }

    /// Choose the sort column.
    ///
    /// # Details
    /// Choosing the current sort column toggles the direction. Choosing another
    /// column makes it the sort column, ascending.
    ///
    /// # Returns
    /// * `Result<(), TableError>` - Error if no column has this accessor; the
    ///   state is left unchanged
    pub fn toggle_sort(&mut self, accessor: &str) -> Result<(), TableError> {
        let index = self
            .columns
            .iter()
            .position(|c| c.accessor() == accessor)
            .ok_or_else(|| TableError::UnknownColumn(accessor.to_string()))?;
        self.toggle_sort_index(index);
        Ok(())
    }

    /// Toggle the sort on a column known to exist.
    fn toggle_sort_index(&mut self, index: usize) {
        let accessor = self.columns[index].accessor();
        if self.state.sort_field == Some(accessor) {
            self.state.sort_direction = self.state.sort_direction.toggled();
        } else {
            self.state.sort_field = Some(accessor);
            self.state.sort_direction = SortDirection::Ascending;
        }
    }

    /// Sort by the column under the header cursor.
    pub fn sort_by_header_cursor(&mut self) {
        self.toggle_sort_index(self.header_cursor);
    }

    /// Sort by a column picked by position, as with a header click.
    ///
    /// # Details
    /// Moves the header cursor to that column. Out-of-range positions are ignored.
    pub fn sort_by_column(&mut self, index: usize) -> bool {
        if index >= self.columns.len() {
            return false;
        }
        self.header_cursor = index;
        self.toggle_sort_index(index);
        true
    }

    /// Move the header cursor left, wrapping to the last column.
    pub fn header_left(&mut self) {
        if self.header_cursor == 0 {
            self.header_cursor = self.columns.len() - 1;
        } else {
            self.header_cursor -= 1;
        }
    }

    /// Move the header cursor right, wrapping to the first column.
    pub fn header_right(&mut self) {
        self.header_cursor = (self.header_cursor + 1) % self.columns.len();
    }

    /// Replace the filter text.
    pub fn set_filter(&mut self, text: impl Into<String>, rows: &[R]) {
        self.state.filter_text = text.into();
        self.clamp_selection(rows);
    }

    pub fn push_filter_char(&mut self, ch: char, rows: &[R]) {
        self.state.filter_text.push(ch);
        self.clamp_selection(rows);
    }

    pub fn pop_filter_char(&mut self, rows: &[R]) {
        self.state.filter_text.pop();
        self.clamp_selection(rows);
    }

    pub fn clear_filter(&mut self, rows: &[R]) {
        self.set_filter(String::new(), rows);
    }

    /// Keep the selection inside the derived rows.
    pub fn clamp_selection(&mut self, rows: &[R]) {
        let count = self.filter(rows).len();
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    /// Move selection up, wrapping to the bottom.
    pub fn move_up(&mut self, rows: &[R]) {
        let count = self.filter(rows).len();
        if count == 0 {
            return;
        }
        if self.selected == 0 {
            self.selected = count - 1;
        } else {
            self.selected = (self.selected - 1).min(count - 1);
        }
    }

    /// Move selection down, wrapping to the top.
    pub fn move_down(&mut self, rows: &[R]) {
        let count = self.filter(rows).len();
        if count == 0 {
            return;
        }
        self.selected = (self.selected + 1) % count;
    }

    /// Select a derived row by index. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize, rows: &[R]) -> bool {
        if index < self.filter(rows).len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// The selected row of the derived view.
    pub fn selected_row<'a>(&self, rows: &'a [R]) -> Option<&'a R> {
        self.derive(rows).get(self.selected).copied()
    }

    /// Activate the selected row.
    ///
    /// # Returns
    /// * `Option<TableEvent<R>>` - `RowClicked` with the full record, or `None`
    ///   if rows are not clickable or nothing is selected
    pub fn activate<'a>(&self, rows: &'a [R]) -> Option<TableEvent<'a, R>> {
        if !self.row_click {
            return None;
        }
        self.selected_row(rows).map(TableEvent::RowClicked)
    }

    /// Trigger the "add new" action, if this table exposes one.
    pub fn add_new<'a>(&self) -> Option<TableEvent<'a, R>> {
        self.add_new_label.as_ref().map(|_| TableEvent::AddNew)
    }

    /// Footer label for the filtered row count.
    pub fn footer(&self, rows: &[R]) -> String {
        result_label(self.filter(rows).len())
    }
}

/// Row count label, `0 résultat`, `1 résultat`, `2 résultats`.
pub fn result_label(count: usize) -> String {
    if count > 1 {
        format!("{} résultats", count)
    } else {
        format!("{} résultat", count)
    }
}
