//! Application state management.
//!
//! Manages the active page, its table view, search input and the record editor.

use crate::editor::{Editable, Editor};
use crate::export;
use crate::records::columns;
use crate::records::{Client, Installation, Order, Production, Submission};
use crate::store::Store;
use crate::table::{Record, TableError, TableEvent, TableView};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Run `$body` with the active page's table view and rows.
///
/// `$view` is bound to `&mut TableView<R>` and `$rows` to `&[R]`. Pages
/// without a table yield the default value of `$body`'s type.
macro_rules! with_table {
    ($app:ident, $view:ident, $rows:ident => $body:expr) => {
        match $app.page {
            Page::Dashboard => Default::default(),
            Page::Clients => {
                let $view = &mut $app.clients;
                let $rows = $app.store.clients.as_slice();
                $body
            }
            Page::Submissions => {
                let $view = &mut $app.submissions;
                let $rows = $app.store.submissions.as_slice();
                $body
            }
            Page::Orders => {
                let $view = &mut $app.orders;
                let $rows = $app.store.orders.as_slice();
                $body
            }
            Page::Production => {
                let $view = &mut $app.productions;
                let $rows = $app.store.productions.as_slice();
                $body
            }
            Page::Installations => {
                let $view = &mut $app.installations;
                let $rows = $app.store.installations.as_slice();
                $body
            }
        }
    };
}

/// Current input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Table navigation
    Table,
    /// Typing into the search bar
    Search,
    /// Record form open
    Editor,
}

/// Pages of the application, one per record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Dashboard,
    Clients,
    Submissions,
    Orders,
    Production,
    Installations,
}

impl Page {
    /// Pages in tab order.
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Clients,
        Page::Submissions,
        Page::Orders,
        Page::Production,
        Page::Installations,
    ];

    /// Tab label.
    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Tableau de bord",
            Page::Clients => "Clients",
            Page::Submissions => "Soumissions",
            Page::Orders => "Commandes",
            Page::Production => "Production",
            Page::Installations => "Installations",
        }
    }

    /// Whether the page shows a record table.
    pub fn has_table(self) -> bool {
        self != Page::Dashboard
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// All records
    pub store: Store,
    /// Active page
    pub page: Page,
    /// Current UI mode
    pub mode: UiMode,
    pub clients: TableView<Client>,
    pub submissions: TableView<Submission>,
    pub orders: TableView<Order>,
    pub productions: TableView<Production>,
    pub installations: TableView<Installation>,
    /// Open record form, if any
    pub editor: Option<Editor>,
    /// Status message to display
    pub status_message: Option<String>,
    /// Reference date for the dashboard's monthly figures
    pub today: NaiveDate,
}

/// Status line describing a view's sort.
fn sort_status<R: Record>(view: &TableView<R>) -> String {
    let header = view.columns()[view.header_cursor()].header();
    format!("Tri : {} {}", header, view.state().sort_direction.arrow())
}

/// Editor for a table event: edit the clicked record or create a new one.
fn open_editor<R: Editable>(page: Page, event: Option<TableEvent<'_, R>>, store: &Store) -> Option<Editor> {
    match event? {
        TableEvent::RowClicked(record) => Some(Editor::edit(page, record, store)),
        TableEvent::AddNew => Some(Editor::create::<R>(page, store)),
    }
}

impl App {
    /// Create a new application state.
    ///
    /// # Arguments
    /// * `store` - Records to show
    /// * `page` - Page shown first
    ///
    /// # Returns
    /// * `Result<App, TableError>` - Error if a page's table definition is invalid
    pub fn new(store: Store, page: Page) -> Result<Self, TableError> {
        Ok(Self {
            store,
            page,
            mode: UiMode::Table,
            clients: columns::clients_table()?,
            submissions: columns::submissions_table()?,
            orders: columns::orders_table()?,
            productions: columns::productions_table()?,
            installations: columns::installations_table()?,
            editor: None,
            status_message: None,
            today: Local::now().date_naive(),
        })
    }

    /// Set status message.
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a page. Leaves search mode.
    pub fn switch_page(&mut self, page: Page) {
        log::debug!("switching to page {}", page.title());
        self.page = page;
        if self.mode == UiMode::Search {
            self.mode = UiMode::Table;
        }
    }

    pub fn next_page(&mut self) {
        self.switch_page(self.page.next());
    }

    pub fn prev_page(&mut self) {
        self.switch_page(self.page.prev());
    }

    pub fn move_up(&mut self) {
        with_table!(self, view, rows => view.move_up(rows));
    }

    pub fn move_down(&mut self) {
        with_table!(self, view, rows => view.move_down(rows));
    }

    pub fn header_left(&mut self) {
        with_table!(self, view, _rows => view.header_left());
    }

    pub fn header_right(&mut self) {
        with_table!(self, view, _rows => view.header_right());
    }

    /// Sort by the column under the header cursor and report the new order.
    pub fn sort_by_header_cursor(&mut self) {
        let message = with_table!(self, view, _rows => {
            view.sort_by_header_cursor();
            Some(sort_status(view))
        });
        if let Some(message) = message {
            self.set_status(message);
        }
    }

    /// Sort by the column at `index`, as a header click does.
    pub fn sort_by_column(&mut self, index: usize) {
        let message = with_table!(self, view, _rows => {
            if view.sort_by_column(index) {
                Some(sort_status(view))
            } else {
                None
            }
        });
        if let Some(message) = message {
            self.set_status(message);
        }
    }

    /// Number of columns of the active table.
    pub fn column_count(&mut self) -> usize {
        with_table!(self, view, _rows => view.columns().len())
    }

    /// Search text of the active table.
    pub fn search_query(&self) -> &str {
        match self.page {
            Page::Dashboard => "",
            Page::Clients => &self.clients.state().filter_text,
            Page::Submissions => &self.submissions.state().filter_text,
            Page::Orders => &self.orders.state().filter_text,
            Page::Production => &self.productions.state().filter_text,
            Page::Installations => &self.installations.state().filter_text,
        }
    }

    /// Enter search mode on pages with a table.
    pub fn start_search(&mut self) {
        if self.page.has_table() {
            self.clear_status();
            self.mode = UiMode::Search;
        }
    }

    /// Add a character to the search query.
    ///
    /// # Details
    /// Only works in Search mode.
    pub fn add_search_char(&mut self, ch: char) {
        if self.mode == UiMode::Search {
            with_table!(self, view, rows => view.push_filter_char(ch, rows));
        }
    }

    /// Remove last character from search query.
    ///
    /// # Details
    /// Only works in Search mode.
    pub fn remove_search_char(&mut self) {
        if self.mode == UiMode::Search {
            with_table!(self, view, rows => view.pop_filter_char(rows));
        }
    }

    pub fn clear_search(&mut self) {
        with_table!(self, view, rows => view.clear_filter(rows));
    }

    /// Select a row of the active table by its position in the visible rows.
    pub fn select_row(&mut self, index: usize) -> bool {
        with_table!(self, view, rows => view.select(index, rows))
    }

    /// Selected index and number of visible rows of the active table.
    pub fn selection(&mut self) -> (usize, usize) {
        with_table!(self, view, rows => (view.selected(), view.derive(rows).len()))
    }

    /// Open the selected record in the editor.
    pub fn activate_selected(&mut self) {
        let page = self.page;
        let editor = with_table!(self, view, rows => open_editor(page, view.activate(rows), &self.store));
        self.open(editor);
    }

    /// Open an empty editor for a new record of the active page.
    pub fn add_new(&mut self) {
        let page = self.page;
        let editor = with_table!(self, view, _rows => open_editor(page, view.add_new(), &self.store));
        self.open(editor);
    }

    fn open(&mut self, editor: Option<Editor>) {
        if let Some(editor) = editor {
            log::debug!("opening editor: {}", editor.title());
            self.editor = Some(editor);
            self.mode = UiMode::Editor;
        }
    }

    /// Close the editor without saving.
    pub fn cancel_editor(&mut self) {
        self.editor = None;
        self.mode = UiMode::Table;
    }

    /// Validate and save the open form.
    ///
    /// # Details
    /// On success the editor closes and the saved record is reported in the
    /// status bar. On failure the error is shown and the form stays open.
    pub fn submit_editor(&mut self) {
        let Some(editor) = self.editor.as_ref() else {
            return;
        };
        let result = match editor.page() {
            Page::Dashboard => {
                self.cancel_editor();
                return;
            }
            Page::Clients => editor.submit::<Client>(&mut self.store).map(|r| r.name),
            Page::Submissions => editor.submit::<Submission>(&mut self.store).map(|r| r.number),
            Page::Orders => editor.submit::<Order>(&mut self.store).map(|r| r.number),
            Page::Production => editor.submit::<Production>(&mut self.store).map(|r| r.number),
            Page::Installations => {
                editor.submit::<Installation>(&mut self.store).map(|r| r.number)
            }
        };
        match result {
            Ok(label) => {
                log::info!("saved {} on page {}", label, self.page.title());
                self.set_status(format!("Enregistré : {}", label));
                self.cancel_editor();
                with_table!(self, view, rows => view.clamp_selection(rows));
            }
            Err(e) => {
                log::warn!("form rejected: {}", e);
                self.set_status(format!("Erreur : {}", e));
            }
        }
    }

    /// Export the client list and report the outcome in the status bar.
    ///
    /// # Details
    /// Only available from the Clients page.
    pub fn export_clients(&mut self, path: &Path) {
        if self.page != Page::Clients {
            self.set_status("L'export est disponible depuis la page Clients".to_string());
            return;
        }
        match export::export_csv(&self.store.clients, path) {
            Ok(count) => self.set_status(format!("{} clients exportés vers {}", count, path.display())),
            Err(e) => {
                log::error!("client export failed: {}", e);
                self.set_status(format!("Échec de l'export : {}", e));
            }
        }
    }

    /// Save the snapshot and report the outcome in the status bar.
    pub fn save_snapshot(&mut self, path: &Path) {
        match self.store.save(path) {
            Ok(()) => self.set_status(format!("Données enregistrées dans {}", path.display())),
            Err(e) => {
                log::error!("snapshot save failed: {:#}", e);
                self.set_status(format!("Échec de l'enregistrement : {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::SortDirection;
    use tempfile::TempDir;

    fn app() -> App {
        App::new(Store::fixtures(), Page::Clients).unwrap()
    }

    #[test]
    fn test_app_new() {
        let app = app();
        assert_eq!(app.page, Page::Clients);
        assert_eq!(app.mode, UiMode::Table);
        assert!(app.editor.is_none());
        assert_eq!(app.clients.selected(), 0);
    }

    #[test]
    fn test_page_cycle() {
        let mut app = app();
        app.prev_page();
        assert_eq!(app.page, Page::Dashboard);
        app.prev_page();
        assert_eq!(app.page, Page::Installations);
        app.next_page();
        app.next_page();
        assert_eq!(app.page, Page::Clients);
    }

    #[test]
    fn test_search_only_in_search_mode() {
        let mut app = app();
        app.add_search_char('x');
        assert_eq!(app.search_query(), "");

        app.mode = UiMode::Search;
        for ch in "québec".chars() {
            app.add_search_char(ch);
        }
        assert_eq!(app.search_query(), "québec");
        assert_eq!(app.clients.derive(&app.store.clients).len(), 1);

        app.remove_search_char();
        assert_eq!(app.search_query(), "québe");
        app.clear_search();
        assert_eq!(app.search_query(), "");
    }

    #[test]
    fn test_search_is_per_page() {
        let mut app = app();
        app.mode = UiMode::Search;
        app.add_search_char('z');
        app.next_page();
        assert_eq!(app.mode, UiMode::Table);
        assert_eq!(app.search_query(), "");
        app.prev_page();
        assert_eq!(app.search_query(), "z");
    }

    #[test]
    fn test_move_selection() {
        let mut app = app();
        app.move_down();
        assert_eq!(app.clients.selected(), 1);
        app.move_up();
        app.move_up(); // Should wrap to end
        assert_eq!(app.clients.selected(), 7);
    }

    #[test]
    fn test_sort_by_header_cursor() {
        let mut app = app();
        app.switch_page(Page::Orders);
        app.header_right();
        app.sort_by_header_cursor();
        assert_eq!(app.orders.state().sort_field, Some("clientName"));
        assert_eq!(app.status_message.as_deref(), Some("Tri : Client ▲"));
        app.sort_by_header_cursor();
        assert_eq!(app.orders.state().sort_direction, SortDirection::Descending);
    }

    #[test]
    fn test_sort_by_column_reports_order() {
        let mut app = app();
        assert_eq!(app.column_count(), 5);
        app.sort_by_column(2);
        assert_eq!(app.clients.header_cursor(), 2);
        assert_eq!(app.clients.state().sort_field, Some("city"));
        assert_eq!(app.status_message.as_deref(), Some("Tri : Ville ▲"));

        app.clear_status();
        app.sort_by_column(5);
        assert_eq!(app.clients.state().sort_field, Some("city"));
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_dashboard_ignores_table_actions() {
        let mut app = app();
        app.switch_page(Page::Dashboard);
        assert_eq!(app.column_count(), 0);
        assert_eq!(app.selection(), (0, 0));
        assert!(!app.select_row(0));

        app.start_search();
        assert_eq!(app.mode, UiMode::Table);
        app.sort_by_header_cursor();
        app.sort_by_column(0);
        assert!(app.status_message.is_none());
        app.add_new();
        app.activate_selected();
        assert!(app.editor.is_none());
        assert_eq!(app.search_query(), "");

        app.switch_page(Page::Orders);
        app.start_search();
        assert_eq!(app.mode, UiMode::Search);
    }

    #[test]
    fn test_row_click_opens_editor() {
        let mut app = app();
        app.move_down();
        app.activate_selected();
        assert_eq!(app.mode, UiMode::Editor);
        let editor = app.editor.as_ref().unwrap();
        assert!(!editor.is_new());
        assert_eq!(editor.form.value("name").unwrap(), "Immobilier Québec");
    }

    #[test]
    fn test_add_new_and_submit() {
        let mut app = app();
        app.switch_page(Page::Production);
        app.add_new();
        let editor = app.editor.as_mut().unwrap();
        assert!(editor.is_new());
        editor.form = editor
            .form
            .clone()
            .with_values([("startDate", "2024-06-01"), ("endDate", "2024-06-15")]);

        app.submit_editor();
        assert_eq!(app.mode, UiMode::Table);
        assert!(app.editor.is_none());
        assert_eq!(app.store.productions.len(), 5);
        assert!(app.status_message.unwrap().starts_with("Enregistré : P-"));
    }

    #[test]
    fn test_invalid_submit_keeps_editor_open() {
        let mut app = app();
        app.add_new();
        app.submit_editor();
        assert_eq!(app.mode, UiMode::Editor);
        assert!(app.editor.is_some());
        assert_eq!(app.store.clients.len(), 8);
        assert!(app.status_message.unwrap().starts_with("Erreur"));
    }

    #[test]
    fn test_cancel_editor() {
        let mut app = app();
        app.activate_selected();
        app.cancel_editor();
        assert_eq!(app.mode, UiMode::Table);
        assert!(app.editor.is_none());
    }

    #[test]
    fn test_select_row_bounds() {
        let mut app = app();
        assert!(app.select_row(3));
        assert_eq!(app.clients.selected(), 3);
        assert!(!app.select_row(42));
        assert_eq!(app.clients.selected(), 3);
        assert_eq!(app.selection(), (3, 8));
    }

    #[test]
    fn test_export_and_snapshot_report_status() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app();

        let csv = temp_dir.path().join("clients.csv");
        app.export_clients(&csv);
        assert!(csv.exists());
        assert!(app.status_message.as_deref().unwrap().starts_with("8 clients"));

        app.switch_page(Page::Orders);
        let other = temp_dir.path().join("orders.csv");
        app.export_clients(&other);
        assert!(!other.exists());
        assert_eq!(
            app.status_message.as_deref(),
            Some("L'export est disponible depuis la page Clients")
        );

        let data = temp_dir.path().join("data.json");
        app.save_snapshot(&data);
        assert_eq!(Store::load(&data).unwrap(), app.store);
    }
}
