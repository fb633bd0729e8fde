//! UI components module.
//!
//! Contains ratatui widgets for displaying the application interface.

pub mod dashboard;
pub mod editor;
pub mod metrics;
pub mod search;
pub mod table;
pub mod tabs;

pub use dashboard::render_dashboard;
pub use editor::render_editor;
pub use metrics::render_metrics;
pub use search::render_search;
pub use table::render_table;
pub use tabs::render_tabs;

use crate::app::Page;
use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub tabs: Rect,
    /// Empty on pages without a table
    pub search: Rect,
    /// Empty on pages without status metrics
    pub metrics: Rect,
    pub table: Rect,
    pub status: Rect,
}

/// Split the screen for a page.
///
/// # Details
/// Shared by drawing and mouse handling so clicks map onto the rows drawn.
pub fn layout(area: Rect, page: Page) -> AppLayout {
    let search_height = if page.has_table() { 3 } else { 0 };
    let metrics_height = if metrics::has_metrics(page) { 3 } else { 0 };
    let [tabs, search, metrics, table, status] = Layout::vertical([
        Constraint::Length(3),              // Tabs
        Constraint::Length(search_height),  // Search bar
        Constraint::Length(metrics_height), // Status cards
        Constraint::Min(0),                 // Table or watch list
        Constraint::Length(1),              // Status bar
    ])
    .areas(area);
    AppLayout {
        tabs,
        search,
        metrics,
        table,
        status,
    }
}
