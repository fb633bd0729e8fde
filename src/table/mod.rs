//! Tabular view engine.
//!
//! Filters, sorts and renders an arbitrary list of records through a list of
//! column descriptors.

pub mod column;
pub mod error;
pub mod value;
pub mod view;

pub use column::Column;
pub use error::TableError;
pub use value::CellValue;
pub use view::{SortDirection, TableEvent, TableView, ViewState};

/// A record that can be shown in a table.
///
/// Lists every field of the record, displayed or not. Filtering searches all of them.
pub trait Record {
    /// All fields as `(field name, value)` pairs.
    fn fields(&self) -> Vec<(&'static str, CellValue)>;

    /// Whether any field's string form contains `needle`, ignoring case.
    ///
    /// # Arguments
    /// * `needle` - Already lowercased filter text
    fn matches(&self, needle: &str) -> bool {
        self.fields()
            .iter()
            .any(|(_, value)| value.to_string().to_lowercase().contains(needle))
    }
}
