//! Errors raised while building or driving a table view.

use thiserror::Error;

/// Table view errors.
///
/// Raised when a view is built or a sort key is chosen, never while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("table `{0}` has no columns")]
    NoColumns(String),
    #[error("column accessor `{0}` is declared more than once")]
    DuplicateColumn(String),
    #[error("no column with accessor `{0}`")]
    UnknownColumn(String),
}
