//! Business records, their fixtures, table columns and forms.

pub mod columns;
pub mod dashboard;
pub mod fixtures;
pub mod format;
pub mod forms;
pub mod models;

pub use models::{
    Client, ClientStatus, Identified, Installation, InstallationStatus, Order, OrderStatus,
    Production, ProductionStatus, Submission, SubmissionStatus,
};
