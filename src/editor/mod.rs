//! Record editor.
//!
//! One form component for every record type, driven by the field descriptors
//! each record type declares.

pub mod form;

pub use form::{FieldDescriptor, FieldKind, Form, FormError};

use crate::app::Page;
use crate::records::Identified;
use crate::store::{self, Store};
use crate::table::Record;

/// A record type that can be created and edited through a [`Form`].
pub trait Editable: Record + Identified + Clone {
    /// Form title when adding a record
    const NEW_TITLE: &'static str;
    /// Form title when editing a record
    const EDIT_TITLE: &'static str;

    /// Inputs of the form. Choice options may depend on other records.
    fn form_fields(store: &Store) -> Vec<FieldDescriptor>;

    /// Current values of an existing record.
    fn form_values(&self) -> Vec<(&'static str, String)>;

    /// Values a new record starts with, on top of the field defaults.
    fn new_values(_store: &Store) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Build a record from a submitted form.
    fn from_form(id: String, form: &Form, store: &Store) -> Result<Self, FormError>;

    fn records(store: &Store) -> &[Self];

    fn records_mut(store: &mut Store) -> &mut Vec<Self>;
}

/// An open record form.
#[derive(Debug, Clone)]
pub struct Editor {
    page: Page,
    /// Id of the record being edited, `None` when adding
    target: Option<String>,
    title: &'static str,
    pub form: Form,
}

impl Editor {
    /// Open an empty form for a new record.
    pub fn create<R: Editable>(page: Page, store: &Store) -> Self {
        Self {
            page,
            target: None,
            title: R::NEW_TITLE,
            form: Form::new(R::form_fields(store)).with_values(R::new_values(store)),
        }
    }

    /// Open a form filled with an existing record.
    pub fn edit<R: Editable>(page: Page, record: &R, store: &Store) -> Self {
        Self {
            page,
            target: Some(record.id().to_string()),
            title: R::EDIT_TITLE,
            form: Form::new(R::form_fields(store)).with_values(record.form_values()),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn is_new(&self) -> bool {
        self.target.is_none()
    }

    /// Validate the form and save the record.
    ///
    /// # Returns
    /// * `Result<R, FormError>` - The saved record. On error the store is untouched.
    ///
    /// # Details
    /// An edited record keeps its id and replaces the original. A new record
    /// gets a fresh id and is appended.
    pub fn submit<R: Editable>(&self, store: &mut Store) -> Result<R, FormError> {
        let id = match &self.target {
            Some(id) => id.clone(),
            None => store::new_id(R::records(store)),
        };
        let record = R::from_form(id, &self.form, store)?;
        store::upsert(R::records_mut(store), record.clone());
        Ok(record)
    }
}
