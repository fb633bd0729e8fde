//! Generic record form driven by field descriptors.

use chrono::NaiveDate;
use thiserror::Error;

/// Date format accepted by date fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Form validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("le champ « {0} » est requis")]
    Required(&'static str),
    #[error("« {label} » : date invalide `{value}` (attendu AAAA-MM-JJ)")]
    InvalidDate { label: &'static str, value: String },
    #[error("« {label} » : nombre invalide `{value}`")]
    InvalidNumber { label: &'static str, value: String },
    #[error("« {label} » doit être entre {min} et {max}")]
    OutOfRange { label: &'static str, min: i64, max: i64 },
    #[error("« {label} » : choix inconnu `{value}`")]
    InvalidChoice { label: &'static str, value: String },
    #[error("aucun client nommé `{0}`")]
    UnknownClient(String),
    #[error("champ inconnu `{0}`")]
    UnknownField(&'static str),
}

/// Kind of input a field accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    /// `YYYY-MM-DD`
    Date,
    /// Whole number within an inclusive range
    Integer { min: i64, max: i64 },
    /// Dollar amount, `.` or `,` as decimal separator
    Amount,
    /// One of a fixed list of options
    Choice(Vec<String>),
}

/// Describes one input of a record form.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Record field name
    pub name: &'static str,
    /// Label shown next to the input
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldDescriptor {
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            required: true,
        }
    }

    pub fn date(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: FieldKind::Date,
            ..Self::text(name, label)
        }
    }

    pub fn integer(name: &'static str, label: &'static str, min: i64, max: i64) -> Self {
        Self {
            kind: FieldKind::Integer { min, max },
            ..Self::text(name, label)
        }
    }

    pub fn amount(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: FieldKind::Amount,
            ..Self::text(name, label)
        }
    }

    pub fn choice<S: Into<String>>(
        name: &'static str,
        label: &'static str,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            kind: FieldKind::Choice(options.into_iter().map(Into::into).collect()),
            ..Self::text(name, label)
        }
    }

    /// Value a new record starts with.
    fn initial_value(&self) -> String {
        match &self.kind {
            FieldKind::Choice(options) => options.first().cloned().unwrap_or_default(),
            _ => String::new(),
        }
    }
}

/// Editable form state.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    fields: Vec<FieldDescriptor>,
    values: Vec<String>,
    focus: usize,
}

impl Form {
    /// Create a form with initial values (first option for choices, empty otherwise).
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        let values = fields.iter().map(FieldDescriptor::initial_value).collect();
        Self {
            fields,
            values,
            focus: 0,
        }
    }

    /// Fill named fields. Unknown names are ignored.
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, S)>,
        S: Into<String>,
    {
        for (name, value) in values {
            if let Some(index) = self.index_of(name) {
                self.values[index] = value.into();
            }
        }
        self
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_field(&self) -> Option<&FieldDescriptor> {
        self.fields.get(self.focus)
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = self.focus.checked_sub(1).unwrap_or(self.fields.len() - 1);
        }
    }

    /// Type a character into the focused field. Choice fields ignore typing.
    pub fn insert_char(&mut self, ch: char) {
        if let Some(field) = self.focused_field()
            && !matches!(field.kind, FieldKind::Choice(_))
        {
            self.values[self.focus].push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field()
            && !matches!(field.kind, FieldKind::Choice(_))
        {
            self.values[self.focus].pop();
        }
    }

    /// Select the next (or previous) option of the focused choice field.
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(FieldKind::Choice(options)) = self.fields.get(self.focus).map(|f| &f.kind) else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let current = options
            .iter()
            .position(|o| *o == self.values[self.focus])
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            current.checked_sub(1).unwrap_or(options.len() - 1)
        };
        self.values[self.focus] = options[next].clone();
    }

    /// Raw value of a field, trimmed.
    pub fn value(&self, name: &'static str) -> Result<&str, FormError> {
        self.index_of(name)
            .map(|i| self.values[i].trim())
            .ok_or(FormError::UnknownField(name))
    }

    fn field(&self, name: &'static str) -> Result<(&FieldDescriptor, &str), FormError> {
        let index = self.index_of(name).ok_or(FormError::UnknownField(name))?;
        Ok((&self.fields[index], self.values[index].trim()))
    }

    /// Required text value.
    pub fn text(&self, name: &'static str) -> Result<String, FormError> {
        let (field, value) = self.field(name)?;
        if value.is_empty() && field.required {
            return Err(FormError::Required(field.label));
        }
        Ok(value.to_string())
    }

    pub fn date(&self, name: &'static str) -> Result<NaiveDate, FormError> {
        let (field, value) = self.field(name)?;
        if value.is_empty() {
            return Err(FormError::Required(field.label));
        }
        NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| FormError::InvalidDate {
            label: field.label,
            value: value.to_string(),
        })
    }

    pub fn integer(&self, name: &'static str) -> Result<i64, FormError> {
        let (field, value) = self.field(name)?;
        if value.is_empty() {
            return Err(FormError::Required(field.label));
        }
        let number: i64 = value.parse().map_err(|_| FormError::InvalidNumber {
            label: field.label,
            value: value.to_string(),
        })?;
        if let FieldKind::Integer { min, max } = field.kind
            && !(min..=max).contains(&number)
        {
            return Err(FormError::OutOfRange {
                label: field.label,
                min,
                max,
            });
        }
        Ok(number)
    }

    pub fn amount(&self, name: &'static str) -> Result<f64, FormError> {
        let (field, value) = self.field(name)?;
        if value.is_empty() {
            return Err(FormError::Required(field.label));
        }
        let normalized: String = value
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '$')
            .map(|c| if c == ',' { '.' } else { c })
            .collect();
        normalized
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| FormError::InvalidNumber {
                label: field.label,
                value: value.to_string(),
            })
    }

    /// Selected option of a choice field, parsed.
    pub fn choice<T>(&self, name: &'static str, parse: impl Fn(&str) -> Option<T>) -> Result<T, FormError> {
        let (field, value) = self.field(name)?;
        if value.is_empty() {
            return Err(FormError::Required(field.label));
        }
        parse(value).ok_or_else(|| FormError::InvalidChoice {
            label: field.label,
            value: value.to_string(),
        })
    }
}
