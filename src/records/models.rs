//! Business records tracked by the application.
//!
//! Clients, sales submissions, orders, production jobs and installations.

use crate::table::{CellValue, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a status enum serialised and displayed with its French label.
macro_rules! status_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every status, in workflow order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// French label, as stored and displayed.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Parse a status from its label.
            pub fn from_label(label: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|s| s.label() == label)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

status_enum!(
    /// Whether a client is still active.
    ClientStatus {
        Active => "Actif",
        Inactive => "Non Actif",
    }
);

status_enum!(
    /// Progress of a sales submission.
    SubmissionStatus {
        Pending => "En attente",
        Accepted => "Accepte",
        InRevision => "En revision",
    }
);

status_enum!(
    /// Progress of an order.
    OrderStatus {
        Pending => "En attente",
        InProduction => "En production",
        Done => "Fini",
    }
);

status_enum!(
    /// Progress of a production job.
    ProductionStatus {
        Pending => "En attente",
        Manufacturing => "En fabrication",
        Ready => "Pret",
    }
);

status_enum!(
    /// Progress of an on-site installation.
    InstallationStatus {
        Pending => "En attente",
        InProgress => "En cours",
        Complete => "Complete",
    }
);

/// A client company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub city: String,
    pub contact_name: String,
    pub phone: String,
    pub status: ClientStatus,
}

/// A sales submission (quote) sent to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub number: String,
    pub client_id: String,
    pub client_name: String,
    pub date: NaiveDate,
    /// Amount in Canadian dollars
    pub amount: f64,
    pub status: SubmissionStatus,
}

/// A confirmed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub number: String,
    pub client_id: String,
    pub client_name: String,
    pub creation_date: NaiveDate,
    pub installation_date: NaiveDate,
    pub status: OrderStatus,
    pub company: String,
    pub representative_name: String,
}

/// A production job in the workshop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Production {
    pub id: String,
    pub number: String,
    pub client_id: String,
    pub client_name: String,
    /// Number of the order this job fulfils
    pub project_number: String,
    pub status: ProductionStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Completion, 0 to 100
    pub progress: u8,
}

/// An on-site installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installation {
    pub id: String,
    pub number: String,
    pub client_id: String,
    pub client_name: String,
    pub project_number: String,
    pub status: InstallationStatus,
    pub delivery_date: NaiveDate,
    pub installation_date: NaiveDate,
    /// Completion, 0 to 100
    pub progress: u8,
}

impl Record for Client {
    fn fields(&self) -> Vec<(&'static str, CellValue)> {
        vec![
            ("id", CellValue::text(self.id.as_str())),
            ("name", CellValue::text(self.name.as_str())),
            ("city", CellValue::text(self.city.as_str())),
            ("contactName", CellValue::text(self.contact_name.as_str())),
            ("phone", CellValue::text(self.phone.as_str())),
            ("status", CellValue::text(self.status.label())),
        ]
    }
}

impl Record for Submission {
    fn fields(&self) -> Vec<(&'static str, CellValue)> {
        vec![
            ("id", CellValue::text(self.id.as_str())),
            ("number", CellValue::text(self.number.as_str())),
            ("clientId", CellValue::text(self.client_id.as_str())),
            ("clientName", CellValue::text(self.client_name.as_str())),
            ("date", CellValue::Date(self.date)),
            ("amount", CellValue::Number(self.amount)),
            ("status", CellValue::text(self.status.label())),
        ]
    }
}

impl Record for Order {
    fn fields(&self) -> Vec<(&'static str, CellValue)> {
        vec![
            ("id", CellValue::text(self.id.as_str())),
            ("number", CellValue::text(self.number.as_str())),
            ("clientId", CellValue::text(self.client_id.as_str())),
            ("clientName", CellValue::text(self.client_name.as_str())),
            ("creationDate", CellValue::Date(self.creation_date)),
            ("installationDate", CellValue::Date(self.installation_date)),
            ("status", CellValue::text(self.status.label())),
            ("company", CellValue::text(self.company.as_str())),
            (
                "representativeName",
                CellValue::text(self.representative_name.as_str()),
            ),
        ]
    }
}

impl Record for Production {
    fn fields(&self) -> Vec<(&'static str, CellValue)> {
        vec![
            ("id", CellValue::text(self.id.as_str())),
            ("number", CellValue::text(self.number.as_str())),
            ("clientId", CellValue::text(self.client_id.as_str())),
            ("clientName", CellValue::text(self.client_name.as_str())),
            ("projectNumber", CellValue::text(self.project_number.as_str())),
            ("status", CellValue::text(self.status.label())),
            ("startDate", CellValue::Date(self.start_date)),
            ("endDate", CellValue::Date(self.end_date)),
            ("progress", CellValue::from(self.progress)),
        ]
    }
}

impl Record for Installation {
    fn fields(&self) -> Vec<(&'static str, CellValue)> {
        vec![
            ("id", CellValue::text(self.id.as_str())),
            ("number", CellValue::text(self.number.as_str())),
            ("clientId", CellValue::text(self.client_id.as_str())),
            ("clientName", CellValue::text(self.client_name.as_str())),
            ("projectNumber", CellValue::text(self.project_number.as_str())),
            ("status", CellValue::text(self.status.label())),
            ("deliveryDate", CellValue::Date(self.delivery_date)),
            ("installationDate", CellValue::Date(self.installation_date)),
            ("progress", CellValue::from(self.progress)),
        ]
    }
}

/// Records that carry a stable identifier.
pub trait Identified {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

macro_rules! impl_identified {
    ($($ty:ty),+) => {
        $(
            impl Identified for $ty {
                fn id(&self) -> &str {
                    &self.id
                }

                fn set_id(&mut self, id: String) {
                    self.id = id;
                }
            }
        )+
    };
}

impl_identified!(Client, Submission, Order, Production, Installation);
