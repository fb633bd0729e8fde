//! Form definitions for each record type.

use super::models::*;
use crate::editor::{Editable, FieldDescriptor, Form, FormError};
use crate::store::{self, Store};
use chrono::{Datelike, Local, NaiveDate};

fn format_date(date: NaiveDate) -> String {
    date.format(crate::editor::form::DATE_FORMAT).to_string()
}

fn labels<S: Copy>(all: &[S], label: fn(S) -> &'static str) -> Vec<&'static str> {
    all.iter().map(|s| label(*s)).collect()
}

/// Client picker. Options are client names.
fn client_field(store: &Store) -> FieldDescriptor {
    FieldDescriptor::choice("client", "Client", store.clients.iter().map(|c| c.name.clone()))
}

/// Resolve the picked client to `(id, name)`.
fn picked_client(form: &Form, store: &Store) -> Result<(String, String), FormError> {
    let name = form.text("client")?;
    store
        .client_by_name(&name)
        .map(|c| (c.id.clone(), c.name.clone()))
        .ok_or(FormError::UnknownClient(name))
}

/// Next document number for the current year.
fn next_number<R>(prefix: &str, records: &[R], number: fn(&R) -> &str) -> String {
    store::next_number(
        prefix,
        Local::now().year(),
        records.last().map(number),
        records.len(),
    )
}

fn progress(form: &Form) -> Result<u8, FormError> {
    // Range is enforced by the field descriptor.
    form.integer("progress").map(|p| p.clamp(0, 100) as u8)
}

impl Editable for Client {
    const NEW_TITLE: &'static str = "Ajouter un client";
    const EDIT_TITLE: &'static str = "Modifier le client";

    fn form_fields(_store: &Store) -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::text("name", "Nom"),
            FieldDescriptor::text("city", "Ville"),
            FieldDescriptor::text("contactName", "Nom du contact"),
            FieldDescriptor::text("phone", "Téléphone"),
            FieldDescriptor::choice("status", "Statut", labels(ClientStatus::ALL, ClientStatus::label)),
        ]
    }

    fn form_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("city", self.city.clone()),
            ("contactName", self.contact_name.clone()),
            ("phone", self.phone.clone()),
            ("status", self.status.label().to_string()),
        ]
    }

    fn from_form(id: String, form: &Form, _store: &Store) -> Result<Self, FormError> {
        Ok(Self {
            id,
            name: form.text("name")?,
            city: form.text("city")?,
            contact_name: form.text("contactName")?,
            phone: form.text("phone")?,
            status: form.choice("status", ClientStatus::from_label)?,
        })
    }

    fn records(store: &Store) -> &[Self] {
        &store.clients
    }

    fn records_mut(store: &mut Store) -> &mut Vec<Self> {
        &mut store.clients
    }
}

impl Editable for Submission {
    const NEW_TITLE: &'static str = "Ajouter une soumission";
    const EDIT_TITLE: &'static str = "Modifier la soumission";

    fn form_fields(store: &Store) -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::text("number", "Numéro"),
            client_field(store),
            FieldDescriptor::date("date", "Date"),
            FieldDescriptor::amount("amount", "Montant"),
            FieldDescriptor::choice(
                "status",
                "Statut",
                labels(SubmissionStatus::ALL, SubmissionStatus::label),
            ),
        ]
    }

    fn form_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("number", self.number.clone()),
            ("client", self.client_name.clone()),
            ("date", format_date(self.date)),
            ("amount", self.amount.to_string()),
            ("status", self.status.label().to_string()),
        ]
    }

    fn new_values(store: &Store) -> Vec<(&'static str, String)> {
        vec![
            ("number", next_number("S", &store.submissions, |s| s.number.as_str())),
            ("date", format_date(Local::now().date_naive())),
        ]
    }

    fn from_form(id: String, form: &Form, store: &Store) -> Result<Self, FormError> {
        let (client_id, client_name) = picked_client(form, store)?;
        Ok(Self {
            id,
            number: form.text("number")?,
            client_id,
            client_name,
            date: form.date("date")?,
            amount: form.amount("amount")?,
            status: form.choice("status", SubmissionStatus::from_label)?,
        })
    }

    fn records(store: &Store) -> &[Self] {
        &store.submissions
    }

    fn records_mut(store: &mut Store) -> &mut Vec<Self> {
        &mut store.submissions
    }
}

impl Editable for Order {
    const NEW_TITLE: &'static str = "Ajouter une commande";
    const EDIT_TITLE: &'static str = "Modifier la commande";

    fn form_fields(store: &Store) -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::text("number", "Numéro"),
            client_field(store),
            FieldDescriptor::date("creationDate", "Date de création"),
            FieldDescriptor::date("installationDate", "Date d'installation"),
            FieldDescriptor::choice("status", "Statut", labels(OrderStatus::ALL, OrderStatus::label)),
            FieldDescriptor::text("company", "Compagnie"),
            FieldDescriptor::text("representativeName", "Représentant"),
        ]
    }

    fn form_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("number", self.number.clone()),
            ("client", self.client_name.clone()),
            ("creationDate", format_date(self.creation_date)),
            ("installationDate", format_date(self.installation_date)),
            ("status", self.status.label().to_string()),
            ("company", self.company.clone()),
            ("representativeName", self.representative_name.clone()),
        ]
    }

    fn new_values(store: &Store) -> Vec<(&'static str, String)> {
        vec![
            ("number", next_number("C", &store.orders, |o| o.number.as_str())),
            ("creationDate", format_date(Local::now().date_naive())),
            ("company", "Starwall™".to_string()),
        ]
    }

    fn from_form(id: String, form: &Form, store: &Store) -> Result<Self, FormError> {
        let (client_id, client_name) = picked_client(form, store)?;
        Ok(Self {
            id,
            number: form.text("number")?,
            client_id,
            client_name,
            creation_date: form.date("creationDate")?,
            installation_date: form.date("installationDate")?,
            status: form.choice("status", OrderStatus::from_label)?,
            company: form.text("company")?,
            representative_name: form.text("representativeName")?,
        })
    }

    fn records(store: &Store) -> &[Self] {
        &store.orders
    }

    fn records_mut(store: &mut Store) -> &mut Vec<Self> {
        &mut store.orders
    }
}

/// Project picker. Options are order numbers.
fn project_field(store: &Store) -> FieldDescriptor {
    FieldDescriptor::choice(
        "projectNumber",
        "Numéro de projet",
        store.orders.iter().map(|o| o.number.clone()),
    )
}

fn picked_project(form: &Form, store: &Store) -> Result<String, FormError> {
    form.choice("projectNumber", |number| {
        store
            .orders
            .iter()
            .find(|o| o.number == number)
            .map(|o| o.number.clone())
    })
}

impl Editable for Production {
    const NEW_TITLE: &'static str = "Ajouter une production";
    const EDIT_TITLE: &'static str = "Modifier la production";

    fn form_fields(store: &Store) -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::text("number", "Numéro"),
            client_field(store),
            project_field(store),
            FieldDescriptor::date("startDate", "Date de début"),
            FieldDescriptor::date("endDate", "Date de fin"),
            FieldDescriptor::choice(
                "status",
                "Statut",
                labels(ProductionStatus::ALL, ProductionStatus::label),
            ),
            FieldDescriptor::integer("progress", "Progression (%)", 0, 100),
        ]
    }

    fn form_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("number", self.number.clone()),
            ("client", self.client_name.clone()),
            ("projectNumber", self.project_number.clone()),
            ("startDate", format_date(self.start_date)),
            ("endDate", format_date(self.end_date)),
            ("status", self.status.label().to_string()),
            ("progress", self.progress.to_string()),
        ]
    }

    fn new_values(store: &Store) -> Vec<(&'static str, String)> {
        vec![
            ("number", next_number("P", &store.productions, |p| p.number.as_str())),
            ("progress", "0".to_string()),
        ]
    }

    fn from_form(id: String, form: &Form, store: &Store) -> Result<Self, FormError> {
        let (client_id, client_name) = picked_client(form, store)?;
        Ok(Self {
            id,
            number: form.text("number")?,
            client_id,
            client_name,
            project_number: picked_project(form, store)?,
            status: form.choice("status", ProductionStatus::from_label)?,
            start_date: form.date("startDate")?,
            end_date: form.date("endDate")?,
            progress: progress(form)?,
        })
    }

    fn records(store: &Store) -> &[Self] {
        &store.productions
    }

    fn records_mut(store: &mut Store) -> &mut Vec<Self> {
        &mut store.productions
    }
}

impl Editable for Installation {
    const NEW_TITLE: &'static str = "Ajouter une installation";
    const EDIT_TITLE: &'static str = "Modifier l'installation";

    fn form_fields(store: &Store) -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::text("number", "Numéro"),
            client_field(store),
            project_field(store),
            FieldDescriptor::date("deliveryDate", "Date de livraison"),
            FieldDescriptor::date("installationDate", "Date d'installation"),
            FieldDescriptor::choice(
                "status",
                "Statut",
                labels(InstallationStatus::ALL, InstallationStatus::label),
            ),
            FieldDescriptor::integer("progress", "Progression (%)", 0, 100),
        ]
    }

    fn form_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("number", self.number.clone()),
            ("client", self.client_name.clone()),
            ("projectNumber", self.project_number.clone()),
            ("deliveryDate", format_date(self.delivery_date)),
            ("installationDate", format_date(self.installation_date)),
            ("status", self.status.label().to_string()),
            ("progress", self.progress.to_string()),
        ]
    }

    fn new_values(store: &Store) -> Vec<(&'static str, String)> {
        vec![
            ("number", next_number("I", &store.installations, |i| i.number.as_str())),
            ("progress", "0".to_string()),
        ]
    }

    fn from_form(id: String, form: &Form, store: &Store) -> Result<Self, FormError> {
        let (client_id, client_name) = picked_client(form, store)?;
        Ok(Self {
            id,
            number: form.text("number")?,
            client_id,
            client_name,
            project_number: picked_project(form, store)?,
            status: form.choice("status", InstallationStatus::from_label)?,
            delivery_date: form.date("deliveryDate")?,
            installation_date: form.date("installationDate")?,
            progress: progress(form)?,
        })
    }

    fn records(store: &Store) -> &[Self] {
        &store.installations
    }

    fn records_mut(store: &mut Store) -> &mut Vec<Self> {
        &mut store.installations
    }
}
