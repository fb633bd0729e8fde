//! Table definitions for each page.

use super::format::{currency_cell, progress_bar, status_badge};
use super::models::*;
use crate::table::{CellValue, Column, TableError, TableView};

pub fn clients_table() -> Result<TableView<Client>, TableError> {
    let columns = vec![
        Column::new("name", "Nom", |c: &Client| CellValue::text(c.name.as_str())),
        Column::new("city", "Ville", |c: &Client| CellValue::text(c.city.as_str())),
        Column::new("contactName", "Nom du contact", |c: &Client| {
            CellValue::text(c.contact_name.as_str())
        }),
        Column::new("phone", "Téléphone", |c: &Client| CellValue::text(c.phone.as_str())),
        Column::new("status", "Statut", |c: &Client| CellValue::text(c.status.label()))
            .with_renderer(|value, _| status_badge::<ClientStatus>(value)),
    ];
    Ok(TableView::new("Liste des clients", columns)?
        .with_add_new("Nouveau Client")
        .with_row_click())
}

pub fn submissions_table() -> Result<TableView<Submission>, TableError> {
    let columns = vec![
        Column::new("number", "Numéro", |s: &Submission| CellValue::text(s.number.as_str())),
        Column::new("clientName", "Client", |s: &Submission| {
            CellValue::text(s.client_name.as_str())
        }),
        Column::new("date", "Date", |s: &Submission| CellValue::Date(s.date)),
        Column::new("amount", "Montant", |s: &Submission| CellValue::Number(s.amount))
            .with_renderer(|value, _| currency_cell(value)),
        Column::new("status", "Statut", |s: &Submission| CellValue::text(s.status.label()))
            .with_renderer(|value, _| status_badge::<SubmissionStatus>(value)),
    ];
    Ok(TableView::new("Liste des soumissions", columns)?
        .with_add_new("Nouvelle Soumission")
        .with_row_click())
}

pub fn orders_table() -> Result<TableView<Order>, TableError> {
    let columns = vec![
        Column::new("number", "Numéro", |o: &Order| CellValue::text(o.number.as_str())),
        Column::new("clientName", "Client", |o: &Order| CellValue::text(o.client_name.as_str())),
        Column::new("creationDate", "Date de création", |o: &Order| {
            CellValue::Date(o.creation_date)
        }),
        Column::new("installationDate", "Date d'installation", |o: &Order| {
            CellValue::Date(o.installation_date)
        }),
        Column::new("status", "Statut", |o: &Order| CellValue::text(o.status.label()))
            .with_renderer(|value, _| status_badge::<OrderStatus>(value)),
        Column::new("company", "Compagnie", |o: &Order| CellValue::text(o.company.as_str())),
        Column::new("representativeName", "Représentant", |o: &Order| {
            CellValue::text(o.representative_name.as_str())
        }),
    ];
    Ok(TableView::new("Liste des commandes", columns)?
        .with_add_new("Nouvelle Commande")
        .with_row_click())
}

pub fn productions_table() -> Result<TableView<Production>, TableError> {
    let columns = vec![
        Column::new("number", "Numéro", |p: &Production| CellValue::text(p.number.as_str())),
        Column::new("clientName", "Client", |p: &Production| {
            CellValue::text(p.client_name.as_str())
        }),
        Column::new("projectNumber", "Numéro de projet", |p: &Production| {
            CellValue::text(p.project_number.as_str())
        }),
        Column::new("status", "Statut", |p: &Production| CellValue::text(p.status.label()))
            .with_renderer(|value, _| status_badge::<ProductionStatus>(value)),
        Column::new("startDate", "Date de début", |p: &Production| CellValue::Date(p.start_date)),
        Column::new("endDate", "Date de fin", |p: &Production| CellValue::Date(p.end_date)),
        Column::new("progress", "Progression", |p: &Production| CellValue::from(p.progress))
            .with_renderer(|value, _| progress_bar(value)),
    ];
    Ok(TableView::new("Suivi de production", columns)?
        .with_add_new("Nouvelle Production")
        .with_row_click())
}

pub fn installations_table() -> Result<TableView<Installation>, TableError> {
    let columns = vec![
        Column::new("number", "Numéro", |i: &Installation| CellValue::text(i.number.as_str())),
        Column::new("clientName", "Client", |i: &Installation| {
            CellValue::text(i.client_name.as_str())
        }),
        Column::new("projectNumber", "Numéro de projet", |i: &Installation| {
            CellValue::text(i.project_number.as_str())
        }),
        Column::new("status", "Statut", |i: &Installation| CellValue::text(i.status.label()))
            .with_renderer(|value, _| status_badge::<InstallationStatus>(value)),
        Column::new("deliveryDate", "Date de livraison", |i: &Installation| {
            CellValue::Date(i.delivery_date)
        }),
        Column::new("installationDate", "Date d'installation", |i: &Installation| {
            CellValue::Date(i.installation_date)
        }),
        Column::new("progress", "Progression", |i: &Installation| CellValue::from(i.progress))
            .with_renderer(|value, _| progress_bar(value)),
    ];
    Ok(TableView::new("Suivi des installations", columns)?
        .with_add_new("Nouvelle Installation")
        .with_row_click())
}

/// Number of records per status, in workflow order.
pub fn status_counts<T, S>(records: &[T], all: &[S], status_of: impl Fn(&T) -> S) -> Vec<(S, usize)>
where
    S: Copy + PartialEq,
{
    all.iter()
        .map(|status| {
            let count = records.iter().filter(|r| status_of(r) == *status).count();
            (*status, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::fixtures;

    #[test]
    fn test_tables_build() {
        assert!(clients_table().is_ok());
        assert!(submissions_table().is_ok());
        assert!(orders_table().is_ok());
        assert!(productions_table().is_ok());
        assert!(installations_table().is_ok());
    }

    #[test]
    fn test_filter_quebec_clients() {
        let rows = fixtures::clients();
        let mut view = clients_table().unwrap();
        view.set_filter("Québec", &rows);
        let kept = view.derive(&rows);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Immobilier Québec");
        assert_eq!(view.footer(&rows), "1 résultat");
    }

    #[test]
    fn test_orders_sort_by_client_toggles() {
        let rows = fixtures::orders();
        let mut view = orders_table().unwrap();

        view.toggle_sort("clientName").unwrap();
        let names: Vec<_> = view.derive(&rows).iter().map(|o| o.client_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Bâtiments Commerciaux",
                "Constructions Modernes",
                "Immobilier Québec",
                "Résidences Luxueuses",
                "Édifices Corporatifs",
            ]
        );

        view.toggle_sort("clientName").unwrap();
        let reversed: Vec<_> = view.derive(&rows).iter().map(|o| o.client_name.as_str()).collect();
        let mut expected = names.clone();
        expected.reverse();
        assert_eq!(reversed, expected);
    }

    #[test]
    fn test_empty_rows() {
        let rows: Vec<Submission> = Vec::new();
        let mut view = submissions_table().unwrap();
        view.set_filter("anything", &rows);
        assert!(view.derive(&rows).is_empty());
        assert_eq!(view.footer(&rows), "0 résultat");
    }

    #[test]
    fn test_status_column_renders_badge() {
        let rows = fixtures::clients();
        let view = clients_table().unwrap();
        let status = view.columns().iter().find(|c| c.accessor() == "status").unwrap();
        // Développements Urbains is inactive
        let line = status.render(&rows[2]);
        assert_eq!(line.spans[0].content, "● Non Actif");
        assert_eq!(line.spans[0].style.fg, Some(ratatui::style::Color::Red));
    }

    #[test]
    fn test_amount_column_formats_currency() {
        let rows = fixtures::submissions();
        let view = submissions_table().unwrap();
        let amount = &view.columns()[3];
        assert_eq!(amount.render(&rows[0]).spans[0].content, "12\u{a0}500,00\u{a0}$");
    }

    #[test]
    fn test_status_counts() {
        let rows = fixtures::productions();
        let counts = status_counts(&rows, ProductionStatus::ALL, |p| p.status);
        assert_eq!(
            counts,
            vec![
                (ProductionStatus::Pending, 2),
                (ProductionStatus::Manufacturing, 1),
                (ProductionStatus::Ready, 1),
            ]
        );
    }
}
