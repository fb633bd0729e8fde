//! Built-in records used when no snapshot exists.

use super::models::*;
use chrono::NaiveDate;

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn client(id: &str, name: &str, city: &str, contact: &str, phone: &str, status: ClientStatus) -> Client {
    Client {
        id: id.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        contact_name: contact.to_string(),
        phone: phone.to_string(),
        status,
    }
}

pub fn clients() -> Vec<Client> {
    use ClientStatus::*;
    vec![
        client("1", "Constructions Modernes", "Montréal", "Jean Tremblay", "514-555-1234", Active),
        client("2", "Immobilier Québec", "Québec", "Marie Lavoie", "418-555-5678", Active),
        client("3", "Développements Urbains", "Laval", "Pierre Gagnon", "450-555-9012", Inactive),
        client("4", "Bâtiments Commerciaux", "Sherbrooke", "Sophie Bergeron", "819-555-3456", Active),
        client("5", "Résidences Luxueuses", "Gatineau", "Michel Côté", "819-555-7890", Active),
        client("6", "Projets Industriels", "Trois-Rivières", "Louise Bouchard", "819-555-2345", Inactive),
        client("7", "Édifices Corporatifs", "Longueuil", "Robert Lemieux", "450-555-6789", Active),
        client(
            "8",
            "Construction Résidentielle",
            "Saint-Jean-sur-Richelieu",
            "Catherine Dion",
            "450-555-0123",
            Active,
        ),
    ]
}

pub fn submissions() -> Vec<Submission> {
    use SubmissionStatus::*;
    let rows = [
        ("1", "S-2024-001", "1", "Constructions Modernes", day(2024, 4, 1), 12500.0, Pending),
        ("2", "S-2024-002", "2", "Immobilier Québec", day(2024, 4, 3), 8750.0, Accepted),
        ("3", "S-2024-003", "4", "Bâtiments Commerciaux", day(2024, 4, 5), 15000.0, InRevision),
        ("4", "S-2024-004", "5", "Résidences Luxueuses", day(2024, 4, 10), 22000.0, Pending),
        ("5", "S-2024-005", "7", "Édifices Corporatifs", day(2024, 4, 12), 18500.0, Accepted),
        ("6", "S-2024-006", "8", "Construction Résidentielle", day(2024, 4, 15), 9750.0, Pending),
        ("7", "S-2024-007", "1", "Constructions Modernes", day(2024, 4, 18), 13250.0, Accepted),
        ("8", "S-2024-008", "4", "Bâtiments Commerciaux", day(2024, 4, 20), 16800.0, InRevision),
    ];
    rows.into_iter()
        .map(|(id, number, client_id, client_name, date, amount, status)| Submission {
            id: id.to_string(),
            number: number.to_string(),
            client_id: client_id.to_string(),
            client_name: client_name.to_string(),
            date,
            amount,
            status,
        })
        .collect()
}

pub fn orders() -> Vec<Order> {
    use OrderStatus::*;
    let rows = [
        ("1", "C-2024-001", "2", "Immobilier Québec", day(2024, 4, 5), day(2024, 5, 10), InProduction, "Philippe Martin"),
        ("2", "C-2024-002", "5", "Résidences Luxueuses", day(2024, 4, 8), day(2024, 5, 15), Pending, "Julie Tremblay"),
        ("3", "C-2024-003", "7", "Édifices Corporatifs", day(2024, 4, 15), day(2024, 5, 20), InProduction, "Marc Leblanc"),
        ("4", "C-2024-004", "1", "Constructions Modernes", day(2024, 4, 20), day(2024, 5, 25), Done, "Philippe Martin"),
        ("5", "C-2024-005", "4", "Bâtiments Commerciaux", day(2024, 4, 22), day(2024, 5, 30), Pending, "Julie Tremblay"),
    ];
    rows.into_iter()
        .map(
            |(id, number, client_id, client_name, creation_date, installation_date, status, rep)| Order {
                id: id.to_string(),
                number: number.to_string(),
                client_id: client_id.to_string(),
                client_name: client_name.to_string(),
                creation_date,
                installation_date,
                status,
                company: "Starwall™".to_string(),
                representative_name: rep.to_string(),
            },
        )
        .collect()
}

pub fn productions() -> Vec<Production> {
    use ProductionStatus::*;
    let rows = [
        ("1", "P-2024-001", "2", "Immobilier Québec", "C-2024-001", Manufacturing, day(2024, 4, 10), day(2024, 4, 25), 60),
        ("2", "P-2024-002", "7", "Édifices Corporatifs", "C-2024-003", Pending, day(2024, 4, 20), day(2024, 5, 5), 0),
        ("3", "P-2024-003", "1", "Constructions Modernes", "C-2024-004", Ready, day(2024, 4, 1), day(2024, 4, 15), 100),
        ("4", "P-2024-004", "4", "Bâtiments Commerciaux", "C-2024-005", Pending, day(2024, 4, 25), day(2024, 5, 10), 0),
    ];
    rows.into_iter()
        .map(
            |(id, number, client_id, client_name, project, status, start_date, end_date, progress)| Production {
                id: id.to_string(),
                number: number.to_string(),
                client_id: client_id.to_string(),
                client_name: client_name.to_string(),
                project_number: project.to_string(),
                status,
                start_date,
                end_date,
                progress,
            },
        )
        .collect()
}

pub fn installations() -> Vec<Installation> {
    use InstallationStatus::*;
    let rows = [
        ("1", "I-2024-001", "1", "Constructions Modernes", "C-2024-004", Complete, day(2024, 4, 18), day(2024, 4, 20), 100),
        ("2", "I-2024-002", "2", "Immobilier Québec", "C-2024-001", Pending, day(2024, 4, 28), day(2024, 5, 10), 0),
        ("3", "I-2024-003", "7", "Édifices Corporatifs", "C-2024-003", Pending, day(2024, 5, 8), day(2024, 5, 20), 0),
    ];
    rows.into_iter()
        .map(
            |(id, number, client_id, client_name, project, status, delivery_date, installation_date, progress)| {
                Installation {
                    id: id.to_string(),
                    number: number.to_string(),
                    client_id: client_id.to_string(),
                    client_name: client_name.to_string(),
                    project_number: project.to_string(),
                    status,
                    delivery_date,
                    installation_date,
                    progress,
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_sizes() {
        assert_eq!(clients().len(), 8);
        assert_eq!(submissions().len(), 8);
        assert_eq!(orders().len(), 5);
        assert_eq!(productions().len(), 4);
        assert_eq!(installations().len(), 3);
    }

    #[test]
    fn test_client_references_resolve() {
        let clients = clients();
        for order in orders() {
            let client = clients.iter().find(|c| c.id == order.client_id).unwrap();
            assert_eq!(client.name, order.client_name);
        }
    }
}
