//! Dashboard figures computed from the store.

use super::columns::status_counts;
use super::models::*;
use crate::store::Store;
use chrono::{Datelike, NaiveDate};

/// Headline counts of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub active_clients: usize,
    /// Accepted submissions, now in production
    pub accepted_submissions: usize,
    /// Installations not yet complete
    pub upcoming_installations: usize,
    /// Orders created in the month of the reference date
    pub monthly_orders: usize,
}

impl DashboardStats {
    /// Count the dashboard figures.
    ///
    /// # Arguments
    /// * `store` - Records to count
    /// * `today` - Reference date for the monthly order count
    pub fn compute(store: &Store, today: NaiveDate) -> Self {
        let active_clients = status_counts(&store.clients, &[ClientStatus::Active], |c| c.status)
            .first()
            .map_or(0, |(_, count)| *count);
        Self {
            active_clients,
            accepted_submissions: store
                .submissions
                .iter()
                .filter(|s| s.status == SubmissionStatus::Accepted)
                .count(),
            upcoming_installations: store
                .installations
                .iter()
                .filter(|i| i.status != InstallationStatus::Complete)
                .count(),
            monthly_orders: store
                .orders
                .iter()
                .filter(|o| {
                    o.creation_date.year() == today.year() && o.creation_date.month() == today.month()
                })
                .count(),
        }
    }
}

/// Kind of work a watched project is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Production(ProductionStatus),
    Installation(InstallationStatus),
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Production(_) => "Production",
            Stage::Installation(_) => "Installation",
        }
    }
}

/// An unfinished production job or installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedProject<'a> {
    pub client_name: &'a str,
    pub number: &'a str,
    pub stage: Stage,
    pub progress: u8,
}

/// Production jobs then installations whose progress is below 100%.
pub fn watched_projects(store: &Store) -> Vec<WatchedProject<'_>> {
    let productions = store.productions.iter().map(|p| WatchedProject {
        client_name: &p.client_name,
        number: &p.number,
        stage: Stage::Production(p.status),
        progress: p.progress,
    });
    let installations = store.installations.iter().map(|i| WatchedProject {
        client_name: &i.client_name,
        number: &i.number,
        stage: Stage::Installation(i.status),
        progress: i.progress,
    });
    productions
        .chain(installations)
        .filter(|project| project.progress < 100)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn april() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 28).unwrap()
    }

    #[test]
    fn test_stats_from_fixtures() {
        let stats = DashboardStats::compute(&Store::fixtures(), april());
        assert_eq!(
            stats,
            DashboardStats {
                active_clients: 6,
                accepted_submissions: 3,
                upcoming_installations: 2,
                monthly_orders: 5,
            }
        );
    }

    #[test]
    fn test_monthly_orders_follow_reference_date() {
        let store = Store::fixtures();
        let may = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        assert_eq!(DashboardStats::compute(&store, may).monthly_orders, 0);
        let next_april = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
        assert_eq!(DashboardStats::compute(&store, next_april).monthly_orders, 0);
    }

    #[test]
    fn test_stats_follow_store_changes() {
        let mut store = Store::fixtures();
        store.clients[2].status = ClientStatus::Active;
        store.installations[1].status = InstallationStatus::Complete;
        let stats = DashboardStats::compute(&store, april());
        assert_eq!(stats.active_clients, 7);
        assert_eq!(stats.upcoming_installations, 1);
    }

    #[test]
    fn test_watched_projects_skip_finished_work() {
        let store = Store::fixtures();
        let watched = watched_projects(&store);
        let numbers: Vec<_> = watched.iter().map(|p| p.number).collect();
        assert_eq!(
            numbers,
            ["P-2024-001", "P-2024-002", "P-2024-004", "I-2024-002", "I-2024-003"]
        );
        assert_eq!(watched[0].client_name, "Immobilier Québec");
        assert_eq!(watched[0].stage, Stage::Production(ProductionStatus::Manufacturing));
        assert_eq!(watched[0].progress, 60);
        assert_eq!(watched[3].stage.label(), "Installation");
    }
}
