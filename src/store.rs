//! In-memory record store.
//!
//! Holds every collection shown by the application. Seeded from the built-in
//! fixtures and optionally persisted as a JSON snapshot.

use crate::records::fixtures;
use crate::records::{Client, Identified, Installation, Order, Production, Submission};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// All records of the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub submissions: Vec<Submission>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub productions: Vec<Production>,
    #[serde(default)]
    pub installations: Vec<Installation>,
}

impl Store {
    /// Store seeded with the built-in records.
    pub fn fixtures() -> Self {
        Self {
            clients: fixtures::clients(),
            submissions: fixtures::submissions(),
            orders: fixtures::orders(),
            productions: fixtures::productions(),
            installations: fixtures::installations(),
        }
    }

    /// Load a snapshot from file.
    ///
    /// # Arguments
    /// * `path` - Path to the snapshot JSON file
    ///
    /// # Returns
    /// * `Result<Store>` - Loaded store or error
    ///
    /// # Details
    /// If the file doesn't exist, returns the built-in records.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("no snapshot at {}, using built-in records", path.display());
            return Ok(Self::fixtures());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;

        let store: Store =
            serde_json::from_str(&content).with_context(|| "Failed to parse snapshot file")?;

        log::info!(
            "loaded snapshot {} ({} clients, {} orders)",
            path.display(),
            store.clients.len(),
            store.orders.len()
        );
        Ok(store)
    }

    /// Save a snapshot to file.
    ///
    /// # Details
    /// Creates parent directory if it doesn't exist.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create snapshot directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize snapshot")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write snapshot file: {}", path.display()))?;

        log::info!("saved snapshot to {}", path.display());
        Ok(())
    }

    /// Find a client by exact name.
    pub fn client_by_name(&self, name: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.name == name)
    }
}

/// Replace the record with the same id, or append it.
///
/// # Returns
/// * `bool` - True if an existing record was replaced
pub fn upsert<R: Identified>(records: &mut Vec<R>, record: R) -> bool {
    match records.iter_mut().find(|r| r.id() == record.id()) {
        Some(existing) => {
            *existing = record;
            true
        }
        None => {
            records.push(record);
            false
        }
    }
}

/// Fresh identifier for a new record.
///
/// # Details
/// Millisecond timestamp, bumped until no record uses it.
pub fn new_id<R: Identified>(records: &[R]) -> String {
    let mut candidate = chrono::Utc::now().timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !records.iter().any(|r| r.id() == id) {
            return id;
        }
        candidate += 1;
    }
}

/// Next document number, `PREFIX-YEAR-NNN`.
///
/// # Arguments
/// * `prefix` - Document prefix (`S`, `C`, `P`, `I`)
/// * `year` - Year stamped on the number
/// * `last` - Number of the most recent document, if any
/// * `count` - Number of existing documents
///
/// # Details
/// The sequence follows the last document's sequence. When the last number
/// cannot be parsed, the sequence continues from the document count.
pub fn next_number(prefix: &str, year: i32, last: Option<&str>, count: usize) -> String {
    let sequence = match last {
        None => 1,
        Some(number) => number
            .rsplit('-')
            .next()
            .and_then(|seq| seq.parse::<u32>().ok())
            .map_or(count as u32 + 1, |seq| seq + 1),
    };
    format!("{}-{}-{:03}", prefix, year, sequence)
}
