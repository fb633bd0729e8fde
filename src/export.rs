//! Spreadsheet export.
//!
//! Writes records as a `;`-separated CSV file with a UTF-8 BOM so that
//! spreadsheet software opens accented text correctly.

use crate::table::Record;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

const BOM: &[u8] = "\u{FEFF}".as_bytes();

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export")]
    Empty,
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Write records as CSV to `out`.
///
/// # Returns
/// * `Result<W, ExportError>` - The writer back, with every record flushed into it
///
/// # Details
/// The header row holds the field names of the first record. Each following
/// row holds the string form of every field. Cells are quoted by the CSV
/// writer when they contain `;`, quotes or line breaks.
pub fn write_csv<R: Record, W: Write>(records: &[R], mut out: W) -> Result<W, ExportError> {
    let first = records.first().ok_or(ExportError::Empty)?;
    out.write_all(BOM).map_err(csv::Error::from)?;

    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);
    writer.write_record(first.fields().iter().map(|(name, _)| *name))?;
    for record in records {
        writer.write_record(record.fields().iter().map(|(_, value)| value.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))
}

/// Write records to a CSV file.
///
/// # Returns
/// * `Result<usize, ExportError>` - Number of records written
pub fn export_csv<R: Record>(records: &[R], path: &Path) -> Result<usize, ExportError> {
    if records.is_empty() {
        return Err(ExportError::Empty);
    }
    let write_error = |source: io::Error| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    let file = File::create(path).map_err(write_error)?;
    let mut out = write_csv(records, BufWriter::new(file))?;
    out.flush().map_err(write_error)?;

    log::info!("exported {} records to {}", records.len(), path.display());
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Client, fixtures};
    use tempfile::TempDir;

    fn csv_text(records: &[Client]) -> String {
        let bytes = write_csv(records, Vec::new()).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_write_csv_clients() {
        let text = csv_text(&fixtures::clients());
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "\u{FEFF}id;name;city;contactName;phone;status"
        );
        assert_eq!(
            lines.next().unwrap(),
            "1;Constructions Modernes;Montréal;Jean Tremblay;514-555-1234;Actif"
        );
        assert_eq!(text.lines().count(), 9);
    }

    #[test]
    fn test_cells_with_separator_are_quoted() {
        let mut clients = fixtures::clients();
        clients.truncate(1);
        clients[0].name = "Toitures; Murs".to_string();
        clients[0].contact_name = "Jean \"Bob\" Roy".to_string();
        let text = csv_text(&clients);
        let row = text.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "1;\"Toitures; Murs\";Montréal;\"Jean \"\"Bob\"\" Roy\";514-555-1234;Actif"
        );
    }

    #[test]
    fn test_empty_export_fails() {
        let none: Vec<Client> = Vec::new();
        assert!(matches!(write_csv(&none, Vec::new()), Err(ExportError::Empty)));

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("clients.csv");
        assert!(matches!(export_csv(&none, &path), Err(ExportError::Empty)));
        assert!(!path.exists());
    }

    #[test]
    fn test_export_file_reads_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("clients.csv");
        let written = export_csv(&fixtures::clients(), &path).unwrap();
        assert_eq!(written, 8);

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(BOM));

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(&bytes[BOM.len()..]);
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.get(1), Some("name"));

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[1].get(1), Some("Immobilier Québec"));
        assert_eq!(rows[1].get(2), Some("Québec"));
        assert_eq!(rows[2].get(5), Some("Non Actif"));
    }
}
