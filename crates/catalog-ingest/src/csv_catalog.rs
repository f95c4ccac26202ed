//! CSV loading into the record store.
//!
//! The source is a tabular file with one row per drug candidate. Required
//! columns: `Disease`, `Drug_Name`, `Orphan`, `Category`, `Total Score`.
//! Optional long-form columns: `1-Pager`, `Studies`. Record ids are assigned
//! sequentially in file order and stay stable for the session.

use std::io;
use std::path::Path;

use csv::ReaderBuilder;

use catalog_model::{OrphanFlag, Record, RecordId};

use crate::error::{DataLoadError, Result};

/// Required source columns, by canonical header name.
pub const REQUIRED_COLUMNS: &[&str] = &["Disease", "Drug_Name", "Orphan", "Category", "Total Score"];

const ONE_PAGER_COLUMN: &str = "1-Pager";
const STUDIES_COLUMN: &str = "Studies";

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Column indices resolved from the header row.
struct ColumnMap {
    disease: usize,
    drug_name: usize,
    orphan: usize,
    category: usize,
    total_score: usize,
    one_pager: Option<usize>,
    studies: Option<usize>,
}

impl ColumnMap {
    fn resolve(headers: &[String]) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| DataLoadError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            disease: require("Disease")?,
            drug_name: require("Drug_Name")?,
            orphan: require("Orphan")?,
            category: require("Category")?,
            total_score: require("Total Score")?,
            one_pager: find(ONE_PAGER_COLUMN),
            studies: find(STUDIES_COLUMN),
        })
    }
}

fn cell(row: &csv::StringRecord, idx: usize) -> String {
    normalize_cell(row.get(idx).unwrap_or(""))
}

fn optional_cell(row: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    let value = cell(row, idx?);
    if value.is_empty() { None } else { Some(value) }
}

/// Read the catalog from any reader.
///
/// A source with a valid header row and no data rows is a valid empty
/// catalog, not an error.
pub fn read_records<R: io::Read>(reader: R) -> Result<Vec<Record>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();
    let columns = ColumnMap::resolve(&headers)?;

    let mut records = Vec::new();
    for (row_idx, row) in csv_reader.records().enumerate() {
        let row = row?;
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let orphan_raw = cell(&row, columns.orphan);
        let orphan: OrphanFlag =
            orphan_raw
                .parse()
                .map_err(|_| DataLoadError::InvalidOrphanFlag {
                    row: row_idx + 1,
                    value: orphan_raw.clone(),
                })?;
        records.push(Record {
            id: RecordId(records.len() as u64),
            drug_name: cell(&row, columns.drug_name),
            disease: cell(&row, columns.disease),
            orphan,
            category: cell(&row, columns.category),
            total_score: cell(&row, columns.total_score),
            one_pager: optional_cell(&row, columns.one_pager),
            studies: optional_cell(&row, columns.studies),
        });
    }
    Ok(records)
}

/// Load the catalog from a CSV file.
pub fn load_catalog(path: &Path) -> Result<Vec<Record>> {
    let file = std::fs::File::open(path)?;
    let records = read_records(io::BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        count = records.len(),
        "loaded catalog"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_normalization_strips_bom_and_collapses_whitespace() {
        assert_eq!(normalize_header("\u{feff}Drug_Name"), "Drug_Name");
        assert_eq!(normalize_header("  Total   Score "), "Total Score");
    }
}
