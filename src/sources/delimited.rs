//! Headerless delimited table parsing

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::errors::{SourceError, SourceResult};
use crate::models::StudentRecord;

/// Parse the full text of a student table
///
/// Every row is treated as data. Rows with fewer than the required number of
/// columns are dropped; quoting follows RFC 4180 and fields are not trimmed.
/// `origin` only labels parse errors.
pub fn parse_records(text: &str, delimiter: u8, origin: &Path) -> SourceResult<Vec<StudentRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for row in reader.records() {
        let row = row.map_err(|e| SourceError::parse(origin, e.to_string()))?;
        match StudentRecord::from_columns(row.iter()) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!("Dropped {} short rows from {}", dropped, origin.display());
    }

    Ok(records)
}
