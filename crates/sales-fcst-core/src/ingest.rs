//! Delimited sales-history ingestion.
//!
//! Turns a header-carrying delimited file into free-form [`RawRow`]s keyed
//! by column name. No schema validation happens here beyond requiring the
//! header row itself; column lookup and value coercion are the normalizer's
//! concern.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{PipelineError, Result};

/// A raw parsed row: free-form mapping of column name to cell text.
///
/// No invariants; values may be malformed and columns may be missing.
pub type RawRow = HashMap<String, String>;

/// Read sales-history rows from a delimited file at `path`.
pub fn read_rows_from_path(path: impl AsRef<Path>) -> Result<Vec<RawRow>> {
    let file = File::open(path.as_ref())?;
    read_rows(file)
}

/// Read sales-history rows from any reader carrying delimited text.
///
/// The first record is the header row; each following record becomes a
/// [`RawRow`] keyed by header name. Records shorter than the header omit
/// the trailing keys, which surface downstream as missing fields.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() {
        return Err(PipelineError::InvalidInput(
            "input file has no header row".into(),
        ));
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let mut row = RawRow::with_capacity(headers.len());
        for (name, value) in headers.iter().zip(record.iter()) {
            row.insert(name.to_string(), value.to_string());
        }
        rows.push(row);
    }

    tracing::debug!(rows = rows.len(), "parsed input file");
    Ok(rows)
}
