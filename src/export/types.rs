//! Export types.

use std::fmt::{self, Write as _};
use std::path::PathBuf;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single column value, keyed by SQLite's storage class for that cell.
///
/// SQLite types values per cell rather than per column, so two rows of the
/// same table may carry different variants in the same column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl ColumnValue {
    /// Lowercase hex rendering used for blobs, which have no JSON form.
    fn hex(bytes: &[u8]) -> String {
        bytes
            .iter()
            .fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
                let _ = write!(out, "{b:02x}");
                out
            })
    }
}

impl Serialize for ColumnValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ColumnValue::Null => serializer.serialize_unit(),
            ColumnValue::Integer(i) => serializer.serialize_i64(*i),
            ColumnValue::Real(f) if f.is_finite() => serializer.serialize_f64(*f),
            // inf, -inf and NaN are not valid JSON numbers
            ColumnValue::Real(f) => serializer.collect_str(f),
            ColumnValue::Text(s) => serializer.serialize_str(s),
            ColumnValue::Blob(bytes) => serializer.serialize_str(&ColumnValue::hex(bytes)),
        }
    }
}

/// One table row: column name to value, in the order the engine returned
/// the columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportRow {
    pub columns: Vec<(String, ColumnValue)>,
}

impl ExportRow {
    /// Looks up a value by column name.
    pub fn get(&self, column: &str) -> Option<&ColumnValue> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }
}

// Serialized by hand: serde_json's default Map sorts keys, rows must not.
impl Serialize for ExportRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// What happened to one entry of the table list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOutcome {
    /// The query (or decoding one of its rows) failed; nothing was written.
    Skipped { table: String, error: String },
    /// The table exists but has no rows; any previous file is left in place.
    Empty { table: String },
    /// `rows` objects were written to `path`, replacing any previous file.
    Written {
        table: String,
        rows: usize,
        path: PathBuf,
    },
}

impl TableOutcome {
    /// Name of the table this outcome refers to.
    pub fn table(&self) -> &str {
        match self {
            TableOutcome::Skipped { table, .. }
            | TableOutcome::Empty { table }
            | TableOutcome::Written { table, .. } => table,
        }
    }
}

impl fmt::Display for TableOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableOutcome::Skipped { table, error } => write!(f, "Skipping {table}: {error}"),
            TableOutcome::Empty { table } => write!(f, "{table}: 0 rows"),
            TableOutcome::Written { rows, path, .. } => {
                write!(f, "Wrote {rows} rows to {}", path.display())
            }
        }
    }
}
