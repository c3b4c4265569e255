//! JSON file output.
//!
//! Each table becomes one pretty-printed array of objects: 2-space indent,
//! UTF-8 left unescaped, no trailing newline.

use std::path::{Path, PathBuf};

use crate::config::OUTPUT_EXTENSION;
use crate::error_handling::ExportError;

use super::types::ExportRow;

/// Path of the dump for `table` inside `output_dir`.
pub fn table_output_path(output_dir: &Path, table: &str) -> PathBuf {
    output_dir.join(format!("{table}.{OUTPUT_EXTENSION}"))
}

/// Renders rows as the on-disk JSON document.
pub fn render_rows(rows: &[ExportRow]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// Writes `rows` to `path`, replacing any existing file.
pub async fn write_rows(path: &Path, rows: &[ExportRow]) -> Result<(), ExportError> {
    let document = render_rows(rows)?;
    tokio::fs::write(path, document)
        .await
        .map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })
}
