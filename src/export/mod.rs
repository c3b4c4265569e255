//! Table export.
//!
//! This module dumps a single table to its JSON file. The run loop in the
//! crate root calls `dump_table` once per entry of the table list.

mod json;
mod row;
mod types;

use std::path::Path;

use log::{debug, warn};
use sqlx::sqlite::SqliteConnection;

use crate::error_handling::ExportError;

pub use json::{render_rows, table_output_path, write_rows};
pub use types::{ColumnValue, ExportRow, TableOutcome};

/// Exports one table into `output_dir`.
///
/// Query and decoding failures are not errors: they produce
/// `TableOutcome::Skipped` and the caller moves on. An empty table produces
/// `TableOutcome::Empty` and leaves any existing file alone. Only a failure
/// to write the output file is returned as `Err`.
pub async fn dump_table(
    conn: &mut SqliteConnection,
    table: &str,
    output_dir: &Path,
) -> Result<TableOutcome, ExportError> {
    let rows = match row::fetch_table_rows(conn, table).await {
        Ok(rows) => rows,
        Err(e) => {
            warn!("Skipping table {table}: {e}");
            return Ok(TableOutcome::Skipped {
                table: table.to_string(),
                error: e.to_string(),
            });
        }
    };

    if rows.is_empty() {
        debug!("{table} is empty, leaving output untouched");
        return Ok(TableOutcome::Empty {
            table: table.to_string(),
        });
    }

    let path = table_output_path(output_dir, table);
    write_rows(&path, &rows).await?;

    Ok(TableOutcome::Written {
        table: table.to_string(),
        rows: rows.len(),
        path,
    })
}
