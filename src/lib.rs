//! table_export library: dump SQLite tables to JSON files
//!
//! Opens one read-only connection to a SQLite database, walks a fixed list of
//! table names, and writes each non-empty table to `<output_dir>/<table>.json`
//! as a pretty-printed array of objects. Tables that fail to query are
//! reported and skipped; the run itself only fails when the database file is
//! missing or an output file cannot be written.
//!
//! # Example
//!
//! ```no_run
//! use table_export::{run_export, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = run_export(Config::from_root("/srv/app")).await?;
//! for outcome in &report.outcomes {
//!     println!("{outcome}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
mod storage;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use error_handling::{DatabaseError, ExportError};
pub use export::{ColumnValue, ExportRow, TableOutcome};
pub use run::{run_export, ExportReport};

// Internal run module (contains the export loop)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use log::info;

    use crate::config::Config;
    use crate::error_handling::{DatabaseError, ExportError};
    use crate::export::{dump_table, TableOutcome};
    use crate::storage::{close_database, open_database};

    /// Results of an export run.
    #[derive(Debug, Clone)]
    pub struct ExportReport {
        /// Database that was read
        pub db_path: PathBuf,
        /// Directory the JSON files were written to
        pub output_dir: PathBuf,
        /// One outcome per entry of the table list, in list order
        pub outcomes: Vec<TableOutcome>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    impl ExportReport {
        /// Number of tables written to disk.
        pub fn written(&self) -> usize {
            self.outcomes
                .iter()
                .filter(|o| matches!(o, TableOutcome::Written { .. }))
                .count()
        }

        /// Number of tables that had no rows.
        pub fn empty(&self) -> usize {
            self.outcomes
                .iter()
                .filter(|o| matches!(o, TableOutcome::Empty { .. }))
                .count()
        }

        /// Number of tables skipped because their query failed.
        pub fn skipped(&self) -> usize {
            self.outcomes
                .iter()
                .filter(|o| matches!(o, TableOutcome::Skipped { .. }))
                .count()
        }
    }

    /// Runs an export with the provided configuration.
    ///
    /// Steps, in order: check the database exists, ensure the output
    /// directory, open the connection, dump every table in `config.tables`
    /// (duplicates once per occurrence), close the connection.
    ///
    /// # Errors
    ///
    /// - `ExportError::MissingDatabase` if `config.db_path` does not exist. This
    ///   is checked before anything is created or opened.
    /// - `ExportError::Io` if the output directory or a table file cannot be
    ///   written. The run stops at that table.
    /// - `ExportError::Database` if the connection cannot be opened or closed.
    ///
    /// A table whose query fails is never an error; it is reported as
    /// `TableOutcome::Skipped`.
    pub async fn run_export(config: Config) -> Result<ExportReport, ExportError> {
        let start = Instant::now();

        if !config.db_path.exists() {
            return Err(ExportError::MissingDatabase(config.db_path));
        }

        tokio::fs::create_dir_all(&config.output_dir)
            .await
            .map_err(|source| ExportError::Io {
                path: config.output_dir.clone(),
                source,
            })?;

        let mut conn = match open_database(&config.db_path).await {
            Ok(conn) => conn,
            // Removed between the check above and the open
            Err(DatabaseError::NotFound(path)) => return Err(ExportError::MissingDatabase(path)),
            Err(e) => return Err(e.into()),
        };

        info!(
            "Exporting {} tables from {} to {}",
            config.tables.len(),
            config.db_path.display(),
            config.output_dir.display()
        );

        let mut outcomes = Vec::with_capacity(config.tables.len());
        for table in &config.tables {
            outcomes.push(dump_table(&mut conn, table, &config.output_dir).await?);
        }

        close_database(conn).await?;

        let report = ExportReport {
            db_path: config.db_path,
            output_dir: config.output_dir,
            outcomes,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        };

        info!(
            "Export finished: {} written, {} empty, {} skipped",
            report.written(),
            report.empty(),
            report.skipped()
        );

        Ok(report)
    }
}
