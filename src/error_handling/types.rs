//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The database file does not exist (it is never created implicitly).
    #[error("Database file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Error opening or closing the connection.
    #[error("SQL error: {0}")]
    ConnectError(#[from] sqlx::Error),
}

/// Errors that abort an export run.
///
/// Per-table query failures are not represented here: they are recorded as
/// skipped outcomes and the run carries on.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The configured database file is missing; no tables were processed.
    #[error("SQLite DB not found at {}", .0.display())]
    MissingDatabase(PathBuf),

    /// The connection could not be opened or closed.
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Creating the output directory or writing a table file failed.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// File or directory being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Rows could not be serialized to JSON.
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
