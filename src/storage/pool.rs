//! Database connection management.
//!
//! The exporter reads through exactly one connection, opened read-only and
//! never creating the database file.

use std::path::Path;

use log::{debug, error};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};

use crate::error_handling::DatabaseError;

/// Opens the single read-only connection used for a run.
///
/// Never creates the file and never changes the journal mode.
pub async fn open_database(db_path: &Path) -> Result<SqliteConnection, DatabaseError> {
    if !db_path.exists() {
        return Err(DatabaseError::NotFound(db_path.to_path_buf()));
    }

    let conn = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true)
        .create_if_missing(false)
        .connect()
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {e}");
            DatabaseError::ConnectError(e)
        })?;

    debug!("Opened database {}", db_path.display());
    Ok(conn)
}

/// Closes the connection, flushing any driver-side state.
pub async fn close_database(conn: SqliteConnection) -> Result<(), DatabaseError> {
    conn.close().await.map_err(DatabaseError::ConnectError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_missing_database_does_not_create_it() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("absent.db");

        let result = open_database(&path).await;

        assert!(matches!(result, Err(DatabaseError::NotFound(_))));
        assert!(!path.exists(), "database file must not be created");
    }

    #[tokio::test]
    async fn test_open_existing_database() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("present.db");
        let mut seed = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .connect()
            .await
            .expect("Failed to create fixture database");
        sqlx::query("CREATE TABLE t (id INTEGER)")
            .execute(&mut seed)
            .await
            .expect("Failed to create table");
        seed.close().await.expect("Failed to close fixture");

        let conn = open_database(&path).await.expect("open should succeed");
        close_database(conn).await.expect("close should succeed");
    }
}
