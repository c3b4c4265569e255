// Shared test helpers for fixture databases.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use sqlx::{ConnectOptions, Connection, SqliteConnection};
use table_export::Config;
use tempfile::TempDir;

/// A project root laid out like the real one: `prisma/dev-reset.db` and
/// `scripts/data/`.
pub struct FixtureProject {
    pub dir: TempDir,
}

#[allow(dead_code)] // Not every test file uses every helper
impl FixtureProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn config(&self) -> Config {
        Config::from_root(self.dir.path())
    }

    /// Same paths as `config()`, with an explicit table list.
    pub fn config_with_tables(&self, tables: &[&str]) -> Config {
        Config {
            tables: tables.iter().map(|t| t.to_string()).collect(),
            ..self.config()
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.config().db_path
    }

    pub fn output_dir(&self) -> PathBuf {
        self.config().output_dir
    }

    pub fn output_file(&self, table: &str) -> PathBuf {
        self.output_dir().join(format!("{table}.json"))
    }

    /// Runs each statement against the fixture database, creating it first if
    /// needed.
    pub async fn execute(&self, statements: &[&str]) {
        execute_on(&self.db_path(), statements).await;
    }
}

/// Opens (or creates) a fixture database in rollback-journal mode so the
/// exporter's read-only connection never needs WAL side files.
pub async fn fixture_connection(db_path: &Path) -> SqliteConnection {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Delete)
        .connect()
        .await
        .expect("Failed to open fixture database")
}

pub async fn execute_on(db_path: &Path, statements: &[&str]) {
    let mut conn = fixture_connection(db_path).await;
    for statement in statements {
        sqlx::query(statement)
            .execute(&mut conn)
            .await
            .unwrap_or_else(|e| panic!("Failed to execute {statement}: {e}"));
    }
    conn.close().await.expect("Failed to close fixture database");
}

/// Reads an output file as parsed JSON.
#[allow(dead_code)]
pub fn read_json(path: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    serde_json::from_str(&text).expect("Output should be valid JSON")
}
