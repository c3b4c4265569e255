//! Row fetching and decoding.
//!
//! Turns the result of `SELECT * FROM <table>` into `ExportRow`s without any
//! knowledge of the table's schema: every cell is decoded according to its
//! own storage class.

use futures::TryStreamExt;
use log::debug;
use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::{Column, Row, TypeInfo, ValueRef};

use super::types::{ColumnValue, ExportRow};

/// Quotes a table name as an SQLite identifier.
///
/// Embedded double quotes are doubled, so any name is a single identifier;
/// a name that does not exist still fails with `no such table`.
pub(crate) fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Fetches every row of `table` in the engine's default scan order.
///
/// Any driver error (missing table, locked database, undecodable cell) is
/// returned as-is so the caller can skip the table.
pub(crate) async fn fetch_table_rows(
    conn: &mut SqliteConnection,
    table: &str,
) -> Result<Vec<ExportRow>, sqlx::Error> {
    let sql = format!("SELECT * FROM {}", quote_identifier(table));
    let mut stream = sqlx::query(&sql).fetch(&mut *conn);

    let mut rows = Vec::new();
    while let Some(row) = stream.try_next().await? {
        rows.push(decode_row(&row)?);
    }

    debug!(
        "{table}: fetched {} rows ({} columns)",
        rows.len(),
        rows.first().map_or(0, |r| r.columns.len())
    );
    Ok(rows)
}

/// Decodes all cells of a row, keeping the column order of the result set.
pub(crate) fn decode_row(row: &SqliteRow) -> Result<ExportRow, sqlx::Error> {
    let columns = row
        .columns()
        .iter()
        .map(|column| {
            let value = decode_value(row, column.ordinal())?;
            Ok((column.name().to_string(), value))
        })
        .collect::<Result<Vec<_>, sqlx::Error>>()?;

    Ok(ExportRow { columns })
}

fn decode_value(row: &SqliteRow, idx: usize) -> Result<ColumnValue, sqlx::Error> {
    let raw = row.try_get_raw(idx)?;
    if raw.is_null() {
        return Ok(ColumnValue::Null);
    }

    // For non-null cells this is the storage class, not the declared type
    let type_info = raw.type_info();
    let value = match type_info.name() {
        "INTEGER" => ColumnValue::Integer(row.try_get_unchecked(idx)?),
        "REAL" => ColumnValue::Real(row.try_get_unchecked(idx)?),
        "BLOB" => ColumnValue::Blob(row.try_get_unchecked(idx)?),
        _ => {
            let bytes: Vec<u8> = row.try_get_unchecked(idx)?;
            ColumnValue::Text(String::from_utf8_lossy(&bytes).into_owned())
        }
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Connection;

    async fn memory_conn() -> SqliteConnection {
        SqliteConnection::connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database")
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("users"), "\"users\"");
        assert_eq!(quote_identifier("Account"), "\"Account\"");
        assert_eq!(quote_identifier("we\"ird"), "\"we\"\"ird\"");
    }

    #[tokio::test]
    async fn test_decode_each_storage_class() {
        let mut conn = memory_conn().await;
        sqlx::query("CREATE TABLE mixed (n, i, r, t, b)")
            .execute(&mut conn)
            .await
            .expect("Failed to create table");
        sqlx::query("INSERT INTO mixed VALUES (NULL, 42, 1.5, 'héllo', x'00ff')")
            .execute(&mut conn)
            .await
            .expect("Failed to insert row");

        let rows = fetch_table_rows(&mut conn, "mixed")
            .await
            .expect("fetch should succeed");

        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].columns,
            vec![
                ("n".to_string(), ColumnValue::Null),
                ("i".to_string(), ColumnValue::Integer(42)),
                ("r".to_string(), ColumnValue::Real(1.5)),
                ("t".to_string(), ColumnValue::Text("héllo".to_string())),
                ("b".to_string(), ColumnValue::Blob(vec![0x00, 0xff])),
            ]
        );
    }

    #[tokio::test]
    async fn test_storage_class_wins_over_declared_type() {
        let mut conn = memory_conn().await;
        sqlx::query("CREATE TABLE loose (v TEXT)")
            .execute(&mut conn)
            .await
            .expect("Failed to create table");
        // TEXT affinity converts numbers to text; a blob stays a blob
        sqlx::query("INSERT INTO loose VALUES (x'01'), ('plain')")
            .execute(&mut conn)
            .await
            .expect("Failed to insert rows");

        let rows = fetch_table_rows(&mut conn, "loose")
            .await
            .expect("fetch should succeed");

        assert_eq!(rows[0].get("v"), Some(&ColumnValue::Blob(vec![0x01])));
        assert_eq!(
            rows[1].get("v"),
            Some(&ColumnValue::Text("plain".to_string()))
        );
    }

    #[tokio::test]
    async fn test_missing_table_is_an_error() {
        let mut conn = memory_conn().await;
        let err = fetch_table_rows(&mut conn, "nope")
            .await
            .expect_err("missing table must fail");
        assert!(err.to_string().contains("no such table"));
    }

    #[tokio::test]
    async fn test_empty_table_yields_no_rows() {
        let mut conn = memory_conn().await;
        sqlx::query("CREATE TABLE empty (id INTEGER)")
            .execute(&mut conn)
            .await
            .expect("Failed to create table");

        let rows = fetch_table_rows(&mut conn, "empty")
            .await
            .expect("fetch should succeed");
        assert!(rows.is_empty());
    }
}
