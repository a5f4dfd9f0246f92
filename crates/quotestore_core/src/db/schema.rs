//! `quotes` table definition.
//!
//! # Invariants
//! - Every column is `NOT NULL`; `id` is the primary key.
//! - Statements use `IF NOT EXISTS` so repeated bootstrap is a no-op.

use super::DbResult;
use rusqlite::Connection;

/// Name of the single table owned by the store.
pub const QUOTES_TABLE: &str = "quotes";

const CREATE_QUOTES_TABLE: &str = "CREATE TABLE IF NOT EXISTS quotes (
    id TEXT PRIMARY KEY NOT NULL,
    input TEXT NOT NULL,
    result TEXT NOT NULL,
    quoteName TEXT NOT NULL
);";

/// Creates the `quotes` table when it is absent.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(CREATE_QUOTES_TABLE)?;
    Ok(())
}

/// Returns whether `table_name` exists in the connected database.
pub fn table_exists(conn: &Connection, table_name: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
