//! Quote repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide list/insert/delete APIs over serialized `quotes` rows.
//! - Enforce the unique-input invariant at the persistence boundary.
//!
//! # Invariants
//! - Duplicate check and insert run in one `BEGIN IMMEDIATE` transaction, so
//!   two writers racing the same input cannot both pass the check.
//! - A rejected or failed insert leaves no row behind.
//! - Not-found on delete is a `false` outcome, never an error.

use crate::db::schema::{table_exists, QUOTES_TABLE};
use crate::db::DbError;
use crate::model::quote::{QuoteId, QuoteRow};
use log::{debug, error, info, warn};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const QUOTE_SELECT_SQL: &str = "SELECT
    id,
    input,
    result,
    quoteName
FROM quotes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error type for quote persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// A record with byte-identical serialized input already exists.
    DuplicateInput { existing_id: QuoteId },
    /// The storage medium could not be opened, read or written.
    Db(DbError),
    /// A caller value could not be serialized.
    Serialization(serde_json::Error),
    /// Persisted text did not decode into the requested types.
    InvalidData(String),
    MissingRequiredTable(&'static str),
}

impl RepoError {
    /// Returns whether this is the recoverable duplicate-input rejection.
    pub fn is_duplicate_input(&self) -> bool {
        matches!(self, Self::DuplicateInput { .. })
    }

    /// Returns whether the failure came from the storage engine.
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, Self::Db(_) | Self::MissingRequiredTable(_))
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateInput { existing_id } => write!(
                f,
                "a quote with identical input already exists: {existing_id}"
            ),
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "failed to serialize quote value: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted quote data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::DuplicateInput { .. } | Self::InvalidData(_) | Self::MissingRequiredTable(_) => {
                None
            }
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// Repository interface over serialized quote rows.
pub trait QuoteRepository {
    /// Returns every row in storage order.
    fn list_rows(&self) -> RepoResult<Vec<QuoteRow>>;
    /// Exact-match lookup by id.
    fn get_row(&self, id: &str) -> RepoResult<Option<QuoteRow>>;
    /// Exact-match lookup by serialized input.
    fn find_row_by_input(&self, input: &str) -> RepoResult<Option<QuoteRow>>;
    fn count_rows(&self) -> RepoResult<usize>;
    /// Inserts `row` unless a row with the same serialized input exists.
    fn insert_unique_input(&mut self, row: &QuoteRow) -> RepoResult<()>;
    /// Deletes the row with `id`; returns whether one was removed.
    fn delete_row(&self, id: &str) -> RepoResult<bool>;
}

/// SQLite-backed quote repository.
pub struct SqliteQuoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteQuoteRepository<'conn> {
    /// Constructs a repository from a bootstrapped connection.
    ///
    /// # Errors
    /// - `MissingRequiredTable` when the `quotes` table is absent.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_quote_connection_ready(conn)?;
        Ok(Self::new_unchecked(conn))
    }

    /// Skips the table check; `conn` must already have passed
    /// [`ensure_quote_connection_ready`].
    pub(crate) fn new_unchecked(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl QuoteRepository for SqliteQuoteRepository<'_> {
    fn list_rows(&self) -> RepoResult<Vec<QuoteRow>> {
        let mut stmt = self.conn.prepare(&format!("{QUOTE_SELECT_SQL};"))?;
        let rows = stmt
            .query_map([], parse_quote_row)?
            .collect::<Result<Vec<_>, _>>()?;
        debug!("event=quote_list module=repo status=ok rows={}", rows.len());
        Ok(rows)
    }

    fn get_row(&self, id: &str) -> RepoResult<Option<QuoteRow>> {
        let row = self
            .conn
            .query_row(
                &format!("{QUOTE_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_quote_row,
            )
            .optional()?;
        Ok(row)
    }

    fn find_row_by_input(&self, input: &str) -> RepoResult<Option<QuoteRow>> {
        let row = self
            .conn
            .query_row(
                &format!("{QUOTE_SELECT_SQL} WHERE input = ?1 LIMIT 1;"),
                [input],
                parse_quote_row,
            )
            .optional()?;
        Ok(row)
    }

    fn count_rows(&self) -> RepoResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM quotes;", [], |row| row.get(0))?;
        usize::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative row count `{count}`")))
    }

    fn insert_unique_input(&mut self, row: &QuoteRow) -> RepoResult<()> {
        let started_at = Instant::now();
        // Immediate: takes the write lock before the duplicate check.
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        let existing_id: Option<String> = tx
            .query_row(
                "SELECT id FROM quotes WHERE input = ?1 LIMIT 1;",
                [row.input.as_str()],
                |r| r.get(0),
            )
            .optional()?;

        if let Some(existing_id) = existing_id {
            // Dropping `tx` rolls back; nothing was written.
            warn!(
                "event=quote_add module=repo status=rejected error_code=duplicate_input existing_id={} duration_ms={}",
                existing_id,
                started_at.elapsed().as_millis()
            );
            return Err(RepoError::DuplicateInput { existing_id });
        }

        if let Err(err) = tx.execute(
            "INSERT INTO quotes (id, input, result, quoteName) VALUES (?1, ?2, ?3, ?4);",
            params![
                row.id.as_str(),
                row.input.as_str(),
                row.result.as_str(),
                row.quote_name.as_str(),
            ],
        ) {
            error!(
                "event=quote_add module=repo status=error error_code=insert_failed id={} error={}",
                row.id, err
            );
            return Err(err.into());
        }
        tx.commit()?;

        info!(
            "event=quote_add module=repo status=ok id={} duration_ms={}",
            row.id,
            started_at.elapsed().as_millis()
        );
        Ok(())
    }

    fn delete_row(&self, id: &str) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM quotes WHERE id = ?1;", [id])?;
        info!(
            "event=quote_remove module=repo status=ok id={} removed={}",
            id,
            changed > 0
        );
        Ok(changed > 0)
    }
}

/// Fails with `MissingRequiredTable` unless the `quotes` table exists.
pub fn ensure_quote_connection_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, QUOTES_TABLE)? {
        return Err(RepoError::MissingRequiredTable(QUOTES_TABLE));
    }
    Ok(())
}

fn parse_quote_row(row: &Row<'_>) -> rusqlite::Result<QuoteRow> {
    Ok(QuoteRow {
        id: row.get("id")?,
        input: row.get("input")?,
        result: row.get("result")?,
        quote_name: row.get("quoteName")?,
    })
}
