//! Owning quote store facade.
//!
//! # Responsibility
//! - Hold the single SQLite handle for the store's lifetime.
//! - Expose list/add/remove (plus lookups) without leaking connection
//!   borrowing to callers.
//!
//! # Invariants
//! - The `quotes` table is verified once, when the store is built.
//! - Every call is one atomic unit of work against the handle.
//! - `close` releases the handle deterministically and reports failures.

use crate::config::StoreConfig;
use crate::db::{open_db_in_memory, open_db_with_timeout, DbError};
use crate::model::id::{IdGenerator, UuidIdGenerator};
use crate::model::quote::SavedQuote;
use crate::repo::quote_repo::{ensure_quote_connection_ready, RepoResult, SqliteQuoteRepository};
use crate::service::quote_service::QuoteService;
use log::info;
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Durable quote store backed by one SQLite file.
pub struct QuoteStore<G: IdGenerator = UuidIdGenerator> {
    conn: Connection,
    ids: G,
}

impl QuoteStore {
    /// Opens (creating if absent) the store at `path`.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        Self::open_with_config(&StoreConfig::new(path.as_ref()))
    }

    pub fn open_with_config(config: &StoreConfig) -> RepoResult<Self> {
        let conn = open_db_with_timeout(&config.db_path, config.busy_timeout())?;
        Self::from_connection(conn, UuidIdGenerator)
    }

    /// Opens a store whose contents vanish on drop.
    pub fn open_in_memory() -> RepoResult<Self> {
        let conn = open_db_in_memory()?;
        Self::from_connection(conn, UuidIdGenerator)
    }
}

impl<G: IdGenerator> QuoteStore<G> {
    /// Wraps an already bootstrapped connection with a custom id strategy.
    ///
    /// # Errors
    /// - `MissingRequiredTable` when `conn` has no `quotes` table.
    pub fn from_connection(conn: Connection, ids: G) -> RepoResult<Self> {
        ensure_quote_connection_ready(&conn)?;
        Ok(Self { conn, ids })
    }

    /// Returns every stored quote in storage order.
    pub fn list<I, O>(&self) -> RepoResult<Vec<SavedQuote<I, O>>>
    where
        I: DeserializeOwned,
        O: DeserializeOwned,
    {
        self.service().list()
    }

    /// Stores a new quote; see [`QuoteService::add`].
    pub fn add<I, O>(
        &mut self,
        input: I,
        result: O,
        name: Option<&str>,
    ) -> RepoResult<SavedQuote<I, O>>
    where
        I: Serialize,
        O: Serialize,
    {
        self.service().add(input, result, name)
    }

    /// Deletes the quote with `id`; `false` when nothing matched.
    pub fn remove(&mut self, id: &str) -> RepoResult<bool> {
        self.service().remove(id)
    }

    pub fn get<I, O>(&self, id: &str) -> RepoResult<Option<SavedQuote<I, O>>>
    where
        I: DeserializeOwned,
        O: DeserializeOwned,
    {
        self.service().get(id)
    }

    /// Looks up the stored quote whose input serializes equal to `input`.
    pub fn find_by_input<I, O>(&self, input: &I) -> RepoResult<Option<SavedQuote<I, O>>>
    where
        I: Serialize + DeserializeOwned,
        O: DeserializeOwned,
    {
        self.service().find_by_input(input)
    }

    pub fn count(&self) -> RepoResult<usize> {
        self.service().count()
    }

    /// Closes the underlying handle.
    pub fn close(self) -> RepoResult<()> {
        self.conn
            .close()
            .map_err(|(_, err)| DbError::Sqlite(err))?;
        info!("event=db_close module=store status=ok");
        Ok(())
    }

    fn service(&self) -> QuoteService<SqliteQuoteRepository<'_>, &G> {
        let repo = SqliteQuoteRepository::new_unchecked(&self.conn);
        QuoteService::with_id_generator(repo, &self.ids)
    }
}
