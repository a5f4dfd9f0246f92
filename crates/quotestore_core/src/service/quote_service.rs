//! Quote use-case service.
//!
//! # Responsibility
//! - Serialize caller values with `serde_json` and decode them back on read.
//! - Assign identifiers and default names before persistence.
//!
//! # Invariants
//! - Duplicate detection compares the serialized input text exactly; two
//!   values that serialize with different field order are distinct.
//! - Returned records carry the caller's structured values, not re-decoded
//!   copies.

use crate::model::id::{IdGenerator, UuidIdGenerator};
use crate::model::quote::{resolve_quote_name, QuoteRow, SavedQuote};
use crate::repo::quote_repo::{QuoteRepository, RepoError, RepoResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Typed quote operations over a row repository.
pub struct QuoteService<R: QuoteRepository, G: IdGenerator = UuidIdGenerator> {
    repo: R,
    ids: G,
}

impl<R: QuoteRepository> QuoteService<R> {
    /// Creates a service generating UUID v4 identifiers.
    pub fn new(repo: R) -> Self {
        Self::with_id_generator(repo, UuidIdGenerator)
    }
}

impl<R: QuoteRepository, G: IdGenerator> QuoteService<R, G> {
    /// Creates a service with a caller-chosen identifier strategy.
    pub fn with_id_generator(repo: R, ids: G) -> Self {
        Self { repo, ids }
    }

    /// Lists every stored quote, decoding input and result as `I` and `O`.
    ///
    /// No ordering is guaranteed.
    pub fn list<I, O>(&self) -> RepoResult<Vec<SavedQuote<I, O>>>
    where
        I: DeserializeOwned,
        O: DeserializeOwned,
    {
        self.repo.list_rows()?.into_iter().map(decode_row::<I, O>).collect()
    }

    /// Stores a new quote unless one with identical serialized input exists.
    ///
    /// # Contract
    /// - `name` of `None` or `""` becomes `"Untitled Quote"`.
    /// - Returns the stored record with a fresh id and the given values.
    ///
    /// # Errors
    /// - `DuplicateInput` when the input is already stored; nothing is written.
    /// - `Serialization` when `input` or `result` cannot be encoded.
    /// - `Db` on storage failure.
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
        let row = QuoteRow {
            id: self.ids.next_id(),
            input: serde_json::to_string(&input)?,
            result: serde_json::to_string(&result)?,
            quote_name: resolve_quote_name(name),
        };
        self.repo.insert_unique_input(&row)?;

        Ok(SavedQuote {
            id: row.id,
            input,
            result,
            quote_name: row.quote_name,
        })
    }

    /// Deletes a quote by id; `false` means nothing matched.
    pub fn remove(&self, id: &str) -> RepoResult<bool> {
        self.repo.delete_row(id)
    }

    /// Gets one quote by id.
    pub fn get<I, O>(&self, id: &str) -> RepoResult<Option<SavedQuote<I, O>>>
    where
        I: DeserializeOwned,
        O: DeserializeOwned,
    {
        self.repo.get_row(id)?.map(decode_row::<I, O>).transpose()
    }

    /// Finds the quote whose serialized input equals that of `input`.
    pub fn find_by_input<I, O>(&self, input: &I) -> RepoResult<Option<SavedQuote<I, O>>>
    where
        I: Serialize + DeserializeOwned,
        O: DeserializeOwned,
    {
        let serialized = serde_json::to_string(input)?;
        self.repo
            .find_row_by_input(&serialized)?
            .map(decode_row::<I, O>)
            .transpose()
    }

    /// Returns the number of stored quotes.
    pub fn count(&self) -> RepoResult<usize> {
        self.repo.count_rows()
    }
}

fn decode_row<I, O>(row: QuoteRow) -> RepoResult<SavedQuote<I, O>>
where
    I: DeserializeOwned,
    O: DeserializeOwned,
{
    let input = serde_json::from_str(&row.input).map_err(|err| {
        RepoError::InvalidData(format!("quote `{}` has undecodable input: {err}", row.id))
    })?;
    let result = serde_json::from_str(&row.result).map_err(|err| {
        RepoError::InvalidData(format!("quote `{}` has undecodable result: {err}", row.id))
    })?;

    Ok(SavedQuote {
        id: row.id,
        input,
        result,
        quote_name: row.quote_name,
    })
}
