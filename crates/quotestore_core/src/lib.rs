//! Durable quote persistence.
//! Stores, lists and deletes quotes pairing a structured input with its
//! computed result, rejecting inputs that are already stored.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use config::{StoreConfig, DEFAULT_DB_FILE_NAME};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::id::{IdGenerator, UuidIdGenerator};
pub use model::quote::{resolve_quote_name, QuoteId, QuoteRow, SavedQuote, DEFAULT_QUOTE_NAME};
pub use repo::quote_repo::{QuoteRepository, RepoError, RepoResult, SqliteQuoteRepository};
pub use service::quote_service::QuoteService;
pub use store::QuoteStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
