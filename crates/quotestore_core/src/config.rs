//! Store configuration.
//!
//! # Invariants
//! - Missing fields fall back to defaults when deserialized.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// File name used when no path is configured.
pub const DEFAULT_DB_FILE_NAME: &str = "quotes.db";
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Options for opening a file-backed [`crate::QuoteStore`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// SQLite file; created when absent.
    pub db_path: PathBuf,
    /// How long a writer waits on a competing transaction before failing.
    pub busy_timeout_ms: u64,
}

impl StoreConfig {
    /// Config with `db_path` and default options.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            ..Self::default()
        }
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}
