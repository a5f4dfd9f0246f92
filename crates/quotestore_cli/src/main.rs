//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `quotestore_core` linkage against a real store file.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `quotestore_cli [db_path]` (defaults to `quotes.db`).

use quotestore_core::{core_version, QuoteStore, DEFAULT_DB_FILE_NAME};
use std::process::ExitCode;

fn main() -> ExitCode {
    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DB_FILE_NAME.to_string());

    println!("quotestore_core version={}", core_version());

    let mut store = match QuoteStore::open(&db_path) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("failed to open `{db_path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    match store.count() {
        Ok(count) => println!("quotestore db={db_path} quotes={count}"),
        Err(err) => {
            eprintln!("failed to count quotes: {err}");
            return ExitCode::FAILURE;
        }
    }

    if let Err(err) = store.close() {
        eprintln!("failed to close `{db_path}`: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
