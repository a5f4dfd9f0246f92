//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define row-level data access contracts for the `quotes` table.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`DuplicateInput`) in addition
//!   to storage transport errors.

pub mod quote_repo;
