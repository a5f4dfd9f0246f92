//! Domain model for persisted quotes.
//!
//! # Responsibility
//! - Define the quote record handed to callers and its persisted row form.
//! - Define the pluggable identifier strategy.
//!
//! # Invariants
//! - Records are immutable once created; the only lifecycle step after
//!   creation is hard deletion.

pub mod id;
pub mod quote;
