//! Core use-case services.
//!
//! # Responsibility
//! - Turn row-level repository calls into typed quote operations.
//! - Keep callers decoupled from storage and serialization details.

pub mod quote_service;
