//! Identifier strategies for new quote records.
//!
//! Only uniqueness matters to callers; the token format is not a contract.

use uuid::Uuid;

/// Produces identifiers for newly created records.
///
/// Implementations must be practically collision-free for the lifetime of
/// a store file.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}

/// Random UUID v4 identifiers in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{IdGenerator, UuidIdGenerator};
    use std::collections::HashSet;

    #[test]
    fn uuid_generator_yields_distinct_parseable_ids() {
        let ids = (0..256)
            .map(|_| UuidIdGenerator.next_id())
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), 256);
        for id in &ids {
            assert!(uuid::Uuid::parse_str(id).is_ok());
        }
    }
}
