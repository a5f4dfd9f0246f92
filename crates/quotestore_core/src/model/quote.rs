//! Quote record model.
//!
//! # Responsibility
//! - Pair an opaque structured input with its externally computed result.
//! - Resolve display names, falling back to [`DEFAULT_QUOTE_NAME`].
//!
//! # Invariants
//! - `id` is assigned by the store and never changes.
//! - `input` and `result` are stored verbatim; the store never inspects them.

use serde::{Deserialize, Serialize};

/// Name assigned when the caller supplies none (or an empty one).
pub const DEFAULT_QUOTE_NAME: &str = "Untitled Quote";

/// Store-assigned record identifier.
pub type QuoteId = String;

/// Quote record as returned to callers.
///
/// `I` and `R` are whatever the calculation layer produces; any
/// `serde` round-trip-safe type works, including `serde_json::Value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedQuote<I, R> {
    pub id: QuoteId,
    pub input: I,
    pub result: R,
    /// Serialized as `quoteName` to match the persisted column.
    #[serde(rename = "quoteName")]
    pub quote_name: String,
}

/// Persisted shape of one `quotes` row.
///
/// `input` and `result` hold the serialized text; `input` is also the
/// duplicate-detection key (exact string equality).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRow {
    pub id: QuoteId,
    pub input: String,
    pub result: String,
    pub quote_name: String,
}

/// Returns `name`, or [`DEFAULT_QUOTE_NAME`] when it is absent or empty.
///
/// Whitespace-only names are kept as given.
pub fn resolve_quote_name(name: Option<&str>) -> String {
    match name {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_QUOTE_NAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_quote_name, SavedQuote, DEFAULT_QUOTE_NAME};
    use serde_json::json;

    #[test]
    fn missing_or_empty_name_falls_back_to_placeholder() {
        assert_eq!(resolve_quote_name(None), DEFAULT_QUOTE_NAME);
        assert_eq!(resolve_quote_name(Some("")), DEFAULT_QUOTE_NAME);
    }

    #[test]
    fn supplied_name_is_kept_verbatim() {
        assert_eq!(resolve_quote_name(Some("Q1")), "Q1");
        assert_eq!(resolve_quote_name(Some("  ")), "  ");
    }

    #[test]
    fn saved_quote_serializes_name_as_camel_case() {
        let quote = SavedQuote {
            id: "abc".to_string(),
            input: json!({"x": 1}),
            result: json!({"total": 10}),
            quote_name: "Q1".to_string(),
        };

        let value = serde_json::to_value(&quote).unwrap();
        assert_eq!(value["quoteName"], "Q1");
        assert!(value.get("quote_name").is_none());
    }
}
