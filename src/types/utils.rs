//! Shared utility functions for text budgets and JSON coercion.
//!
//! Budgets throughout the crate are counted in characters, never bytes, so
//! truncation always lands on a character boundary.

use serde_json::Value;

// =============================================================================
// Character Budget Helpers
// =============================================================================

/// Length of a string in characters.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Prefix of `s` holding at most `max_chars` characters.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

// =============================================================================
// JSON Value Coercion
// =============================================================================

/// Render a JSON value as plain text.
///
/// Strings are taken verbatim. `null` and booleans are spelled `None`, `True`
/// and `False`; numbers and nested values use their compact JSON form.
pub fn json_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}

/// Extract a trimmed text field from a JSON object, empty when missing.
pub fn json_text_field(value: &serde_json::Map<String, Value>, key: &str) -> String {
    value
        .get(key)
        .map(json_to_text)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}
