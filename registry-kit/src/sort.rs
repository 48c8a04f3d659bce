//! Canonical ordering of records in list views.

use std::cmp::Ordering;

use serde_json::Value;

/// Case-aware text comparison.
///
/// Compares case-folded text first so `"a001"` and `"A010"` interleave the way
/// a reader expects. Strings that fold equal are ordered lowercase first, as
/// ICU collation does, which keeps the order total: only identical strings
/// compare equal.
///
/// Accents are not folded. `"é"` sorts after `"z"` rather than next to `"e"`;
/// record codes are ASCII in practice.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| b.cmp(a))
}

/// The string at `field`, treating absent or non-string values as empty.
pub fn code_of<'a>(record: &'a Value, field: &str) -> &'a str {
    record.get(field).and_then(Value::as_str).unwrap_or("")
}

/// Compare two raw records by one string field.
pub fn compare_by_field(a: &Value, b: &Value, field: &str) -> Ordering {
    locale_compare(code_of(a, field), code_of(b, field))
}
