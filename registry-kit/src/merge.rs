//! Merging partial records onto the defaults.
//!
//! The host seeds new records from the defaults and falls back to them for
//! partially specified records, so every field a view reads is present.

use registry_fields::FieldDescriptor;
use serde_json::{Map, Value};

use crate::error::{KitError, Result};
use crate::record::Record;

/// Deep-merge `partial` onto `defaults`.
///
/// Objects merge key by key; any other value in `partial` replaces the
/// default. A `null` in `partial` replaces only a slot whose default is itself
/// `null` or absent, so nullable slots (attachment entries, optional group
/// members) keep their explicit `null` while required shapes fall back to
/// their empty default. Applying the merge twice equals applying it once.
pub fn merge_json(defaults: &Value, partial: &Value) -> Value {
    match (defaults, partial) {
        (Value::Object(base), Value::Object(overlay)) => {
            let mut out: Map<String, Value> = base.clone();
            for (key, value) in overlay {
                let merged = match base.get(key) {
                    Some(default) => merge_json(default, value),
                    None => value.clone(),
                };
                out.insert(key.clone(), merged);
            }
            Value::Object(out)
        }
        (default, Value::Null) if !default.is_null() => default.clone(),
        (_, value) => value.clone(),
    }
}

/// Merge onto `R::default()` and read back the typed record.
pub fn merge_with_defaults<R: Record>(partial: &Value) -> Result<R> {
    let defaults = serde_json::to_value(R::default())?;
    serde_json::from_value(merge_json(&defaults, partial))
        .map_err(|e| KitError::malformed(e.to_string()))
}

/// Required fields that are absent (or `null`) in a raw record.
///
/// Anything that is not a JSON object is missing every required field.
pub fn missing_required(fields: &[FieldDescriptor], raw: &Value) -> Vec<String> {
    fields
        .iter()
        .filter(|desc| desc.required)
        .filter(|desc| raw.get(desc.key).map_or(true, Value::is_null))
        .map(|desc| desc.key.to_string())
        .collect()
}
