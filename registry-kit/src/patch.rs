//! The one place records change.

use registry_fields::FieldValue;
use serde_json::Value;

use crate::error::{KitError, Result};

/// Return a new record equal to `record` except for `key`.
///
/// Every other key, including ones no descriptor declares, is carried over
/// untouched. `record` itself is never modified.
pub fn apply_field_patch(record: &Value, key: &str, value: &FieldValue) -> Result<Value> {
    let Value::Object(fields) = record else {
        return Err(KitError::malformed("record is not an object"));
    };
    let mut next = fields.clone();
    next.insert(key.to_string(), value.to_json()?);
    Ok(Value::Object(next))
}
