//! Acceptance hooks awaited before a commit.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Payload acceptance for one record type.
///
/// The host awaits `sanitize` then `validate` before committing. `sanitize`
/// may return a transformed payload; `validate` answers without mutating.
/// Returning `Ok(false)` from `validate` rejects the commit and keeps the
/// record editable; an `Err` from either hook does the same.
///
/// Hooks see the raw payload, undeclared keys included. Hooks that want the
/// typed record can read it with [`merge_with_defaults`](crate::merge_with_defaults).
#[async_trait]
pub trait AcceptanceHooks: Send + Sync {
    async fn sanitize(&self, payload: Value) -> Result<Value> {
        Ok(payload)
    }

    async fn validate(&self, _payload: &Value) -> Result<bool> {
        Ok(true)
    }
}

/// Identity sanitize, always-true validate.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

#[async_trait]
impl AcceptanceHooks for AcceptAll {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn accept_all_passes_payload_through() {
        let payload = json!({
            "title": { "eng": "Stop", "fre": "Arrêt", "deu": "Halt" },
            "authors": [7000, null],
            "curatorNote": "kept"
        });
        assert_eq!(AcceptAll.sanitize(payload.clone()).await.unwrap(), payload);
        assert!(AcceptAll.validate(&json!({})).await.unwrap());
    }
}
