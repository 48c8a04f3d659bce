//! Commit coordination: acceptance hooks, serialized per record.

use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::class::ItemClass;
use crate::error::{KitError, Result};

/// Runs the sanitize → validate sequence before a host persists an edit.
///
/// Commits for the same record id wait for each other, so the hooks for one
/// commit finish before the next one starts. Different records commit
/// concurrently. Nothing is persisted here: an accepted payload is returned
/// for the host to store.
#[derive(Debug, Default)]
pub struct CommitGate {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl CommitGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sanitize then validate `payload`.
    ///
    /// Returns the sanitized payload on acceptance. A `false` validation or a
    /// failing hook yields [`KitError::RejectedPayload`] carrying the original
    /// payload, so the caller stays in its editing state.
    pub async fn commit(&self, class: &dyn ItemClass, record_id: &str, payload: Value) -> Result<Value> {
        let lock = self.locks.entry(record_id.to_string()).or_default().clone();
        let outcome = {
            let _guard = lock.lock().await;
            run_hooks(class, record_id, payload).await
        };
        drop(lock);
        // Waiters hold their own clone, so the entry stays until the last one leaves.
        self.locks.remove_if(record_id, |_, lock| Arc::strong_count(lock) == 1);
        outcome
    }

    /// Records with a commit in flight or waiting.
    pub fn pending_records(&self) -> usize {
        self.locks.len()
    }
}

async fn run_hooks(class: &dyn ItemClass, record_id: &str, payload: Value) -> Result<Value> {
    let class_id = class.meta().id.clone();

    let reject = |reason: String, payload: Value| {
        info!(class = %class_id, record = record_id, %reason, "commit rejected");
        KitError::RejectedPayload {
            class: class_id.clone(),
            reason,
            payload: Box::new(payload),
        }
    };

    let sanitized = match class.sanitize_payload(payload.clone()).await {
        Ok(sanitized) => sanitized,
        Err(err) => return Err(reject(err.to_string(), payload)),
    };
    match class.validate_payload(&sanitized).await {
        Ok(true) => {
            debug!(class = %class_id, record = record_id, "commit accepted");
            Ok(sanitized)
        }
        Ok(false) => Err(reject("validation returned false".to_string(), payload)),
        Err(err) => Err(reject(err.to_string(), payload)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tests::StubClass;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn accepted_payload_is_returned() {
        let gate = CommitGate::new();
        let class = StubClass::new("symbols");
        let out = gate.commit(&class, "r1", json!({ "id": "A" })).await.unwrap();
        assert_eq!(out, json!({ "id": "A" }));
    }

    #[tokio::test]
    async fn false_validation_rejects_and_returns_payload() {
        let gate = CommitGate::new();
        let mut class = StubClass::new("symbols");
        class.accept = false;
        let err = gate.commit(&class, "r1", json!({ "id": "A" })).await.unwrap_err();
        let KitError::RejectedPayload { payload, .. } = err else {
            panic!("expected rejection, got {err}");
        };
        assert_eq!(*payload, json!({ "id": "A" }));
    }

    #[tokio::test]
    async fn failing_hook_is_a_rejection_not_a_crash() {
        let gate = CommitGate::new();
        let mut class = StubClass::new("symbols");
        class.fail_sanitize = true;
        let err = gate.commit(&class, "r1", json!({})).await.unwrap_err();
        assert!(err.is_rejection());
        assert!(err.to_string().contains("stub failure"));
    }

    #[tokio::test]
    async fn commits_on_one_record_are_serialized() {
        let gate = Arc::new(CommitGate::new());
        let held = gate.locks.entry("r1".to_string()).or_default().clone();
        let guard = held.lock().await;

        let task = {
            let gate = gate.clone();
            tokio::spawn(async move {
                let class = StubClass::new("symbols");
                gate.commit(&class, "r1", json!({})).await
            })
        };
        let other = gate.commit(&StubClass::new("symbols"), "r2", json!({})).await;
        assert!(other.is_ok());

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!task.is_finished());
        drop(guard);
        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn finished_commits_release_their_locks() {
        let gate = Arc::new(CommitGate::new());
        let mut failing = StubClass::new("symbols");
        failing.fail_sanitize = true;
        gate.commit(&failing, "r0", json!({})).await.unwrap_err();

        let tasks: Vec<_> = (0..32)
            .map(|i| {
                let gate = gate.clone();
                tokio::spawn(async move {
                    let class = StubClass::new("symbols");
                    gate.commit(&class, &format!("r{}", i % 4), json!({ "id": i })).await
                })
            })
            .collect();
        for task in tasks {
            assert!(task.await.unwrap().is_ok());
        }
        assert_eq!(gate.pending_records(), 0);
    }

    #[tokio::test]
    async fn lock_survives_while_a_commit_waits() {
        let gate = Arc::new(CommitGate::new());
        let held = gate.locks.entry("r1".to_string()).or_default().clone();
        let guard = held.lock().await;
        let task = {
            let gate = gate.clone();
            tokio::spawn(async move { gate.commit(&StubClass::new("symbols"), "r1", json!({})).await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(gate.pending_records(), 1);
        drop(guard);
        drop(held);
        assert!(task.await.unwrap().is_ok());
        assert_eq!(gate.pending_records(), 0);
    }
}
