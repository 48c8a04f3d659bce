//! Error types for the record-class contract

use registry_fields::FieldsError;
use serde_json::Value;
use thiserror::Error;

/// Result type for kit operations
pub type Result<T> = std::result::Result<T, KitError>;

/// Errors that can occur between a record class and its host
#[derive(Debug, Error)]
pub enum KitError {
    /// Fields required for detail/edit rendering are absent, or a field has
    /// the wrong shape
    #[error("malformed record{}", malformed_suffix(.missing, .reason))]
    MalformedRecord {
        missing: Vec<String>,
        reason: Option<String>,
    },

    /// An acceptance hook rejected the payload; `payload` is the uncommitted
    /// value the caller keeps editing
    #[error("payload rejected by '{class}': {reason}")]
    RejectedPayload {
        class: String,
        reason: String,
        payload: Box<Value>,
    },

    /// An acceptance hook could not run to completion
    #[error("{hook} hook failed: {message}")]
    HookFailed { hook: &'static str, message: String },

    /// No item class registered under this id
    #[error("unknown item class: {id}")]
    UnknownItemClass { id: String },

    /// Two item classes registered under one id
    #[error("duplicate item class: {id}")]
    DuplicateItemClass { id: String },

    /// Extension declared an unparseable host version requirement
    #[error("invalid host version requirement '{requirement}': {message}")]
    InvalidHostVersion {
        requirement: String,
        message: String,
    },

    /// Extension is missing a manifest entry
    #[error("extension manifest incomplete: {message}")]
    IncompleteManifest { message: String },

    /// Dataset initializer or migration failed
    #[error("dataset bootstrap failed: {message}")]
    Dataset { message: String },

    /// Field-level error
    #[error(transparent)]
    Fields(#[from] FieldsError),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KitError {
    pub fn missing(missing: Vec<String>) -> Self {
        KitError::MalformedRecord {
            missing,
            reason: None,
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        KitError::MalformedRecord {
            missing: Vec::new(),
            reason: Some(reason.into()),
        }
    }

    pub fn hook_failed(hook: &'static str, message: impl Into<String>) -> Self {
        KitError::HookFailed {
            hook,
            message: message.into(),
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, KitError::RejectedPayload { .. })
    }
}

fn malformed_suffix(missing: &[String], reason: &Option<String>) -> String {
    let mut out = String::new();
    if !missing.is_empty() {
        out.push_str(&format!(": missing {}", missing.join(", ")));
    }
    if let Some(reason) = reason {
        out.push_str(&format!(": {reason}"));
    }
    out
}
