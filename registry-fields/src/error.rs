//! Error types for field shapes and widgets

use thiserror::Error;

/// Result type for field operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur while reading or editing a field value
#[derive(Debug, Error)]
pub enum FieldsError {
    /// Value does not have the shape its descriptor declares
    #[error("field '{field}' expected {expected} but found {found}")]
    ShapeMismatch {
        field: String,
        expected: &'static str,
        found: String,
    },

    /// Record type declares no such field
    #[error("unknown field: {field}")]
    UnknownField { field: String },

    /// Field is rendered read-only and accepts no edits
    #[error("field is not editable: {field}")]
    NotEditable { field: String },

    /// Language code is not one of the declared languages
    #[error("unknown language code: {code}")]
    UnknownLanguage { code: String },

    /// Multilingual field edited without naming a language pane
    #[error("field '{field}' is multilingual; edit must name a language")]
    LanguageRequired { field: String },

    /// Tag removal past the end of the list
    #[error("tag index {index} out of range for list of {len}")]
    TagIndexOutOfRange { index: usize, len: usize },

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FieldsError {
    pub fn shape_mismatch(field: &str, expected: &'static str, found: impl Into<String>) -> Self {
        FieldsError::ShapeMismatch {
            field: field.to_string(),
            expected,
            found: found.into(),
        }
    }
}
