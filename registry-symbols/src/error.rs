//! Error types for the Symbol record class

use registry_kit::KitError;
use thiserror::Error;

/// Result type for Symbol registry operations
pub type Result<T> = std::result::Result<T, SymbolsError>;

#[derive(Debug, Error)]
pub enum SymbolsError {
    /// Configuration could not be loaded or extracted
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Log filter directive could not be parsed
    #[error("invalid log filter '{filter}': {message}")]
    LogFilter { filter: String, message: String },

    #[error(transparent)]
    Kit(#[from] KitError),
}

impl From<figment::Error> for SymbolsError {
    fn from(err: figment::Error) -> Self {
        SymbolsError::Config(Box::new(err))
    }
}
