//! Builds the logger injected into the extension's entry view.

use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

use crate::config::SymbolsConfig;
use crate::error::{Result, SymbolsError};

/// A stderr `fmt` subscriber filtered by `config.log_filter`, wrapped as a
/// `Dispatch`. Nothing is installed globally.
pub fn dispatch(config: &SymbolsConfig) -> Result<Dispatch> {
    let filter = EnvFilter::try_new(&config.log_filter).map_err(|e| SymbolsError::LogFilter {
        filter: config.log_filter.clone(),
        message: e.to_string(),
    })?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();
    Ok(Dispatch::new(subscriber))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds() {
        assert!(dispatch(&SymbolsConfig::default()).is_ok());
    }

    #[test]
    fn invalid_filter_is_reported() {
        let config = SymbolsConfig {
            log_filter: "registry_kit=loud".into(),
            ..SymbolsConfig::default()
        };
        assert!(matches!(dispatch(&config), Err(SymbolsError::LogFilter { .. })));
    }
}
