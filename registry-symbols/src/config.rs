//! Extension configuration, layered with figment.

use std::path::Path;

use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use figment::Figment;
use registry_kit::DEFAULT_MAX_ATTACHMENT_BYTES;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Environment variables with this prefix override file values.
pub const ENV_PREFIX: &str = "SYMBOLS_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolsConfig {
    pub extension_name: String,
    /// Semver requirement on the host application.
    pub required_host_version: String,
    /// `EnvFilter` directive for the extension's logger.
    pub log_filter: String,
    /// Decoded attachments above this size render as a note, not inline.
    pub max_inline_attachment_bytes: usize,
}

impl Default for SymbolsConfig {
    fn default() -> Self {
        Self {
            extension_name: "ISO Symbols Registry".to_string(),
            required_host_version: "^1.0.0-beta1".to_string(),
            log_filter: "info".to_string(),
            max_inline_attachment_bytes: DEFAULT_MAX_ATTACHMENT_BYTES,
        }
    }
}

impl SymbolsConfig {
    /// Load configuration in precedence order (later sources override
    /// earlier ones):
    /// 1. Built-in defaults
    /// 2. `file`, if given; format chosen by extension (TOML unless `.yaml`,
    ///    `.yml` or `.json`)
    /// 3. `SYMBOLS_*` environment variables
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            debug!(path = %path.display(), "loading symbols configuration file");
            figment = match path.extension().and_then(|e| e.to_str()) {
                Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
                Some("json") => figment.merge(Json::file(path)),
                _ => figment.merge(Toml::file(path)),
            };
        }
        let config: Self = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        debug!(?config, "symbols configuration loaded");
        Ok(config)
    }
}
