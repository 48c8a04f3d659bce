//! The Symbol record class: a bilingual metadata record for standardized
//! graphical symbols such as safety pictograms.
//!
//! [`extension`] assembles everything a registry host loads:
//!
//! ```ignore
//! let config = SymbolsConfig::load(None)?;
//! let extension = registry_symbols::extension(&config)?;
//! let view = extension.main_view(registry_symbols::logging::dispatch(&config)?);
//! let rows = view.list_items(SYMBOLS_CLASS_ID, &records)?;
//! ```

pub mod config;
pub mod error;
pub mod fields;
pub mod initializer;
pub mod logging;
pub mod symbol;

use registry_kit::{Extension, ItemClassRegistry, RecordSchema};
use tracing::info;

pub use config::SymbolsConfig;
pub use error::{Result, SymbolsError};
pub use fields::{FORM_MEMBERS, SYMBOL_FIELDS};
pub use initializer::SymbolsDataset;
pub use symbol::{Form, SymbolData};

/// Record-type id the Symbol class registers under.
pub const SYMBOLS_CLASS_ID: &str = "symbols";

/// The Symbol item class. Both acceptance hooks are identity/always-true, so
/// a commit returns the payload exactly as sent.
pub fn symbol_class(config: &SymbolsConfig) -> Result<RecordSchema<SymbolData>> {
    Ok(RecordSchema::<SymbolData>::new()?.with_max_attachment_bytes(config.max_inline_attachment_bytes))
}

/// The descriptor map this crate contributes, keyed by record-type id.
pub fn item_class_configuration(config: &SymbolsConfig) -> Result<ItemClassRegistry> {
    Ok(ItemClassRegistry::new().with(symbol_class(config)?)?)
}

/// The loadable extension: the Symbol class, host requirement and dataset
/// initializer. No dataset migrations exist yet.
pub fn extension(config: &SymbolsConfig) -> Result<Extension> {
    let extension = Extension::builder(&config.extension_name)
        .requires_host(&config.required_host_version)
        .item_class(symbol_class(config)?)?
        .initializer(SymbolsDataset::new(&config.extension_name))
        .build()?;
    info!(name = extension.name(), requires = %extension.required_host_version(), "symbols extension ready");
    Ok(extension)
}
