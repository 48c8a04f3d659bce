//! Bootstrap for a new, empty symbols dataset.

use async_trait::async_trait;
use registry_kit::{DatasetInitializer, DatasetSeed, Record};
use serde_json::json;

use crate::symbol::SymbolData;

/// Object path of the registry metadata stub.
pub const REGISTER_META_PATH: &str = "/register.json";

/// Seeds only the registry metadata stub; the dataset starts with no items.
#[derive(Debug, Clone)]
pub struct SymbolsDataset {
    name: String,
}

impl SymbolsDataset {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl DatasetInitializer for SymbolsDataset {
    async fn initialize(&self) -> registry_kit::Result<DatasetSeed> {
        Ok(DatasetSeed::default().with_object(
            REGISTER_META_PATH,
            json!({
                "name": self.name,
                "itemClasses": [SymbolData::meta().id],
            }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeds_metadata_stub_only() {
        let seed = SymbolsDataset::new("ISO Symbols Registry").initialize().await.unwrap();
        assert_eq!(seed.objects.len(), 1);
        assert_eq!(seed.objects[REGISTER_META_PATH]["itemClasses"], json!(["symbols"]));
    }
}
