//! The extension manifest a host loads: item classes, host compatibility and
//! dataset bootstrap.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use async_trait::async_trait;
use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::class::ItemClass;
use crate::error::{KitError, Result};
use crate::logging::Pretty;
use crate::registry::ItemClassRegistry;
use crate::view::RegistryView;

/// Initial dataset contents, keyed by object path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetSeed {
    pub objects: BTreeMap<String, Value>,
}

impl DatasetSeed {
    pub fn with_object(mut self, path: impl Into<String>, value: Value) -> Self {
        self.objects.insert(path.into(), value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// Produces the seed for a new, empty dataset. Invoked once by the host.
#[async_trait]
pub trait DatasetInitializer: Send + Sync {
    async fn initialize(&self) -> Result<DatasetSeed>;
}

/// Seeds nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyDataset;

#[async_trait]
impl DatasetInitializer for EmptyDataset {
    async fn initialize(&self) -> Result<DatasetSeed> {
        Ok(DatasetSeed::default())
    }
}

/// Upgrades a dataset written by an older extension version.
#[async_trait]
pub trait DatasetMigration: Send + Sync {
    async fn migrate(&self, dataset: DatasetSeed) -> Result<DatasetSeed>;
}

/// A loadable registry extension.
pub struct Extension {
    name: String,
    required_host_version: VersionReq,
    classes: Arc<ItemClassRegistry>,
    migrations: BTreeMap<u32, Arc<dyn DatasetMigration>>,
    initializer: Arc<dyn DatasetInitializer>,
}

impl Extension {
    pub fn builder(name: impl Into<String>) -> ExtensionBuilder {
        ExtensionBuilder {
            name: name.into(),
            required_host_version: None,
            classes: ItemClassRegistry::new(),
            migrations: BTreeMap::new(),
            initializer: Arc::new(EmptyDataset),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required_host_version(&self) -> &VersionReq {
        &self.required_host_version
    }

    pub fn classes(&self) -> &ItemClassRegistry {
        &self.classes
    }

    /// Migration versions, ascending.
    pub fn migration_versions(&self) -> impl Iterator<Item = u32> + '_ {
        self.migrations.keys().copied()
    }

    /// Whether a host at `version` can load this extension.
    pub fn is_compatible(&self, version: &Version) -> bool {
        self.required_host_version.matches(version)
    }

    /// The extension's entry view. All rendering and commits inside it log to
    /// `dispatch`.
    pub fn main_view(&self, dispatch: tracing::Dispatch) -> RegistryView {
        RegistryView::new(self.classes.clone(), dispatch)
    }

    pub async fn initialize_dataset(&self) -> Result<DatasetSeed> {
        let seed = self
            .initializer
            .initialize()
            .await
            .map_err(|e| KitError::Dataset {
                message: format!("initializer failed: {e}"),
            })?;
        info!(extension = %self.name, objects = seed.objects.len(), "dataset initialized");
        debug!("seed: {}", Pretty(&seed));
        Ok(seed)
    }

    /// Run every migration newer than `from_version`, in version order.
    pub async fn apply_migrations(&self, from_version: u32, mut dataset: DatasetSeed) -> Result<DatasetSeed> {
        let pending = self
            .migrations
            .range((Bound::Excluded(from_version), Bound::Unbounded));
        for (version, migration) in pending {
            debug!(extension = %self.name, version, "applying dataset migration");
            dataset = migration
                .migrate(dataset)
                .await
                .map_err(|e| KitError::Dataset {
                    message: format!("migration {version} failed: {e}"),
                })?;
        }
        Ok(dataset)
    }
}

impl std::fmt::Debug for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extension")
            .field("name", &self.name)
            .field("required_host_version", &self.required_host_version.to_string())
            .field("classes", &self.classes)
            .field("migrations", &self.migrations.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builds an [`Extension`]; validation happens in [`build`](Self::build).
pub struct ExtensionBuilder {
    name: String,
    required_host_version: Option<String>,
    classes: ItemClassRegistry,
    migrations: BTreeMap<u32, Arc<dyn DatasetMigration>>,
    initializer: Arc<dyn DatasetInitializer>,
}

impl ExtensionBuilder {
    pub fn requires_host(mut self, requirement: impl Into<String>) -> Self {
        self.required_host_version = Some(requirement.into());
        self
    }

    pub fn item_class(mut self, class: impl ItemClass + 'static) -> Result<Self> {
        self.classes.register(Arc::new(class))?;
        Ok(self)
    }

    pub fn migration(mut self, version: u32, migration: impl DatasetMigration + 'static) -> Self {
        self.migrations.insert(version, Arc::new(migration));
        self
    }

    pub fn initializer(mut self, initializer: impl DatasetInitializer + 'static) -> Self {
        self.initializer = Arc::new(initializer);
        self
    }

    pub fn build(self) -> Result<Extension> {
        if self.name.trim().is_empty() {
            return Err(KitError::IncompleteManifest {
                message: "extension name is empty".into(),
            });
        }
        if self.classes.is_empty() {
            return Err(KitError::IncompleteManifest {
                message: format!("'{}' declares no item classes", self.name),
            });
        }
        let requirement = self.required_host_version.ok_or_else(|| KitError::IncompleteManifest {
            message: format!("'{}' declares no host version requirement", self.name),
        })?;
        let required_host_version =
            VersionReq::parse(&requirement).map_err(|e| KitError::InvalidHostVersion {
                requirement: requirement.clone(),
                message: e.to_string(),
            })?;

        debug!(name = %self.name, classes = ?self.classes, "extension built");
        Ok(Extension {
            name: self.name,
            required_host_version,
            classes: Arc::new(self.classes),
            migrations: self.migrations,
            initializer: self.initializer,
        })
    }
}
