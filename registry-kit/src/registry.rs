//! The item-class descriptor map, keyed by record-type id.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::class::ItemClass;
use crate::error::{KitError, Result};

/// Item classes a registry hosts, in registration order.
#[derive(Default, Clone)]
pub struct ItemClassRegistry {
    classes: Vec<Arc<dyn ItemClass>>,
    id_index: HashMap<String, usize>,
}

impl ItemClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class. Ids must be unique.
    pub fn register(&mut self, class: Arc<dyn ItemClass>) -> Result<()> {
        let id = class.meta().id.clone();
        if self.id_index.contains_key(&id) {
            return Err(KitError::DuplicateItemClass { id });
        }
        debug!(id = %id, title = %class.meta().title, "registered item class");
        self.id_index.insert(id, self.classes.len());
        self.classes.push(class);
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, class: impl ItemClass + 'static) -> Result<Self> {
        self.register(Arc::new(class))?;
        Ok(self)
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn ItemClass>> {
        self.id_index.get(id).map(|&i| &self.classes[i])
    }

    /// Like [`get`](Self::get), but an unknown id is an error.
    pub fn require(&self, id: &str) -> Result<&Arc<dyn ItemClass>> {
        self.get(id).ok_or_else(|| KitError::UnknownItemClass { id: id.to_string() })
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|c| c.meta().id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ItemClass>> {
        self.classes.iter()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl std::fmt::Debug for ItemClassRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}
