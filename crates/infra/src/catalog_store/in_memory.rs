use std::sync::RwLock;

use stockroom_products::Catalog;

use super::r#trait::{CatalogError, CatalogStore};

/// In-memory catalog for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    inner: RwLock<Catalog>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            inner: RwLock::new(catalog),
        }
    }
}

impl CatalogStore for InMemoryCatalog {
    fn load(&self) -> Result<Catalog, CatalogError> {
        let guard = self.inner.read().map_err(|_| CatalogError::Poisoned)?;
        Ok(guard.clone())
    }

    fn save(&self, catalog: &Catalog) -> Result<(), CatalogError> {
        let mut guard = self.inner.write().map_err(|_| CatalogError::Poisoned)?;
        *guard = catalog.clone();
        Ok(())
    }
}
