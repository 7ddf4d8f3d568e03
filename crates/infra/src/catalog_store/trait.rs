use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use stockroom_products::Catalog;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("catalog {} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write catalog {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode catalog: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("catalog lock poisoned")]
    Poisoned,
}

/// Storage backend holding one complete catalog.
///
/// `load` on a backend that has never been written returns an empty catalog.
/// `save` replaces the stored catalog; a later `load` observes either the
/// previous catalog or the new one, never a mix.
pub trait CatalogStore: Send + Sync {
    fn load(&self) -> Result<Catalog, CatalogError>;
    fn save(&self, catalog: &Catalog) -> Result<(), CatalogError>;
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn load(&self) -> Result<Catalog, CatalogError> {
        (**self).load()
    }

    fn save(&self, catalog: &Catalog) -> Result<(), CatalogError> {
        (**self).save(catalog)
    }
}
