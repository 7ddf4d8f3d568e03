//! Product CRUD over a catalog backend.
//!
//! Every mutating operation is load-mutate-save against the whole catalog.
//! Products are always rebuilt through the validating constructors before
//! being handed out or modified, so stored records that no longer satisfy the
//! model's rules surface as [`StoreError::CorruptRecord`] instead of leaking.
//!
//! The load+save pair is not atomic across callers; the store assumes a
//! single process working through it sequentially.

use std::path::PathBuf;

use thiserror::Error;

use stockroom_core::{DomainError, Entity, ProductId};
use stockroom_products::{Catalog, Price, Product, ProductRecord};

use crate::catalog_store::{CatalogError, CatalogStore, JsonFileCatalog};

#[derive(Debug, Error)]
pub enum StoreError {
    /// A supplied value failed validation (e.g. a non-positive new price).
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("no product found with id {0}")]
    NotFound(ProductId),

    #[error("a product with id {0} already exists")]
    Duplicate(ProductId),

    /// A stored record could not be rebuilt into a valid product.
    #[error("stored product {id} is invalid: {reason}")]
    CorruptRecord { id: ProductId, reason: String },

    /// Reading or writing the catalog failed.
    #[error(transparent)]
    Storage(#[from] CatalogError),
}

impl From<DomainError> for StoreError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(msg) => StoreError::Validation(msg),
            DomainError::InvalidId(msg) => StoreError::Validation(msg),
        }
    }
}

fn rebuild(id: &ProductId, record: &ProductRecord) -> Result<Product, StoreError> {
    Product::try_from(record).map_err(|e| StoreError::CorruptRecord {
        id: id.clone(),
        reason: e.to_string(),
    })
}

/// Sole owner of the catalog: all product reads and writes go through here.
#[derive(Debug, Clone)]
pub struct ProductStore<S> {
    backend: S,
}

impl ProductStore<JsonFileCatalog> {
    /// Store backed by the JSON catalog file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(JsonFileCatalog::new(path))
    }
}

impl<S> ProductStore<S>
where
    S: CatalogStore,
{
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Read the whole catalog. A catalog that was never written is empty.
    pub fn load(&self) -> Result<Catalog, StoreError> {
        Ok(self.backend.load()?)
    }

    /// Replace the whole catalog.
    pub fn save(&self, catalog: &Catalog) -> Result<(), StoreError> {
        Ok(self.backend.save(catalog)?)
    }

    /// Insert a new product. Fails with [`StoreError::Duplicate`] without
    /// touching storage if the id is already taken.
    pub fn create(&self, product: &Product) -> Result<(), StoreError> {
        let mut catalog = self.load()?;
        let id = product.id();

        if catalog.contains_key(id) {
            tracing::warn!(product_id = %id, "create rejected: duplicate id");
            return Err(StoreError::Duplicate(id.clone()));
        }

        catalog.insert(id.clone(), ProductRecord::from(product));
        self.save(&catalog)?;

        tracing::info!(product_id = %id, category = product.category().label(), "product created");
        Ok(())
    }

    /// Look up a product, rebuilt as its stored category.
    pub fn fetch(&self, id: &ProductId) -> Result<Product, StoreError> {
        let catalog = self.load()?;
        let record = catalog
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        rebuild(id, record)
    }

    /// Change a product's price and return the updated product.
    ///
    /// The new price is validated exactly as at creation; on failure nothing
    /// is written. The stored record is rebuilt with the new price already in
    /// place, so a record whose only defect is its stored price is repaired.
    pub fn update_price(&self, id: &ProductId, new_price: f64) -> Result<Product, StoreError> {
        let price = Price::new(new_price)?;

        let mut catalog = self.load()?;
        let mut record = catalog.get(id).cloned().ok_or_else(|| {
            tracing::warn!(product_id = %id, "price update rejected: unknown id");
            StoreError::NotFound(id.clone())
        })?;

        record.price = price.value();
        let product = rebuild(id, &record)?;

        catalog.insert(id.clone(), ProductRecord::from(&product));
        self.save(&catalog)?;

        tracing::info!(product_id = %id, price = new_price, "product price updated");
        Ok(product)
    }

    /// Remove a product and return the record that was stored for it.
    pub fn delete(&self, id: &ProductId) -> Result<ProductRecord, StoreError> {
        let mut catalog = self.load()?;
        let removed = catalog.remove(id).ok_or_else(|| {
            tracing::warn!(product_id = %id, "delete rejected: unknown id");
            StoreError::NotFound(id.clone())
        })?;
        self.save(&catalog)?;

        tracing::info!(product_id = %id, "product deleted");
        Ok(removed)
    }

    /// Every entry in the catalog, ordered by id.
    ///
    /// Each stored record is rebuilt on its own: a record that fails
    /// validation shows up as a [`StoreError::CorruptRecord`] entry and does
    /// not hide the others. Only a failure to read the catalog fails the call.
    pub fn list(&self) -> Result<Vec<Result<Product, StoreError>>, StoreError> {
        let listing: Vec<_> = self
            .load()?
            .iter()
            .map(|(id, record)| rebuild(id, record))
            .collect();

        let corrupt = listing.iter().filter(|entry| entry.is_err()).count();
        if corrupt > 0 {
            tracing::warn!(corrupt, total = listing.len(), "catalog contains invalid records");
        }
        Ok(listing)
    }
}
