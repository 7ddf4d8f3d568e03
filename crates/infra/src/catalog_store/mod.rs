//! Whole-catalog persistence boundary.
//!
//! A catalog backend reads and rewrites the entire catalog at once. Callers
//! always work load-mutate-save; there are no partial updates.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryCatalog;
pub use json_file::JsonFileCatalog;
pub use r#trait::{CatalogError, CatalogStore};
