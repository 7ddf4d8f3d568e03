//! Products domain module.
//!
//! This crate contains the product data model and its validation rules,
//! implemented purely as deterministic domain logic (no IO, no storage).
//! The catalog file format lives in [`record`]; reading and writing the
//! file is the infra crate's job.

pub mod product;
pub mod record;

pub use product::{Category, Price, Product, Size, Stock, UnitForm};
pub use record::{Catalog, ProductRecord, RecordKind};
