//! Catalog domain module.
//!
//! This crate contains the business rules for the inventory catalog,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod catalog;
pub mod events;
pub mod product;

pub use catalog::{Catalog, CatalogConfig, DEFAULT_REORDER_LEVEL, RemovalOutcome};
pub use events::{CatalogEvent, LowStock, LowStockKind, ProductAdded, ProductUpdated, StockMerged};
pub use product::Product;
