//! Catalog data model.
//!
//! This crate contains the canonical record shape, the append-only price
//! history ledger, the field-level differ, and the unique-by-SKU catalog
//! collection. Everything here is pure data and deterministic logic (no IO,
//! no storage).

pub mod catalog;
pub mod diff;
pub mod history;
pub mod record;

pub use catalog::{Catalog, ChangeSet};
pub use diff::{apply_fields, diff, Field, FieldSource};
pub use history::{PriceBounds, PriceHistory};
pub use record::{PriceEntry, ProductRecord, StockStatus};
