//! `pricebook-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the catalog error taxonomy and currency value handling.

pub mod error;
pub mod money;

pub use error::{CatalogError, CatalogResult};
pub use money::{format_cents, normalize_cost, parse_cost, MoneyError, ZERO_PRICE};
