//! Canonical product record shape.
//!
//! Field names on the wire are camelCase because the record shape is shared
//! with JSON import payloads and the persisted catalog document.

use serde::{Deserialize, Serialize};

use crate::history::PriceHistory;

/// Stock availability of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

/// One recorded price point.
///
/// Once appended to a history it is never edited or removed. `effective_date`
/// is display-only (`YYYY-MM-DD`); ordering of entries is storage order, not
/// date order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEntry {
    pub cost: String,
    pub effective_date: String,
}

impl PriceEntry {
    pub fn new(cost: impl Into<String>, effective_date: impl Into<String>) -> Self {
        Self {
            cost: cost.into(),
            effective_date: effective_date.into(),
        }
    }
}

/// A catalog entry, identified by `sku` (unique, immutable once created).
///
/// `suppliers` is order-significant: the first entry is the primary supplier
/// and duplicates are permitted. The optional collections (`gallery`,
/// `templates`, `videos`) postdate the original record shape; records
/// persisted before they existed omit them entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub fulfillment_time: String,
    pub status: StockStatus,
    pub suppliers: Vec<String>,
    pub main_image: String,
    pub price_history: PriceHistory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<String>>,
}
