//! Candidate inputs supplied by the form/UI boundary.

use serde::{Deserialize, Serialize};

use pricebook_catalog::{FieldSource, PriceEntry, PriceHistory, ProductRecord, StockStatus};

/// Form-shaped candidate for Add and Edit: the compared record fields plus a
/// single submitted (cost, effective date) pair. Carries no history of its
/// own; the ledger decides whether the pair becomes a new entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub fulfillment_time: String,
    pub status: StockStatus,
    #[serde(default)]
    pub suppliers: Vec<String>,
    #[serde(default)]
    pub main_image: String,
    pub cost: String,
    pub effective_date: String,
}

impl CandidateRecord {
    /// Build a brand-new record from this candidate, seeding the price
    /// history with the submitted cost/date.
    pub fn into_record(self) -> ProductRecord {
        ProductRecord {
            price_history: PriceHistory::seeded(PriceEntry::new(self.cost, self.effective_date)),
            sku: self.sku,
            name: self.name,
            description: self.description,
            category: self.category,
            fulfillment_time: self.fulfillment_time,
            status: self.status,
            suppliers: self.suppliers,
            main_image: self.main_image,
            gallery: None,
            templates: None,
            videos: None,
        }
    }
}

impl FieldSource for CandidateRecord {
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn fulfillment_time(&self) -> &str {
        &self.fulfillment_time
    }
    fn status(&self) -> StockStatus {
        self.status
    }
    fn suppliers(&self) -> &[String] {
        &self.suppliers
    }
    fn main_image(&self) -> &str {
        &self.main_image
    }
}

/// One row of a batch price update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceUpdate {
    pub sku: String,
    pub cost: String,
    pub effective_date: String,
}

impl PriceUpdate {
    pub fn new(
        sku: impl Into<String>,
        cost: impl Into<String>,
        effective_date: impl Into<String>,
    ) -> Self {
        Self {
            sku: sku.into(),
            cost: cost.into(),
            effective_date: effective_date.into(),
        }
    }
}
