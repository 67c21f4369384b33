//! Field-level record comparison.
//!
//! The differ compares the scalar fields plus the order-sensitive supplier
//! list. It deliberately does not look at `priceHistory`: price change is
//! decided by latest-entry semantics in the ledger, not full-array equality.

use std::collections::BTreeSet;

use crate::record::{ProductRecord, StockStatus};

/// A compared field of a product record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Description,
    Category,
    FulfillmentTime,
    Status,
    Suppliers,
    MainImage,
}

impl Field {
    /// Wire-facing field name, as used in validation error keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Category => "category",
            Field::FulfillmentTime => "fulfillmentTime",
            Field::Status => "status",
            Field::Suppliers => "suppliers",
            Field::MainImage => "mainImage",
        }
    }
}

/// Anything that can stand in as the candidate side of a diff: a full record
/// (import) or form data (edit).
pub trait FieldSource {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn category(&self) -> &str;
    fn fulfillment_time(&self) -> &str;
    fn status(&self) -> StockStatus;
    fn suppliers(&self) -> &[String];
    fn main_image(&self) -> &str;
}

impl FieldSource for ProductRecord {
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

/// Compare `existing` against a candidate, returning the set of fields whose
/// values differ. An empty set is the "no-op, skip the write" signal.
///
/// Suppliers are compared as an ordered sequence: any reordering counts as a
/// change (the first supplier is the primary one).
pub fn diff<C: FieldSource>(existing: &ProductRecord, candidate: &C) -> BTreeSet<Field> {
    let mut changed = BTreeSet::new();

    if existing.name != candidate.name() {
        changed.insert(Field::Name);
    }
    if existing.description != candidate.description() {
        changed.insert(Field::Description);
    }
    if existing.category != candidate.category() {
        changed.insert(Field::Category);
    }
    if existing.fulfillment_time != candidate.fulfillment_time() {
        changed.insert(Field::FulfillmentTime);
    }
    if existing.status != candidate.status() {
        changed.insert(Field::Status);
    }
    if existing.suppliers != candidate.suppliers() {
        changed.insert(Field::Suppliers);
    }
    if existing.main_image != candidate.main_image() {
        changed.insert(Field::MainImage);
    }

    changed
}

/// Copy only the listed fields from `candidate` onto `record` (partial-field
/// merge; untouched fields keep their existing values).
pub fn apply_fields<C: FieldSource>(
    record: &mut ProductRecord,
    candidate: &C,
    fields: &BTreeSet<Field>,
) {
    for field in fields {
        match field {
            Field::Name => record.name = candidate.name().to_string(),
            Field::Description => record.description = candidate.description().to_string(),
            Field::Category => record.category = candidate.category().to_string(),
            Field::FulfillmentTime => {
                record.fulfillment_time = candidate.fulfillment_time().to_string()
            }
            Field::Status => record.status = candidate.status(),
            Field::Suppliers => record.suppliers = candidate.suppliers().to_vec(),
            Field::MainImage => record.main_image = candidate.main_image().to_string(),
        }
    }
}
