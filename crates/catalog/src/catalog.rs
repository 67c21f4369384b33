//! The canonical catalog collection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use pricebook_core::{CatalogError, CatalogResult};

use crate::record::ProductRecord;

/// SKUs touched by the most recent reconciliation pass. Drives the
/// "changed only" view and recently-changed row highlighting.
pub type ChangeSet = BTreeSet<String>;

/// Ordered sequence of product records, unique by SKU.
///
/// Records stay in insertion order; uniqueness is enforced at every entry
/// point (`try_insert`, `from_records`, `upsert`) rather than assumed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    records: Vec<ProductRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from possibly-dirty stored data. Duplicate SKUs are
    /// reconciled last-occurrence-wins, matching the batch tie-break policy.
    pub fn from_records(records: Vec<ProductRecord>) -> Self {
        let mut catalog = Self::new();
        for record in records {
            catalog.upsert(record);
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, sku: &str) -> Option<&ProductRecord> {
        self.records.iter().find(|r| r.sku == sku)
    }

    pub fn contains(&self, sku: &str) -> bool {
        self.get(sku).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ProductRecord> {
        self.records
    }

    /// Insert a record whose SKU must not already be present.
    pub fn try_insert(&mut self, record: ProductRecord) -> CatalogResult<()> {
        if self.contains(&record.sku) {
            return Err(CatalogError::duplicate_key(&record.sku));
        }
        self.records.push(record);
        Ok(())
    }

    /// Replace the record with the same SKU in place, or append if absent.
    pub fn upsert(&mut self, record: ProductRecord) {
        match self.records.iter_mut().find(|r| r.sku == record.sku) {
            Some(slot) => *slot = record,
            None => self.records.push(record),
        }
    }

    /// Replace an existing record, failing if its SKU is absent.
    pub fn replace(&mut self, record: ProductRecord) -> CatalogResult<()> {
        match self.records.iter_mut().find(|r| r.sku == record.sku) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(CatalogError::not_found(&record.sku)),
        }
    }

    /// Delete a record by SKU, returning it if present.
    pub fn remove(&mut self, sku: &str) -> Option<ProductRecord> {
        let idx = self.records.iter().position(|r| r.sku == sku)?;
        Some(self.records.remove(idx))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProductRecord;
    type IntoIter = std::slice::Iter<'a, ProductRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
