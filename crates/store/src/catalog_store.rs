//! The catalog store: load, save, refresh.
//!
//! Persistence failures never corrupt or roll back the in-memory catalog the
//! caller holds; a failed save is reported so the UI can warn, nothing more.

use thiserror::Error;

use pricebook_catalog::{Catalog, ProductRecord};

use crate::kv::{KeyValueStore, KvError};
use crate::seed::seed_records;

/// Fixed key the whole catalog persists under.
pub const CATALOG_KEY: &str = "pricebook.catalog";

/// How many template entries each record keeps when a save has to shrink.
const DEGRADED_TEMPLATE_LIMIT: usize = 5;

/// Terminal persistence outcome, after the degrade-and-retry policy ran.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The payload did not fit even after degrading. The in-memory catalog
    /// is still valid; only persistence is behind.
    #[error("storage capacity exceeded after degraded retry")]
    CapacityExceeded,

    #[error("persistence failure: {0}")]
    Failure(String),
}

/// Loads and saves the canonical catalog through a key-value backend.
pub struct CatalogStore<S: KeyValueStore> {
    store: S,
    key: String,
    seed: Vec<ProductRecord>,
}

impl<S: KeyValueStore> CatalogStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: CATALOG_KEY.to_string(),
            seed: seed_records(),
        }
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            seed: seed_records(),
        }
    }

    /// Override the built-in seed (tests, or hosts with their own starter
    /// catalog).
    pub fn with_seed(mut self, seed: Vec<ProductRecord>) -> Self {
        self.seed = seed;
        self
    }

    fn seed_catalog(&self) -> Catalog {
        Catalog::from_records(self.seed.clone())
    }

    /// Rehydrate the catalog from the backend.
    ///
    /// An empty or absent store yields the built-in seed catalog. Stored
    /// records missing the newer optional collections are filled from the
    /// seed's matching SKU (schema upgrade on read; the next save makes it
    /// permanent). A corrupt payload falls back to the seed rather than
    /// leaving the caller without a catalog.
    pub fn load(&self) -> Result<Catalog, PersistenceError> {
        let raw = match self.store.get(&self.key) {
            Ok(raw) => raw,
            Err(e) => return Err(PersistenceError::Failure(e.to_string())),
        };

        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            tracing::info!(key = %self.key, "store empty, starting from seed catalog");
            return Ok(self.seed_catalog());
        };

        match serde_json::from_str::<Vec<ProductRecord>>(&raw) {
            Ok(mut records) => {
                self.upgrade_legacy(&mut records);
                Ok(Catalog::from_records(records))
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "stored catalog unreadable, falling back to seed");
                Ok(self.seed_catalog())
            }
        }
    }

    /// Re-load after an external mutation signal (another tab wrote, focus
    /// regained, file watcher fired). Last write wins: local state not yet
    /// persisted is superseded by whatever the store now holds.
    pub fn refresh(&self) -> Result<Catalog, PersistenceError> {
        tracing::debug!(key = %self.key, "external change signalled, rehydrating");
        self.load()
    }

    /// Persist the catalog, degrading once under capacity pressure.
    ///
    /// On a capacity failure each record's `templates` collection is
    /// truncated to its most recent 5 entries and the write retried once.
    /// Price history is never touched. The catalog value the caller holds is
    /// not modified either way.
    pub fn save(&self, catalog: &Catalog) -> Result<(), PersistenceError> {
        let payload = serde_json::to_string(catalog.records())
            .map_err(|e| PersistenceError::Failure(e.to_string()))?;

        match self.store.set(&self.key, &payload) {
            Ok(()) => Ok(()),
            Err(KvError::CapacityExceeded) => {
                tracing::warn!(
                    key = %self.key,
                    bytes = payload.len(),
                    "capacity exceeded, retrying with truncated templates"
                );
                self.save_degraded(catalog)
            }
            Err(KvError::Backend(e)) => Err(PersistenceError::Failure(e)),
        }
    }

    fn save_degraded(&self, catalog: &Catalog) -> Result<(), PersistenceError> {
        let degraded: Vec<ProductRecord> = catalog
            .iter()
            .cloned()
            .map(|mut record| {
                if let Some(templates) = record.templates.take() {
                    let keep = templates.len().saturating_sub(DEGRADED_TEMPLATE_LIMIT);
                    record.templates = Some(templates[keep..].to_vec());
                }
                record
            })
            .collect();

        let payload = serde_json::to_string(&degraded)
            .map_err(|e| PersistenceError::Failure(e.to_string()))?;

        match self.store.set(&self.key, &payload) {
            Ok(()) => {
                tracing::info!(key = %self.key, "degraded save succeeded");
                Ok(())
            }
            Err(KvError::CapacityExceeded) => {
                tracing::error!(key = %self.key, "degraded save still over capacity");
                Err(PersistenceError::CapacityExceeded)
            }
            Err(KvError::Backend(e)) => Err(PersistenceError::Failure(e)),
        }
    }

    /// Fill optional collections absent from stored records using the seed's
    /// matching SKU. Runs on every load but only changes records that still
    /// lack the fields, so it is effectively one-time per record.
    fn upgrade_legacy(&self, records: &mut [ProductRecord]) {
        for record in records.iter_mut() {
            if record.gallery.is_some() && record.templates.is_some() && record.videos.is_some() {
                continue;
            }
            let Some(donor) = self.seed.iter().find(|s| s.sku == record.sku) else {
                continue;
            };
            if record.gallery.is_none() {
                record.gallery = donor.gallery.clone();
            }
            if record.templates.is_none() {
                record.templates = donor.templates.clone();
            }
            if record.videos.is_none() {
                record.videos = donor.videos.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::InMemoryKvStore;
    use pricebook_catalog::{PriceEntry, PriceHistory, StockStatus};

    fn record(sku: &str, templates: Option<Vec<String>>) -> ProductRecord {
        ProductRecord {
            sku: sku.into(),
            name: format!("Product {sku}"),
            description: String::new(),
            category: "General".into(),
            fulfillment_time: "2 days".into(),
            status: StockStatus::InStock,
            suppliers: vec!["Acme Imports".into()],
            main_image: String::new(),
            price_history: PriceHistory::seeded(PriceEntry::new("$1.00", "2025-01-01")),
            gallery: None,
            templates,
            videos: None,
        }
    }

    #[test]
    fn empty_store_loads_the_seed_catalog() {
        let store = CatalogStore::new(InMemoryKvStore::new());
        let catalog = store.load().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.contains("MUG-11"));
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = CatalogStore::new(InMemoryKvStore::new());
        let catalog = Catalog::from_records(vec![record("A", None)]);
        store.save(&catalog).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.contains("A"));
    }

    #[test]
    fn corrupt_payload_falls_back_to_seed() {
        let kv = InMemoryKvStore::new();
        kv.set(CATALOG_KEY, "{not json").unwrap();
        let store = CatalogStore::new(kv);
        let catalog = store.load().unwrap();
        assert!(catalog.contains("MUG-11"));
    }

    #[test]
    fn legacy_records_get_optional_fields_from_seed() {
        let kv = InMemoryKvStore::new();
        // A stored MUG-11 predating gallery/templates/videos.
        let legacy = vec![record("MUG-11", None)];
        kv.set(CATALOG_KEY, &serde_json::to_string(&legacy).unwrap())
            .unwrap();

        let store = CatalogStore::new(kv);
        let catalog = store.load().unwrap();
        let rec = catalog.get("MUG-11").unwrap();
        assert!(rec.templates.is_some());
        assert!(rec.gallery.is_some());
        // Non-seed fields keep their stored values.
        assert_eq!(rec.name, "Product MUG-11");
    }

    #[test]
    fn legacy_record_without_seed_match_is_left_alone() {
        let kv = InMemoryKvStore::new();
        let legacy = vec![record("CUSTOM-99", None)];
        kv.set(CATALOG_KEY, &serde_json::to_string(&legacy).unwrap())
            .unwrap();

        let store = CatalogStore::new(kv);
        let catalog = store.load().unwrap();
        assert!(catalog.get("CUSTOM-99").unwrap().templates.is_none());
    }

    #[test]
    fn degraded_save_truncates_templates_to_last_five() {
        let templates: Vec<String> = (0..8).map(|i| format!("tpl-{i}")).collect();
        let catalog = Catalog::from_records(vec![record("A", Some(templates))]);

        // Budget chosen so the full payload fails but the truncated one fits.
        let full_len = serde_json::to_string(catalog.records()).unwrap().len();
        let kv = InMemoryKvStore::with_quota(full_len - 1 + CATALOG_KEY.len());
        let store = CatalogStore::new(kv);

        store.save(&catalog).unwrap();

        let loaded = store.load().unwrap();
        let saved_templates = loaded.get("A").unwrap().templates.clone().unwrap();
        assert_eq!(
            saved_templates,
            vec!["tpl-3", "tpl-4", "tpl-5", "tpl-6", "tpl-7"]
        );
        // The caller's in-memory catalog is untouched.
        assert_eq!(catalog.get("A").unwrap().templates.as_ref().unwrap().len(), 8);
    }

    #[test]
    fn short_template_lists_survive_degraded_save_unchanged() {
        let catalog =
            Catalog::from_records(vec![record("A", Some(vec!["tpl-0".into(), "tpl-1".into()]))]);
        let full_len = serde_json::to_string(catalog.records()).unwrap().len();
        // Force the degrade path even though nothing can be trimmed much.
        let kv = InMemoryKvStore::with_quota(full_len + CATALOG_KEY.len() - 1);
        let store = CatalogStore::new(kv);

        // Degraded payload is identical in size, so the retry also fails.
        let err = store.save(&catalog).unwrap_err();
        assert_eq!(err, PersistenceError::CapacityExceeded);
    }

    #[test]
    fn terminal_capacity_failure_reports_without_corruption() {
        let kv = InMemoryKvStore::with_quota(8);
        let store = CatalogStore::new(kv);
        let catalog = Catalog::from_records(vec![record(
            "A",
            Some((0..20).map(|i| format!("tpl-{i}")).collect()),
        )]);

        let err = store.save(&catalog).unwrap_err();
        assert_eq!(err, PersistenceError::CapacityExceeded);
        // Nothing half-written: a subsequent load yields the seed fallback.
        assert!(store.load().unwrap().contains("MUG-11"));
    }

    #[test]
    fn price_history_is_never_touched_by_degrade() {
        let mut rec = record("A", Some((0..20).map(|i| format!("tpl-{i}")).collect()));
        rec.price_history = rec
            .price_history
            .appended(PriceEntry::new("$2.00", "2025-02-01"));
        let catalog = Catalog::from_records(vec![rec]);

        let full_len = serde_json::to_string(catalog.records()).unwrap().len();
        let kv = InMemoryKvStore::with_quota(full_len - 1 + CATALOG_KEY.len());
        let store = CatalogStore::new(kv);
        store.save(&catalog).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.get("A").unwrap().price_history.len(), 2);
    }

    #[test]
    fn refresh_sees_external_writes() {
        let kv = std::sync::Arc::new(InMemoryKvStore::new());
        let store = CatalogStore::new(kv.clone());
        let catalog = Catalog::from_records(vec![record("A", None)]);
        store.save(&catalog).unwrap();

        // Another context replaces the stored catalog out from under us.
        let other = CatalogStore::new(kv);
        let external = Catalog::from_records(vec![record("B", None)]);
        other.save(&external).unwrap();

        let refreshed = store.refresh().unwrap();
        assert!(refreshed.contains("B"));
        assert!(!refreshed.contains("A"));
    }
}
