//! Reconciliation entry operations.
//!
//! Every operation is a pure function `(catalog, candidates) -> (catalog',
//! outcomes)`: the caller owns the catalog value, passes it in, and gets the
//! transformed value back. Failures surface as returned errors or per-record
//! outcomes, never as panics.

use std::collections::BTreeSet;

use pricebook_catalog::{
    apply_fields, diff, Catalog, ChangeSet, PriceEntry, ProductRecord,
};
use pricebook_core::{CatalogError, CatalogResult};

use crate::candidate::{CandidateRecord, PriceUpdate};

/// Per-record reconciliation outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Updated,
    Unchanged,
}

/// Outcome for one candidate of an Add batch.
///
/// A failed candidate does not abort the batch; the caller gets one of these
/// per submitted row, in submission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub index: usize,
    pub sku: String,
    pub result: CatalogResult<Outcome>,
}

/// Aggregate counts of an import pass, for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportReport {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub changed: ChangeSet,
}

/// Result of a batch price update.
///
/// `invalid` lists update rows whose SKU was absent from the catalog; they
/// are skipped but always reported, never silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriceUpdateReport {
    pub changed: ChangeSet,
    pub invalid: Vec<String>,
}

/// Merge an edited form submission into the catalog.
///
/// Fails with `NotFound` when the SKU is absent. A submitted cost/date pair
/// identical to the current latest ledger entry appends nothing; if no
/// compared field changed either, the catalog is returned untouched with
/// `Outcome::Unchanged`.
pub fn apply_edit(
    mut catalog: Catalog,
    edited: &CandidateRecord,
) -> CatalogResult<(Catalog, Outcome)> {
    let existing = catalog
        .get(&edited.sku)
        .ok_or_else(|| CatalogError::not_found(&edited.sku))?
        .clone();

    let changed_fields = diff(&existing, edited);
    let append_price = existing
        .price_history
        .should_append(&edited.cost, &edited.effective_date);

    if changed_fields.is_empty() && !append_price {
        tracing::debug!(sku = %edited.sku, "edit is a no-op, skipping write");
        return Ok((catalog, Outcome::Unchanged));
    }

    let mut updated = existing;
    apply_fields(&mut updated, edited, &changed_fields);
    if append_price {
        updated.price_history = updated
            .price_history
            .appended(PriceEntry::new(&edited.cost, &edited.effective_date));
    }

    catalog.replace(updated)?;
    tracing::debug!(
        sku = %edited.sku,
        fields = changed_fields.len(),
        price_appended = append_price,
        "edit applied"
    );
    Ok((catalog, Outcome::Updated))
}

/// Add a batch of brand-new records.
///
/// Candidates whose SKU already exists in the catalog fail fast with
/// `DuplicateKey` (true duplicates belong in `apply_import`); the rest of the
/// batch still goes through. When the *same batch* carries one SKU twice, the
/// last occurrence wins and replaces the earlier creation.
pub fn apply_add(
    mut catalog: Catalog,
    candidates: &[CandidateRecord],
) -> (Catalog, Vec<AddOutcome>) {
    let mut outcomes = Vec::with_capacity(candidates.len());
    let mut created_here: BTreeSet<String> = BTreeSet::new();

    for (index, candidate) in candidates.iter().enumerate() {
        let sku = candidate.sku.clone();
        let result = if catalog.contains(&sku) {
            if created_here.contains(&sku) {
                // Later occurrence in the same batch overwrites the earlier.
                catalog.upsert(candidate.clone().into_record());
                Ok(Outcome::Created)
            } else {
                Err(CatalogError::duplicate_key(&sku))
            }
        } else {
            match catalog.try_insert(candidate.clone().into_record()) {
                Ok(()) => {
                    created_here.insert(sku.clone());
                    Ok(Outcome::Created)
                }
                Err(e) => Err(e),
            }
        };
        outcomes.push(AddOutcome { index, sku, result });
    }

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    tracing::debug!(
        submitted = candidates.len(),
        created = created_here.len(),
        failed,
        "add batch processed"
    );
    (catalog, outcomes)
}

/// Merge bulk-imported full records into the catalog.
///
/// New SKUs are inserted as-is. Existing SKUs get a partial-field merge of
/// only the differing fields, plus at most one appended price entry taken
/// from the imported record's *last* history entry. Records with no field or
/// price difference are skipped entirely, which makes re-importing the same
/// file idempotent: no duplicate history entries, no change notifications.
pub fn apply_import(
    mut catalog: Catalog,
    records: Vec<ProductRecord>,
) -> (Catalog, ImportReport) {
    let mut report = ImportReport::default();

    for imported in records {
        match catalog.get(&imported.sku).cloned() {
            None => {
                report.changed.insert(imported.sku.clone());
                report.created += 1;
                catalog.upsert(imported);
            }
            Some(existing) => {
                let changed_fields = diff(&existing, &imported);
                let price_candidate = imported.price_history.last().cloned();
                let append_price = price_candidate
                    .as_ref()
                    .map(|e| {
                        existing
                            .price_history
                            .should_append(&e.cost, &e.effective_date)
                    })
                    .unwrap_or(false);

                if changed_fields.is_empty() && !append_price {
                    report.unchanged += 1;
                    continue;
                }

                let mut updated = existing;
                apply_fields(&mut updated, &imported, &changed_fields);
                if append_price {
                    // price_candidate is Some whenever append_price is true.
                    if let Some(entry) = price_candidate {
                        updated.price_history = updated.price_history.appended(entry);
                    }
                }

                report.changed.insert(updated.sku.clone());
                report.updated += 1;
                catalog.upsert(updated);
            }
        }
    }

    tracing::debug!(
        created = report.created,
        updated = report.updated,
        unchanged = report.unchanged,
        "import pass finished"
    );
    (catalog, report)
}

/// Apply a batch of (sku, cost, effective date) updates.
///
/// A batch containing the same SKU twice is rejected whole with
/// `DuplicateKey`: silently picking one price for a SKU would be a
/// business-meaningful ambiguity. Updates referencing unknown SKUs are
/// skipped and reported in `invalid`. Updates matching the current latest
/// entry exactly are processed but excluded from the changed set.
pub fn apply_batch_price_update(
    mut catalog: Catalog,
    updates: &[PriceUpdate],
) -> CatalogResult<(Catalog, PriceUpdateReport)> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for update in updates {
        if !seen.insert(&update.sku) {
            return Err(CatalogError::duplicate_key(&update.sku));
        }
    }

    let mut report = PriceUpdateReport::default();
    for update in updates {
        let Some(existing) = catalog.get(&update.sku) else {
            report.invalid.push(update.sku.clone());
            continue;
        };

        if !existing
            .price_history
            .should_append(&update.cost, &update.effective_date)
        {
            continue;
        }

        let mut updated = existing.clone();
        updated.price_history = updated
            .price_history
            .appended(PriceEntry::new(&update.cost, &update.effective_date));
        catalog.replace(updated)?;
        report.changed.insert(update.sku.clone());
    }

    tracing::debug!(
        submitted = updates.len(),
        changed = report.changed.len(),
        invalid = report.invalid.len(),
        "batch price update finished"
    );
    Ok((catalog, report))
}
