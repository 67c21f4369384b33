//! Catalog filtering and free-text search.

use pricebook_catalog::{Catalog, ChangeSet, ProductRecord, StockStatus};

/// Stock-status narrowing of the catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockFilter {
    #[default]
    Any,
    InStock,
    OutOfStock,
}

impl StockFilter {
    fn matches(&self, status: StockStatus) -> bool {
        match self {
            StockFilter::Any => true,
            StockFilter::InStock => status == StockStatus::InStock,
            StockFilter::OutOfStock => status == StockStatus::OutOfStock,
        }
    }
}

fn matches_search(record: &ProductRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.name.to_lowercase().contains(needle)
        || record.sku.to_lowercase().contains(needle)
        || record
            .suppliers
            .iter()
            .any(|s| s.to_lowercase().contains(needle))
}

/// Derive the filtered view of the catalog, preserving catalog order.
///
/// Changed-only mode and the stock filter are mutually exclusive view modes:
/// when `changed_only` is set the stock filter is bypassed entirely and the
/// result is the intersection of the catalog with `changed` (an empty change
/// set yields an empty result, not "show all"). The free-text search is a
/// case-insensitive substring match over name, SKU, and suppliers, applied
/// last in either mode.
pub fn filter<'a>(
    catalog: &'a Catalog,
    stock: StockFilter,
    search: &str,
    changed_only: bool,
    changed: &ChangeSet,
) -> Vec<&'a ProductRecord> {
    let needle = search.trim().to_lowercase();

    catalog
        .iter()
        .filter(|r| {
            if changed_only {
                changed.contains(&r.sku)
            } else {
                stock.matches(r.status)
            }
        })
        .filter(|r| matches_search(r, &needle))
        .collect()
}
