//! Append-only price history ledger.
//!
//! Insertion order is truth: the "current" price is the last appended entry,
//! not the one with the latest `effective_date` (histories edited out of
//! chronological order keep their storage order). The ledger type exposes
//! push-only mutation so the invariant is structural, not conventional.

use serde::{Deserialize, Serialize};

use pricebook_core::money::{format_cents, parse_cost, ZERO_PRICE};

use crate::record::PriceEntry;

/// Ordered, append-only sequence of price entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceHistory(Vec<PriceEntry>);

/// Min/max cost across a non-empty ledger, both rendered as display strings.
///
/// Callers comparing `min == max` can collapse the range to a single figure;
/// that is display policy, the ledger always reports both bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBounds {
    pub min: String,
    pub max: String,
}

impl PriceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A one-entry history, used when a record is first created.
    pub fn seeded(entry: PriceEntry) -> Self {
        Self(vec![entry])
    }

    pub fn from_entries(entries: Vec<PriceEntry>) -> Self {
        Self(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&PriceEntry> {
        self.0.last()
    }

    pub fn entries(&self) -> &[PriceEntry] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &PriceEntry> {
        self.0.iter()
    }

    /// True iff recording (cost, effective_date) would be a new history event:
    /// either the cost or the date differs from the last entry. Either
    /// difference alone is sufficient, so a cost-preserving date correction
    /// and a date-preserving cost change are both recorded.
    ///
    /// Costs are compared as normalized strings (see `pricebook_core::money`);
    /// the form/import boundary normalizes before the engine runs.
    pub fn should_append(&self, cost: &str, effective_date: &str) -> bool {
        match self.0.last() {
            Some(latest) => latest.cost != cost || latest.effective_date != effective_date,
            None => true,
        }
    }

    /// Return a new history with `entry` pushed at the end. Never mutates in
    /// place; existing entries are never edited or removed.
    #[must_use]
    pub fn appended(&self, entry: PriceEntry) -> Self {
        let mut entries = self.0.clone();
        entries.push(entry);
        Self(entries)
    }

    /// Cost of the last appended entry, or the zero sentinel for an empty
    /// ledger.
    pub fn current_price(&self) -> String {
        self.0
            .last()
            .map(|e| e.cost.clone())
            .unwrap_or_else(|| ZERO_PRICE.to_string())
    }

    /// Numeric min/max across all entries, re-formatted as display strings.
    ///
    /// Entries whose cost fails to parse are skipped; `None` when nothing
    /// parses (or the ledger is empty).
    pub fn bounds(&self) -> Option<PriceBounds> {
        let mut cents = self.0.iter().filter_map(|e| parse_cost(&e.cost).ok());
        let first = cents.next()?;
        let (min, max) = cents.fold((first, first), |(lo, hi), c| (lo.min(c), hi.max(c)));
        Some(PriceBounds {
            min: format_cents(min),
            max: format_cents(max),
        })
    }
}

impl<'a> IntoIterator for &'a PriceHistory {
    type Item = &'a PriceEntry;
    type IntoIter = std::slice::Iter<'a, PriceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
