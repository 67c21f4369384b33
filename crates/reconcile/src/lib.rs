//! Catalog reconciliation engine.
//!
//! Pure transformation functions that merge candidate records (edits, adds,
//! bulk imports, batch price updates) into the canonical catalog, preserving
//! the append-only price ledger and reporting per-record outcomes. No IO:
//! persistence is the store crate's concern.

pub mod candidate;
pub mod engine;
pub mod validate;

pub use candidate::{CandidateRecord, PriceUpdate};
pub use engine::{
    apply_add, apply_batch_price_update, apply_edit, apply_import, AddOutcome, ImportReport,
    Outcome, PriceUpdateReport,
};
pub use validate::{
    validate_candidates, validate_import_rows, validate_price_updates, ValidationErrors,
};
