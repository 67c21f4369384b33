//! Schema validation at the import/form boundary.
//!
//! The engine assumes shape-valid, normalized input; this module is the gate
//! that makes the assumption hold. Errors are keyed `"<row-index>.<fieldName>"`
//! so the UI can attach them to the offending cell.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_json::Value;
use thiserror::Error;

use pricebook_catalog::{PriceEntry, PriceHistory, ProductRecord, StockStatus};
use pricebook_core::money::normalize_cost;

use crate::candidate::{CandidateRecord, PriceUpdate};

/// Per-field validation failures, keyed `"<row-index>.<fieldName>"`.
#[derive(Debug, Error, Clone, PartialEq, Eq, Default)]
#[error("{} validation error(s)", .0.len())]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }

    fn push(&mut self, row: usize, field: &str, message: impl Into<String>) {
        self.0.insert(format!("{row}.{field}"), message.into());
    }
}

fn valid_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

fn require_string(
    obj: &serde_json::Map<String, Value>,
    row: usize,
    field: &str,
    errors: &mut ValidationErrors,
) -> String {
    match obj.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::String(_)) | None => {
            errors.push(row, field, "required, must be a non-empty string");
            String::new()
        }
        Some(_) => {
            errors.push(row, field, "must be a string");
            String::new()
        }
    }
}

fn optional_string(
    obj: &serde_json::Map<String, Value>,
    row: usize,
    field: &str,
    errors: &mut ValidationErrors,
) -> String {
    match obj.get(field) {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => String::new(),
        Some(_) => {
            errors.push(row, field, "must be a string");
            String::new()
        }
    }
}

fn string_list(
    obj: &serde_json::Map<String, Value>,
    row: usize,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<Vec<String>> {
    match obj.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => out.push(s.clone()),
                    _ => {
                        errors.push(row, field, "every entry must be a string");
                        return None;
                    }
                }
            }
            Some(out)
        }
        Some(_) => {
            errors.push(row, field, "must be an array of strings");
            None
        }
    }
}

fn parse_status(
    obj: &serde_json::Map<String, Value>,
    row: usize,
    errors: &mut ValidationErrors,
) -> StockStatus {
    match obj.get("status").and_then(Value::as_str) {
        Some("InStock") => StockStatus::InStock,
        Some("OutOfStock") => StockStatus::OutOfStock,
        _ => {
            errors.push(row, "status", "must be \"InStock\" or \"OutOfStock\"");
            StockStatus::OutOfStock
        }
    }
}

fn parse_history(
    obj: &serde_json::Map<String, Value>,
    row: usize,
    errors: &mut ValidationErrors,
) -> PriceHistory {
    let Some(value) = obj.get("priceHistory") else {
        errors.push(row, "priceHistory", "required");
        return PriceHistory::new();
    };
    let Some(items) = value.as_array() else {
        errors.push(row, "priceHistory", "must be an array");
        return PriceHistory::new();
    };

    let mut entries = Vec::with_capacity(items.len());
    for item in items {
        let (cost, date) = match (
            item.get("cost").and_then(Value::as_str),
            item.get("effectiveDate").and_then(Value::as_str),
        ) {
            (Some(c), Some(d)) => (c, d),
            _ => {
                errors.push(row, "priceHistory", "entries need cost and effectiveDate");
                continue;
            }
        };
        let cost = match normalize_cost(cost) {
            Ok(c) => c,
            Err(e) => {
                errors.push(row, "priceHistory", e.to_string());
                continue;
            }
        };
        if !valid_date(date) {
            errors.push(row, "priceHistory", "effectiveDate must be YYYY-MM-DD");
            continue;
        }
        entries.push(PriceEntry::new(cost, date));
    }
    PriceHistory::from_entries(entries)
}

/// Validate raw import rows (parsed JSON objects) into full product records.
///
/// Cost strings are normalized to the canonical `"$D.CC"` form so downstream
/// string comparisons are reliable. All rows are checked; any failure rejects
/// the whole payload with every error attributed to its row and field.
pub fn validate_import_rows(rows: &[Value]) -> Result<Vec<ProductRecord>, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let mut records = Vec::with_capacity(rows.len());

    for (row, value) in rows.iter().enumerate() {
        let Some(obj) = value.as_object() else {
            errors.push(row, "record", "expected a JSON object");
            continue;
        };

        let record = ProductRecord {
            sku: require_string(obj, row, "sku", &mut errors),
            name: require_string(obj, row, "name", &mut errors),
            description: optional_string(obj, row, "description", &mut errors),
            category: optional_string(obj, row, "category", &mut errors),
            fulfillment_time: optional_string(obj, row, "fulfillmentTime", &mut errors),
            status: parse_status(obj, row, &mut errors),
            suppliers: string_list(obj, row, "suppliers", &mut errors).unwrap_or_default(),
            main_image: optional_string(obj, row, "mainImage", &mut errors),
            price_history: parse_history(obj, row, &mut errors),
            gallery: string_list(obj, row, "gallery", &mut errors),
            templates: string_list(obj, row, "templates", &mut errors),
            videos: string_list(obj, row, "videos", &mut errors),
        };
        records.push(record);
    }

    if errors.is_empty() {
        Ok(records)
    } else {
        Err(errors)
    }
}

/// Validate and normalize form candidates for Add/Edit.
pub fn validate_candidates(
    candidates: &[CandidateRecord],
) -> Result<Vec<CandidateRecord>, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let mut normalized = Vec::with_capacity(candidates.len());

    for (row, candidate) in candidates.iter().enumerate() {
        let mut candidate = candidate.clone();
        if candidate.sku.trim().is_empty() {
            errors.push(row, "sku", "required, must be a non-empty string");
        }
        if candidate.name.trim().is_empty() {
            errors.push(row, "name", "required, must be a non-empty string");
        }
        match normalize_cost(&candidate.cost) {
            Ok(cost) => candidate.cost = cost,
            Err(e) => errors.push(row, "cost", e.to_string()),
        }
        if !valid_date(&candidate.effective_date) {
            errors.push(row, "effectiveDate", "must be YYYY-MM-DD");
        }
        normalized.push(candidate);
    }

    if errors.is_empty() {
        Ok(normalized)
    } else {
        Err(errors)
    }
}

/// Validate and normalize batch price update rows.
pub fn validate_price_updates(
    updates: &[PriceUpdate],
) -> Result<Vec<PriceUpdate>, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let mut normalized = Vec::with_capacity(updates.len());

    for (row, update) in updates.iter().enumerate() {
        let mut update = update.clone();
        if update.sku.trim().is_empty() {
            errors.push(row, "sku", "required, must be a non-empty string");
        }
        match normalize_cost(&update.cost) {
            Ok(cost) => update.cost = cost,
            Err(e) => errors.push(row, "cost", e.to_string()),
        }
        if !valid_date(&update.effective_date) {
            errors.push(row, "effectiveDate", "must be YYYY-MM-DD");
        }
        normalized.push(update);
    }

    if errors.is_empty() {
        Ok(normalized)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricebook_catalog::StockStatus;
    use serde_json::json;

    #[test]
    fn valid_rows_come_back_normalized() {
        let rows = vec![json!({
            "sku": "MUG-11",
            "name": "Ceramic Mug",
            "status": "InStock",
            "suppliers": ["Acme Imports"],
            "priceHistory": [{ "cost": "4.5", "effectiveDate": "2025-01-01" }]
        })];
        let records = validate_import_rows(&rows).unwrap();
        assert_eq!(records[0].sku, "MUG-11");
        assert_eq!(records[0].status, StockStatus::InStock);
        // "4.5" normalized to canonical form.
        assert_eq!(records[0].price_history.last().unwrap().cost, "$4.50");
    }

    #[test]
    fn errors_are_keyed_by_row_and_field() {
        let rows = vec![
            json!({
                "sku": "OK-1",
                "name": "Fine",
                "status": "InStock",
                "priceHistory": []
            }),
            json!({
                "sku": "",
                "name": "Bad",
                "status": "Maybe",
                "priceHistory": [{ "cost": "lots", "effectiveDate": "2025-01-01" }]
            }),
        ];
        let errors = validate_import_rows(&rows).unwrap_err();
        assert!(errors.get("1.sku").is_some());
        assert!(errors.get("1.status").is_some());
        assert!(errors.get("1.priceHistory").is_some());
        assert!(errors.get("0.sku").is_none());
    }

    #[test]
    fn non_object_row_is_rejected() {
        let errors = validate_import_rows(&[json!("not a record")]).unwrap_err();
        assert!(errors.get("0.record").is_some());
    }

    #[test]
    fn bad_date_format_is_rejected() {
        let rows = vec![json!({
            "sku": "A",
            "name": "A",
            "status": "InStock",
            "priceHistory": [{ "cost": "$1.00", "effectiveDate": "01/01/2025" }]
        })];
        let errors = validate_import_rows(&rows).unwrap_err();
        assert!(errors.get("0.priceHistory").unwrap().contains("YYYY-MM-DD"));
    }

    #[test]
    fn candidate_costs_are_normalized() {
        let candidate = CandidateRecord {
            sku: "A".into(),
            name: "A".into(),
            description: String::new(),
            category: String::new(),
            fulfillment_time: String::new(),
            status: StockStatus::InStock,
            suppliers: vec![],
            main_image: String::new(),
            cost: "12".into(),
            effective_date: "2025-01-01".into(),
        };
        let normalized = validate_candidates(&[candidate]).unwrap();
        assert_eq!(normalized[0].cost, "$12.00");
    }

    #[test]
    fn price_update_validation_flags_each_field() {
        let updates = vec![PriceUpdate::new("", "oops", "yesterday")];
        let errors = validate_price_updates(&updates).unwrap_err();
        assert!(errors.get("0.sku").is_some());
        assert!(errors.get("0.cost").is_some());
        assert!(errors.get("0.effectiveDate").is_some());
        assert_eq!(errors.len(), 3);
    }
}
