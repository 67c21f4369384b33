//! Currency parsing and formatting.
//!
//! Costs travel as display strings (`"$1234.56"`) because the catalog's wire
//! shape is a JSON document edited by humans. Internally every comparison of
//! magnitudes goes through cents (smallest currency unit), never floats.

use thiserror::Error;

/// Rendered price for an empty ledger.
pub const ZERO_PRICE: &str = "$0.00";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("malformed cost: {0:?}")]
    Malformed(String),

    #[error("cost out of range: {0:?}")]
    OutOfRange(String),
}

/// Parse a cost string into cents.
///
/// Accepts an optional leading `$`, thousands separators, and zero, one, or
/// two fraction digits (`"$12"`, `"12.5"`, `"1,234.56"` are all valid).
pub fn parse_cost(raw: &str) -> Result<u64, MoneyError> {
    let s = raw.trim();
    let s = s.strip_prefix('$').unwrap_or(s);
    let s: String = s.chars().filter(|c| *c != ',').collect();
    if s.is_empty() {
        return Err(MoneyError::Malformed(raw.to_string()));
    }

    let (dollars, fraction) = match s.split_once('.') {
        Some((d, f)) => (d, f),
        None => (s.as_str(), ""),
    };

    if dollars.is_empty() && fraction.is_empty() {
        return Err(MoneyError::Malformed(raw.to_string()));
    }
    if !dollars.chars().all(|c| c.is_ascii_digit()) {
        return Err(MoneyError::Malformed(raw.to_string()));
    }
    if fraction.len() > 2 || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return Err(MoneyError::Malformed(raw.to_string()));
    }

    let dollars: u64 = if dollars.is_empty() {
        0
    } else {
        dollars
            .parse()
            .map_err(|_| MoneyError::OutOfRange(raw.to_string()))?
    };

    let cents: u64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<u64>().unwrap_or(0) * 10,
        _ => fraction.parse::<u64>().unwrap_or(0),
    };

    dollars
        .checked_mul(100)
        .and_then(|d| d.checked_add(cents))
        .ok_or_else(|| MoneyError::OutOfRange(raw.to_string()))
}

/// Format cents as a display cost string (`1050` -> `"$10.50"`).
pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Normalize a cost string to the canonical `"$D.CC"` form.
///
/// The reconciliation engine compares cost strings for equality, so the
/// schema/form boundary normalizes them first (`"12"` and `"$12.00"` must
/// not read as a price change).
pub fn normalize_cost(raw: &str) -> Result<String, MoneyError> {
    parse_cost(raw).map(format_cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_prefixed_costs() {
        assert_eq!(parse_cost("$10.00").unwrap(), 1000);
        assert_eq!(parse_cost("10.00").unwrap(), 1000);
        assert_eq!(parse_cost("10").unwrap(), 1000);
        assert_eq!(parse_cost("$0.99").unwrap(), 99);
        assert_eq!(parse_cost(".99").unwrap(), 99);
    }

    #[test]
    fn parses_single_fraction_digit_as_tens_of_cents() {
        assert_eq!(parse_cost("12.5").unwrap(), 1250);
    }

    #[test]
    fn parses_thousands_separators() {
        assert_eq!(parse_cost("$1,234.56").unwrap(), 123456);
    }

    #[test]
    fn rejects_malformed_costs() {
        assert!(parse_cost("").is_err());
        assert!(parse_cost("$").is_err());
        assert!(parse_cost("abc").is_err());
        assert!(parse_cost("10.999").is_err());
        assert!(parse_cost("10.0.0").is_err());
        assert!(parse_cost("-5").is_err());
    }

    #[test]
    fn formats_cents() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(1000), "$10.00");
        assert_eq!(format_cents(123456), "$1234.56");
    }

    #[test]
    fn normalize_is_stable_across_equivalent_spellings() {
        assert_eq!(normalize_cost("12").unwrap(), "$12.00");
        assert_eq!(normalize_cost("$12.00").unwrap(), "$12.00");
        assert_eq!(normalize_cost("12.0").unwrap(), "$12.00");
    }
}
