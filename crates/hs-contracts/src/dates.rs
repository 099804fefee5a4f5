//! Strict ISO date parsing

use std::sync::LazyLock;

use chrono::NaiveDate;
use hs_core::types::ISO_DATE_FORMAT;
use regex::Regex;

/// Exactly `YYYY-MM-DD`; chrono alone would accept `2024-1-5`
static ISO_DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Parse a calendar date in strict `YYYY-MM-DD` form
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if !ISO_DATE_PATTERN.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).ok()
}

pub const INVALID_DATE_MESSAGE: &str = "must be a valid date in YYYY-MM-DD format";
