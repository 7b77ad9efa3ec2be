//! Fixed-pattern date strings for CSV export
//!
//! Patterns are locale-invariant: ASCII digits, `-`, `/`, `:` and a single
//! space, regardless of the host locale.

use super::fields::{decompose, recompose};
use crate::error::{CalendarError, Result};
use crate::types::{CalendarFields, Instant};
use crate::zone::TimeZoneId;
use chrono::{Datelike, NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use regex_lite::Regex;

/// `yyyy-MM-dd HH:mm`
pub const CSV_PATTERN: &str = "%Y-%m-%d %H:%M";

static CSV_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}$").expect("valid CSV date regex"));

/// `instant` as `yyyy-MM-dd HH:mm` on the wall clock of `zone`.
pub fn encode(instant: Instant, zone: TimeZoneId) -> String {
    let f = decompose(instant, zone);
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        f.year, f.month, f.day, f.hour, f.minute
    )
}

/// `instant` as `yyyy/MM/dd` on the wall clock of `zone`. Encode only.
pub fn encode_simple(instant: Instant, zone: TimeZoneId) -> String {
    let f = decompose(instant, zone);
    format!("{:04}/{:02}/{:02}", f.year, f.month, f.day)
}

/// Parses `yyyy-MM-dd HH:mm` as a wall-clock reading in `zone`.
///
/// Strict: exactly four year digits and two digits for every other field,
/// no surrounding whitespace, and no calendar rollover. `2025-02-30 10:00`
/// is rejected here even though recomposing those fields would roll into
/// March.
pub fn decode(text: &str, zone: TimeZoneId) -> Result<Instant> {
    if !CSV_SHAPE.is_match(text) {
        return Err(CalendarError::parse(text, "expected yyyy-MM-dd HH:mm"));
    }

    let local = NaiveDateTime::parse_from_str(text, CSV_PATTERN)
        .map_err(|e| CalendarError::parse(text, e.to_string()))?;

    let fields = CalendarFields::date(local.year(), local.month(), local.day())
        .with_time(local.hour(), local.minute(), 0, 0);
    Ok(recompose(fields, zone))
}
