//! Registration date normalization.
//!
//! The registry records dates as free text such as `23 Desember 2021`.
//! This module turns that text into an ISO 8601 calendar date string.
//! Only the day is padded; the day is not range-checked and the year is
//! copied verbatim, so `35 Januari 2021` becomes `2021-01-35`.

use chrono::NaiveDate;
use serde_json::Value;
use tracing::trace;

use fincheck_model::{RawRecord, RegistryField};

/// Indonesian month names and their two-digit month numbers.
pub const MONTHS_ID: [(&str, &str); 12] = [
    ("januari", "01"),
    ("februari", "02"),
    ("maret", "03"),
    ("april", "04"),
    ("mei", "05"),
    ("juni", "06"),
    ("juli", "07"),
    ("agustus", "08"),
    ("september", "09"),
    ("oktober", "10"),
    ("november", "11"),
    ("desember", "12"),
];

/// Two-digit month number for a lowercase Indonesian month name.
pub fn month_number(name: &str) -> Option<&'static str> {
    MONTHS_ID
        .iter()
        .find(|(month, _)| *month == name)
        .map(|(_, number)| *number)
}

/// Parse `<day> <month-name> <year>` into `YYYY-MM-DD`.
///
/// Commas are dropped, matching is case-insensitive, and tokens may be
/// separated by any whitespace. Tokens after the year are ignored.
/// Returns `None` for empty input, fewer than three tokens, or an unknown
/// month name.
pub fn parse_indonesian_date(text: &str) -> Option<String> {
    let cleaned = text.replace(',', "").to_lowercase();
    let mut tokens = cleaned.split_whitespace();
    let (Some(day), Some(month), Some(year)) = (tokens.next(), tokens.next(), tokens.next())
    else {
        trace!(tokens = cleaned.split_whitespace().count(), "date has too few tokens");
        return None;
    };
    let Some(month) = month_number(month) else {
        trace!(month, "unknown month name");
        return None;
    };
    Some(format!("{year}-{month}-{day:0>2}"))
}

/// Normalize the registration date of a raw registry entry.
///
/// Only text values are parsed; numbers, null and missing fields give `None`.
pub fn normalize_registration_date(entry: &RawRecord) -> Option<String> {
    entry
        .get(RegistryField::RegistrationDate.key())
        .and_then(Value::as_str)
        .and_then(parse_indonesian_date)
}

/// Read a normalized `YYYY-MM-DD` string as a real calendar date.
///
/// Out-of-range days kept by [`parse_indonesian_date`] fail here.
pub fn to_calendar_date(iso: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok()
}
