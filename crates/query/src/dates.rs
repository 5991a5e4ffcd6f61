//! The one canonical date comparison.
//!
//! A screening belongs to a calendar day iff its start time, truncated to
//! the day, equals that day. Timestamps are timezone-naive throughout, so
//! there is no zone normalization to disagree about; every call site uses
//! `matches_date` rather than rolling its own truncation.

use catalog::Screening;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Whether the screening starts on the given calendar day.
pub fn matches_date(screening: &Screening, date: NaiveDate) -> bool {
    screening.start_time.date() == date
}

/// Parse a `date` query parameter into a calendar day.
///
/// Accepts a full RFC 3339 timestamp, a naive datetime, or a bare date;
/// datetimes are truncated to their day, so `2024-03-10T23:59:59` selects
/// the same screenings as `2024-03-10`.
pub fn parse_query_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local().date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    None
}
