//! Normalization of heterogeneous date representations.
//!
//! Stored documents mix timestamp records, RFC3339 strings, date-only text
//! and epoch milliseconds. Every computation in the engine goes through
//! [`normalize`] first and treats an unparseable date as "exclude this
//! record", never as epoch zero.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use super::temporal_model::DateLike;

/// Normalizes any supported date representation to a UTC instant.
///
/// Returns `None` when the value cannot denote a real instant (malformed
/// text, out-of-range epoch). Total and panic-free; the caller decides how
/// to skip the record.
pub fn normalize(value: &DateLike) -> Option<DateTime<Utc>> {
    match value {
        DateLike::Epoch {
            seconds,
            nanoseconds,
        } => DateTime::from_timestamp(*seconds, *nanoseconds),
        DateLike::Instant(dt) => Some(*dt),
        DateLike::Text(s) => parse_text(s),
        DateLike::Millis(ms) => DateTime::from_timestamp_millis(*ms),
    }
}

/// Normalizes to a calendar day in UTC.
pub fn normalized_day(value: &DateLike) -> Option<NaiveDate> {
    normalize(value).map(|dt| dt.date_naive())
}

/// The last representable millisecond of a calendar day, in UTC.
pub fn end_of_day(day: NaiveDate) -> DateTime<Utc> {
    let eod = day.and_hms_milli_opt(23, 59, 59, 999).unwrap_or_default();
    Utc.from_utc_datetime(&eod)
}

fn parse_text(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    // First try parsing as RFC3339/ISO8601
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // Then as a date-time without offset, read as UTC
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&dt));
    }

    // Then try as date-only format; midnight UTC for date-only values
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap_or_default()));
    }

    None
}
