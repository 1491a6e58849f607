//! Field normalization helpers: lenient due-date parsing and phone cleanup.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Timestamp formats accepted before trying a bare date.
/// Tried in order; a format only matches if it consumes the whole string.
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a due-date field into a calendar date, as leniently as possible.
///
/// Accepts, in order: timestamp with seconds, timestamp without seconds,
/// bare date, and timezone-qualified ISO 8601. If none match the full
/// string, falls back to parsing the leading whitespace-delimited token
/// as a bare date. Time of day and offset are discarded; only the
/// calendar date survives.
pub fn parse_due_date(value: Option<&str>) -> Option<NaiveDate> {
    let raw = value?.trim();
    if raw.is_empty() {
        return None;
    }

    for fmt in TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%:z") {
        return Some(dt.date_naive());
    }

    // Forgiving fallback: a recognizable date followed by arbitrary text,
    // e.g. "2024-03-20 sometime in the morning".
    let leading = raw.split_whitespace().next()?;
    NaiveDate::parse_from_str(leading, "%Y-%m-%d").ok()
}

/// Trim a phone field. The literal text "null" leaks out of sloppy
/// upstream serializers and means "no phone".
pub fn sanitize_phone(phone: &str) -> String {
    let trimmed = phone.trim();
    if trimmed == "null" {
        String::new()
    } else {
        trimmed.to_string()
    }
}
