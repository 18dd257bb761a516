//! Display formatting for service timestamps.
//!
//! The service reports check-in times as ISO 8601 strings with a
//! seven-digit fractional second, with or without a UTC offset. A missing
//! timestamp formats as the epoch rather than erroring; an unparsable one
//! falls back to the raw string so a cosmetic field can never fail an
//! account.

use chrono::{DateTime, NaiveDateTime};

const EPOCH: &str = "1970-01-01 00:00:00";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a raw service timestamp for display.
pub fn format_sign_time(raw: Option<&str>) -> String {
    let raw = match raw {
        None => return EPOCH.to_string(),
        Some(s) if s.is_empty() => return EPOCH.to_string(),
        Some(s) => s,
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }

    // Offset-less variant, e.g. "2024-01-01T12:00:00.0000000"
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY_FORMAT).to_string();
    }

    raw.to_string()
}
