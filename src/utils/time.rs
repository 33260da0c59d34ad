//! Time utilities: parsing export timestamps, month keys.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a start/end datetime as found in the exports.
///
/// Accepted:
/// - RFC 3339 (`2024-01-15T09:00:00.000Z`, `2024-01-15T09:00:00-03:00`),
///   kept as the wall-clock time of its own offset
/// - `YYYY-MM-DD HH:MM[:SS[.fff]]`, with either ' ' or 'T'
/// - `YYYY-MM-DD` (midnight)
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
    {
        return Some(dt);
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Month bucket key (`YYYY-MM`) of a raw start datetime.
pub fn month_key(raw: &str) -> AppResult<String> {
    let dt = parse_datetime(raw).ok_or_else(|| AppError::Timestamp(raw.to_string()))?;
    Ok(dt.format("%Y-%m").to_string())
}
