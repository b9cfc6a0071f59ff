use chrono::{DateTime, NaiveDate, Utc};

use crate::{Error, Result};

pub const MIN_WINDOW_DAYS: u32 = 1;
pub const MAX_WINDOW_DAYS: u32 = 14;

/// Window used by the plain menu listing when `days` is missing or invalid.
pub const DEFAULT_MENU_DAYS: u32 = 5;

/// Window used by the admin overview and dashboard when `days` is missing or invalid.
pub const DEFAULT_OVERVIEW_DAYS: u32 = 7;

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Checks that a window length lies within `[MIN_WINDOW_DAYS, MAX_WINDOW_DAYS]`.
pub fn validate_window(days: u32) -> Result<u32> {
    if !(MIN_WINDOW_DAYS..=MAX_WINDOW_DAYS).contains(&days) {
        crate::invalid!(
            "days",
            "must be between {} and {}, got {}",
            MIN_WINDOW_DAYS,
            MAX_WINDOW_DAYS,
            days
        );
    }

    Ok(days)
}

/// Resolves a raw `days` query value, substituting `default` whenever the
/// value is missing, not an integer or out of range.
pub fn resolve_window(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .and_then(|days| validate_window(days).ok())
        .unwrap_or(default)
}

/// `days` consecutive calendar dates starting at `start`.
pub fn window_dates(start: NaiveDate, days: u32) -> Vec<NaiveDate> {
    start.iter_days().take(days as usize).collect()
}

/// Parses a calendar date. Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp,
/// in which case only the UTC calendar date is kept.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| Error::invalid("date", format!("'{raw}' is not an ISO calendar date")))
}
