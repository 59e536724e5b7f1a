//! Date formatting for backend timestamps.
//!
//! The backend sends ISO 8601 strings; the tables and the usage chart only
//! show the calendar day, rendered without zero padding (`2024-3-5`).

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

/// Format an ISO 8601 timestamp as `year-month-day` without zero padding.
/// Inputs that do not look like a date are returned unchanged.
#[must_use]
pub fn format_ymd(timestamp: &str) -> String {
    let date_part = timestamp.split(['T', ' ']).next().unwrap_or(timestamp);
    let mut parts = date_part.splitn(3, '-');
    let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
        return timestamp.to_owned();
    };
    let (Ok(y), Ok(m), Ok(d)) = (y.parse::<u32>(), m.parse::<u32>(), d.parse::<u32>()) else {
        return timestamp.to_owned();
    };
    format!("{y}-{m}-{d}")
}

/// Format an optional timestamp, rendering absent values as an empty cell.
#[must_use]
pub fn format_ymd_opt(timestamp: Option<&str>) -> String {
    timestamp.map(format_ymd).unwrap_or_default()
}
