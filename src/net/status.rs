//! Application status-code convention shared with the backend.
//!
//! Every response envelope carries a `code`; exactly one value means
//! success. Non-success codes map to fixed human-readable messages, and
//! unknown codes collapse to a generic failure message.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// The single success code used by every endpoint.
pub const OK: i64 = 10_000;

/// Outcome message shown when a list fetch fails.
pub const FETCH_FAILED: &str = "Failed to fetch data";
/// Outcome message shown when a delete is rejected.
pub const DELETE_FAILED: &str = "Delete failed";
/// Outcome message shown after a successful delete.
pub const DELETE_OK: &str = "Deleted";
/// Outcome message shown when a create/update is rejected.
pub const SAVE_FAILED: &str = "Save failed";
/// Outcome message shown after a successful create/update.
pub const SAVE_OK: &str = "Saved";

/// Resolve an application status code to its fixed message.
#[must_use]
pub fn message_for(code: i64) -> &'static str {
    match code {
        OK => "OK",
        40_000 => "Bad request",
        40_100 => "Not authorized",
        40_400 => "Not found",
        50_000 => "Server error",
        _ => "Request failed",
    }
}
