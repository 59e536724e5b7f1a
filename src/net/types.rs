//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads (camelCase field names)
//! so serde round-trips stay lossless. A non-success envelope never carries
//! usable `data`, which is why the field is optional here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::paged::PagedRecord;

/// Response envelope wrapping every endpoint's payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Response<T> {
    /// Application status code; [`crate::net::status::OK`] means success.
    pub code: i64,
    /// Payload, present only on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// One page of a listed collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records in display order.
    pub items: Vec<T>,
    /// Size of the full collection, not just this page.
    pub total: u64,
}

/// A lost-and-found registry entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LostItem {
    /// Unique record identifier.
    pub id: i64,
    /// Name of the found item.
    pub item_name: String,
    /// Where the item was found, if recorded.
    pub location: Option<String>,
    /// Free-text description; truncated in table cells.
    pub description: String,
    /// When the item was lost, if recorded.
    pub lost_time: Option<String>,
    /// `true` once the item has been claimed.
    pub status: bool,
}

/// A phone directory entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneEntry {
    /// Unique record identifier.
    pub id: i64,
    /// Department name.
    pub dept_name: String,
    /// Contact phone number.
    pub phone: String,
}

/// Payload for creating a new phone directory entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPhoneEntry {
    /// Department name.
    pub dept_name: String,
    /// Contact phone number.
    pub phone: String,
}

/// A dormitory repair ticket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairTicket {
    /// Unique record identifier.
    pub id: i64,
    /// Item reported broken.
    pub item_name: String,
    /// Dormitory building.
    pub dorm: String,
    /// Room number.
    pub room: String,
    /// Submission timestamp (ISO 8601), if recorded.
    pub created_at: Option<String>,
    /// `true` once the repair is done.
    pub status: bool,
}

/// A reservation request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Unique record identifier.
    pub id: i64,
    /// Reservation category.
    #[serde(rename = "type")]
    pub kind: String,
    /// Requesting student's name.
    pub stu_name: String,
    /// Requesting student's department.
    pub sdept: String,
    /// Free-text request body; truncated in table cells.
    pub content: String,
    /// `true` once the request has been processed.
    pub status: bool,
}

/// Same-day usage counters for the overview screen.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DayUsage {
    /// Users active today.
    pub users: u64,
    /// Unanswered messages.
    pub messages: u64,
    /// Open repair tickets.
    pub repairs: u64,
    /// Unprocessed reservations.
    pub reservations: u64,
}

/// One day of the month-usage series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthUsage {
    /// Day the sample was taken (ISO 8601).
    pub created_at: String,
    /// Active-user count for that day.
    pub user_count: u64,
}

impl PagedRecord for LostItem {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl PagedRecord for PhoneEntry {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl PagedRecord for RepairTicket {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl PagedRecord for Reservation {
    fn record_id(&self) -> i64 {
        self.id
    }
}
