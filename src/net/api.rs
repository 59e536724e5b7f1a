//! REST API helpers for the campus services backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call collapses to `Result<T, String>`: transport failures, non-OK
//! HTTP statuses, and application-level rejections (envelope `code` other
//! than [`crate::net::status::OK`]) all become a message string. Callers surface it as
//! a toast and keep their previous state; nothing escalates further.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::status;
use super::types::{DayUsage, MonthUsage, NewPhoneEntry, Page, PhoneEntry, RepairTicket, Reservation};

/// Lost-and-found collection resource.
pub const LOST_AND_FOUND: &str = "/api/lost-and-found";
/// Phone directory collection resource.
pub const PHONEBOOK: &str = "/api/phonebook";
/// Dormitory repair ticket collection resource.
pub const REPAIRS: &str = "/api/repairs";
/// Reservation request collection resource.
pub const RESERVATIONS: &str = "/api/reservations";

#[cfg(any(test, feature = "hydrate"))]
fn list_endpoint(resource: &str, offset: u64, limit: u64) -> String {
    format!("{resource}?offset={offset}&limit={limit}")
}

#[cfg(any(test, feature = "hydrate"))]
fn record_endpoint(resource: &str, id: i64) -> String {
    format!("{resource}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn http_failed_message(http_status: u16) -> String {
    format!("request failed: {http_status}")
}

/// Unwrap the `{code, data}` envelope from a response body.
#[cfg(feature = "hydrate")]
async fn decode<T>(resp: gloo_net::http::Response) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    if !resp.ok() {
        return Err(http_failed_message(resp.status()));
    }
    let body: super::types::Response<T> = resp.json().await.map_err(|e| e.to_string())?;
    if body.code != status::OK {
        return Err(status::message_for(body.code).to_owned());
    }
    body.data.ok_or_else(|| "missing response data".to_owned())
}

/// Fetch one page of `resource` as `GET {resource}?offset=..&limit=..`.
///
/// # Errors
///
/// Returns the human-readable failure message when the request or the
/// application status code fails.
pub async fn fetch_page<T>(resource: &str, offset: u64, limit: u64) -> Result<Page<T>, String>
where
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let url = list_endpoint(resource, offset, limit);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (resource, offset, limit);
        Err("not available on server".to_owned())
    }
}

/// Delete one record as `DELETE {resource}/{id}`.
///
/// # Errors
///
/// Returns the failure message when the request or status code fails.
pub async fn delete_by_id(resource: &str, id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = record_endpoint(resource, id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(http_failed_message(resp.status()));
        }
        let body: super::types::Response<serde_json::Value> = resp.json().await.map_err(|e| e.to_string())?;
        if body.code != status::OK {
            return Err(status::message_for(body.code).to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (resource, id);
        Err("not available on server".to_owned())
    }
}

/// Create a phone directory entry as `POST /api/phonebook`, returning the
/// persisted record.
///
/// # Errors
///
/// Returns the failure message when the request or status code fails.
pub async fn create_phone_entry(entry: &NewPhoneEntry) -> Result<PhoneEntry, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(PHONEBOOK)
            .json(entry)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = entry;
        Err("not available on server".to_owned())
    }
}

/// Update a repair ticket as `PUT /api/repairs/{id}`, returning the
/// persisted record.
///
/// # Errors
///
/// Returns the failure message when the request or status code fails.
pub async fn update_repair(ticket: &RepairTicket) -> Result<RepairTicket, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = record_endpoint(REPAIRS, ticket.id);
        let resp = gloo_net::http::Request::put(&url)
            .json(ticket)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ticket;
        Err("not available on server".to_owned())
    }
}

/// Update a reservation as `PUT /api/reservations/{id}`, returning the
/// persisted record.
///
/// # Errors
///
/// Returns the failure message when the request or status code fails.
pub async fn update_reservation(reservation: &Reservation) -> Result<Reservation, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = record_endpoint(RESERVATIONS, reservation.id);
        let resp = gloo_net::http::Request::put(&url)
            .json(reservation)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = reservation;
        Err("not available on server".to_owned())
    }
}

/// Fetch today's usage counters from `GET /api/usage/day`.
///
/// # Errors
///
/// Returns the failure message when the request or status code fails.
pub async fn fetch_day_usage() -> Result<DayUsage, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/usage/day")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the trailing-month usage series from `GET /api/usage/month`.
///
/// # Errors
///
/// Returns the failure message when the request or status code fails.
pub async fn fetch_month_usage() -> Result<Vec<MonthUsage>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/usage/month")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
