//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the shared wire schema,
//! and `status` holds the backend's application status-code convention.

pub mod api;
pub mod status;
pub mod types;
