//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared table/dialog/notification chrome; pages own
//! the per-resource wiring and pass state in via props or context.

pub mod confirm_delete;
pub mod pagination_bar;
pub mod resource_table;
pub mod stat_card;
pub mod status_badge;
pub mod toast_host;
pub mod usage_chart;
