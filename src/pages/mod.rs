//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. `listing` holds the fetch/delete wiring shared by the
//! four table screens.

pub(crate) mod listing;
pub mod lost_and_found;
pub mod overview;
pub mod phonebook;
pub mod repairs;
pub mod reservations;
