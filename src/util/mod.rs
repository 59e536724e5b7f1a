//! Pure display helpers shared by table columns and detail views.

pub mod date;
pub mod text;
