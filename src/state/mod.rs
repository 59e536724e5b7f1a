//! Screen-local state modules.
//!
//! ARCHITECTURE
//! ============
//! `paged` is the list controller shared by every table screen, `overlay`
//! is the detail/editor modal state machine, and `toast` is the transient
//! notification queue. All of it is plain data wrapped in Leptos signals by
//! the pages; nothing here touches the network or the DOM.

pub mod overlay;
pub mod paged;
pub mod toast;
