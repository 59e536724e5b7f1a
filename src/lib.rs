//! Campus services admin client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-rendered Leptos front end for the campus services backend. Five
//! screens (usage overview, lost-and-found, phone directory, dorm repairs,
//! reservations) share one paginated-resource-view abstraction and talk to
//! the REST API through `net`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook, wire console logging, and
/// hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
