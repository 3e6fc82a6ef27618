//! # client
//!
//! Leptos frontend for the clubhouse admin and club areas.
//!
//! Each area is framed by a layout shell: a fixed sidebar on the left and a
//! padded content region on the right that the router fills with the active
//! nested page. The server crate renders this app via SSR; the `hydrate`
//! feature builds the WASM bundle that takes over in the browser.

pub mod app;
pub mod components;
pub mod layout;
pub mod pages;
pub mod paths;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating clubhouse client");
    leptos::mount::hydrate_body(app::App);
}
