//! # client
//!
//! Leptos + WASM frontend for the Espace Agenda site and its admin panel.
//!
//! The only stateful piece is the admin session (`state::session`), which
//! decides whether the admin routes may render. Pages, the route guard, and
//! the small REST client for the content backend sit around it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
