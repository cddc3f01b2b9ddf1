//! # fitness-client
//!
//! Leptos + WASM frontend for the fitness tracker. The interesting part is
//! the navigation gating: routes carry access requirements ([`routes`]), a
//! session oracle answers the live superuser question ([`session`]), and the
//! gate maps the two onto allow/redirect decisions ([`gate`]) applied by the
//! guard components in [`components::guard`].

pub mod app;
pub mod components;
pub mod config;
pub mod gate;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
