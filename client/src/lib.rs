//! # portal-client
//!
//! Leptos + WASM frontend for the civic portal. Gates admin and role-portal
//! routes on the session snapshot published by an external identity provider.
//!
//! The guards are a UX layer: they decide what the browser renders, not what
//! the backend serves.

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
