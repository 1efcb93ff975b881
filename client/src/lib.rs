//! # client
//!
//! Leptos + WASM frontend for the LUAS PETS clinic site.
//!
//! This crate owns the browser session (who is logged in, persisted to
//! `localStorage`), the role-gated route guard, the REST request layer, and
//! the auth pages. It is server-rendered by the root `luaspets` host and
//! hydrated in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
