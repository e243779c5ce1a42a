//! # client
//!
//! Leptos + WASM frontend for the admin console.
//!
//! This crate contains pages, the sidebar component, client state (sidebar
//! navigation and session status), REST helpers, and the runtime config
//! shared with the server. The `server` crate renders it with SSR; the
//! `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
