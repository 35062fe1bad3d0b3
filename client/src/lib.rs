//! # client
//!
//! Leptos + WASM frontend for the Inkpost content-management app.
//!
//! This crate contains the pages, route guards, session and list state, and
//! the HTTP layer that talks to the remote CMS API. The `ssr` feature lets
//! the host server render the same components; `hydrate` builds the browser
//! bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
