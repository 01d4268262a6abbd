//! # fintrack-web
//!
//! Leptos + WASM frontend for the personal finance tracker.
//!
//! This crate contains the session store and route guard, the REST
//! credential client, pages, and the root `App`. Durable data lives behind
//! the finance REST API; the client only persists the sign-in session.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = config::ClientConfig::from_build_env();
    let _ = console_log::init_with_level(config.log_level);
    log::debug!("api base url: {}", config.api_base_url);
    leptos::mount::mount_to_body(app::App);
}
