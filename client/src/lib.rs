//! # client
//!
//! Leptos + WASM frontend for the Mergington activity signup page.
//!
//! The page lists every activity with its roster, lets a student sign up
//! for one, and lets anyone remove a participant. All behaviour sits in
//! `controller` over plain state in `state`, so it is testable without a
//! browser; `components` and `host` bind it to the DOM.

pub mod app;
pub mod components;
pub mod controller;
pub mod host;
pub mod net;
pub mod state;

/// WASM entry point: install browser logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
