//! # contact-form
//!
//! Leptos + WASM contact form with inline validation.
//!
//! The `form` module is the framework-free model (fields, validation schema,
//! submit/change transitions). `components` and `pages` render it, `app`
//! wires routing, and `routes` (feature `ssr`) serves it through Axum.

pub mod app;
pub mod components;
pub mod config;
pub mod form;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod routes;

/// WASM entry point: hydrates the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
