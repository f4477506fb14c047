//! # nilbx-client
//!
//! Leptos + WASM frontend for the NILbx name-image-likeness marketplace.
//!
//! This crate contains pages, components, application state, and the
//! service gateways. All business logic (payments, compliance,
//! persistence) lives in external services consumed over HTTP; the client
//! owns only the session lifecycle and the role-gated routing built on it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
