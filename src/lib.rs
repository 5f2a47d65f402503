//! # utalii-web
//!
//! Leptos + WASM frontend for the Viva Utalii tourism booking site.
//! Replaces the hand-rolled `auth.js` / `plan.js` scripts with a
//! Rust-native client: session lifecycle, auth-aware navigation UI,
//! and the trip-cost estimator.
//!
//! This crate contains pages, components, session state and storage,
//! the backend auth API client, and the pricing estimator.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod pricing;
pub mod state;
pub mod util;

/// WASM entry point: set up panic reporting and logging, then hydrate.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
