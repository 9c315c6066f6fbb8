//! # client
//!
//! Leptos + WASM front end for the MedInsight portal.
//!
//! Pages are grouped by role area (patient, médecin, admin, gestionnaire,
//! security). Shared behavior that does not need a browser (session
//! decoding, the route guard, the booking wizard, validation) lives in the
//! `portal` crate; this crate wires it to signals, the router and HTTP.

#![recursion_limit = "512"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
