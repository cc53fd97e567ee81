//! # balanza
//!
//! Leptos + WASM frontend for the CITIKOLD inventory and billing backend.
//! Pages cover session management, client and product catalogs, stock
//! intake, kardex spreadsheet reports, and invoicing.
//!
//! All HTTP traffic goes through the single request core in [`net::api`],
//! and every response is interpreted through the `envelope` crate's wire
//! model. Browser-only behavior (localStorage, downloads, aborts) lives in
//! [`util`] behind the `hydrate` feature with native no-op fallbacks.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
