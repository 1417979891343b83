//! # cv-site
//!
//! Leptos + WASM frontend for a personal CV page.
//!
//! This crate contains the page, its components, UI state, the profile
//! document types and fetch helper, and the browser glue for theme
//! persistence and smooth-scroll navigation. Browser-only code sits behind
//! the `csr` feature so the rendering logic stays testable natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then
/// mounts the application into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
