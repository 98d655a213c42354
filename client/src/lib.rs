//! # thirdeye-ui
//!
//! Leptos + WASM frontend for the ThirdEye anomaly detection console.
//!
//! This crate contains the auth-gated route layer (`routers`), its pages and
//! chrome components, shared application state, and the auth API client. The
//! server crate renders `app::shell` for SSR and the browser hydrates through
//! `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routers;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
