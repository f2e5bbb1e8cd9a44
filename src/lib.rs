//! # retyrment-client
//!
//! Leptos + WASM frontend for the Retyrment personal-finance and
//! retirement-planning application. Replaces the React + legacy
//! multi-page frontend with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, network
//! types, and the REST API client. The structured core is the session
//! store (`state::session`), the route guard
//! (`components::protected_route`), and the toast notification queue
//! (`state::toasts`); pages are thin orchestration over those plus the
//! backend API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
