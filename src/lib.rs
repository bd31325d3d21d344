//! Persisted light/dark theme toggle for the browser.
//!
//! This crate is compiled to WebAssembly and runs in the page. On load it
//! reads the stored theme preference and applies it to the `<html>` element;
//! each activation of the toggle control flips the theme and writes the new
//! preference back. Storage is best-effort: a browser that refuses
//! `localStorage` still gets a working toggle for the current page view.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | [`theme::Theme`] value and its stored-string vocabulary |
//! | [`config`] | Storage key, marker class, and control label |
//! | [`store`] | Preference store port and in-memory implementation |
//! | [`surface`] | Visual-state port and in-memory implementation |
//! | [`toggle`] | The [`toggle::PreferenceToggle`] component and host seam |
//! | [`component`] | Leptos `ThemeToggle` control |
//! | `web` | Browser adapters and DOM wiring (`hydrate` only) |

pub mod component;
pub mod config;
pub mod store;
pub mod surface;
pub mod theme;
pub mod toggle;
#[cfg(feature = "hydrate")]
pub mod web;

/// Module entry point for pages that load the script directly.
///
/// # Errors
///
/// Returns a JS error when there is no document to install into.
#[cfg(feature = "standalone")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    web::install()
}
