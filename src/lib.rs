//! Kursy Online web frontend
//!
//! Login and course creation forms for the Kursy Online learning platform,
//! built with Leptos and WebAssembly. Form state, request construction and the
//! submission state machine live in [`core`]; [`ui`] binds them to the DOM.

#![recursion_limit = "256"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
