//! SKINCARE storefront UI.
//!
//! Client-side Leptos views over a single [`glow_core::Storefront`]:
//! - Landing page with hero, about, catalog, reviews and newsletter
//! - Gift sets, about, reviews and contact pages
//! - Category tabs and header search
//! - Slide-out cart with simulated checkout
//! - Login / sign-up modal

mod app;
mod components;
pub mod content;

pub use app::App;

/// Browser entry point. Built with trunk (`index.html`) and the `csr` feature;
/// the stylesheet is linked there.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
