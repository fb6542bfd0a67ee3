//! Alpha Clothing storefront shell.
//!
//! The presentational surface of the storefront: a page shell that emits
//! document metadata (SEO tags plus the `ClothingStore` structured-data
//! block), and a sticky right-to-left header with scroll-aware styling
//! and an animated mobile flyout menu. All domain logic lives in
//! `alpha-core`; this crate is the Leptos rendering of it.

pub mod app;
pub mod components;
pub mod dom;
pub mod error;
pub mod pages;

#[cfg(all(feature = "ssr", target_arch = "wasm32"))]
mod server;

pub use app::App;
pub use error::DomError;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
