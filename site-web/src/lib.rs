//! Lotus Brothers web frontend.
//!
//! Client-side rendered Leptos app: the marketing site (home, projects,
//! about, contact) plus the crypto investment portal. No backend of its own;
//! content comes from an external entity store and chain interaction goes
//! through the browser's injected wallet provider.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod invest;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn start() {
    // Panic hook first so mount failures show up in the console.
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("lotus brothers site starting");

    remove_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Remove the static splash from index.html once the WASM bundle is live.
fn remove_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = document.get_element_by_id("site-loading") {
        el.remove();
    } else {
        log::warn!("loading splash element not found");
    }
}
