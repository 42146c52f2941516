//! # dayboard-client
//!
//! Leptos + WASM frontend for the mood dayboard.
//!
//! The user types or picks a one-word mood, the app posts it to `/dayboard`,
//! and the returned coffee / songs / outfits / images bundle is rendered with
//! an accent color derived from the mood word. The same component tree is
//! server-rendered by the `dayboard-server` host (`ssr` feature) and hydrated
//! in the browser (`hydrate` feature).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("dayboard client hydrating");
    leptos::mount::hydrate_body(app::App);
}
