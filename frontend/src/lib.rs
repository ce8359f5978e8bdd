//! WASM entry point of the storefront.
//!
//! Hydrates the server-rendered page so the inquiry form becomes interactive,
//! and routes `log` output and panics to the browser console.

/// Level applied to `log` records forwarded to the browser console.
const CONSOLE_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Info
};

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the Leptos application on the client.
pub fn hydrate() {
    _ = console_log::init_with_level(CONSOLE_LEVEL);
    console_error_panic_hook::set_once();

    log::debug!("Hydrating storefront");
    leptos::mount::hydrate_body(app::component);
}
