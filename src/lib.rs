#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod choreography;
pub mod contact;
pub mod content;
pub mod loader;
pub mod motion;
pub mod nav;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    leptos::mount::hydrate_body(App);
}
