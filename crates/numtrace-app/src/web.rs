//! WebAssembly entry point.

use wasm_bindgen::prelude::*;

/// Initialize and run the WASM application.
#[wasm_bindgen(start)]
pub async fn run_wasm() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Failed to initialize logger: {}", e).into());
    }

    log::info!("Starting NumTrace (WASM)");

    crate::App::run().await;
}
