/// Game Wishlist - free-to-play catalog and wishlist front end
/// Built with Rust + WASM + Yew

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod game_data;
pub mod notify;
pub mod store;
pub mod ui;

use wasm_bindgen::prelude::*;

use crate::config::AppConfig;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the store classifier for JavaScript access
#[wasm_bindgen]
pub fn classify_store(url: &str) -> String {
    store::classify(url).to_string()
}

// Start the Yew app with the build-time configuration
#[wasm_bindgen]
pub fn start_app() -> Result<(), JsValue> {
    start_app_with_config(JsValue::UNDEFINED)
}

// Start the Yew app with a config object from the host page, e.g. `{ apiBaseUrl: "..." }`
#[wasm_bindgen]
pub fn start_app_with_config(config: JsValue) -> Result<(), JsValue> {
    let config = AppConfig::from_js(config).map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        JsValue::from_str(&e.to_string())
    })?;

    log::info!("Starting Game Wishlist against {}", config.api_base_url);
    yew::Renderer::<ui::app::App>::with_props(ui::app::AppProps { config }).render();
    Ok(())
}
