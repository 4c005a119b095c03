/// Website Board - submit websites and browse them by category
/// Built with Rust + WASM + Yew

pub mod api;
pub mod config;
pub mod error;
pub mod flow;
pub mod operations;
pub mod validator;
pub mod website_data;
pub mod ui;

use api::Endpoints;
use config::WidgetConfig;
use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the validator for JavaScript access
#[wasm_bindgen]
pub fn is_valid_url(candidate: &str) -> bool {
    validator::is_valid_url(candidate)
}

/// Mount the website board.
///
/// `config` is a plain JS object with camelCase fields; `undefined` uses the defaults.
#[wasm_bindgen]
pub fn start_widget(config: JsValue) -> Result<(), JsValue> {
    let config = WidgetConfig::from_js_value(config)?;
    let endpoints = Endpoints::new(&config.base_url)?;

    log::info!(
        "Starting website board against {} ({:?} filter)",
        endpoints.base(),
        config.category_filter_mode
    );

    yew::Renderer::<ui::WebsiteBoard>::with_props(ui::WebsiteBoardProps { config, endpoints })
        .render();
    Ok(())
}
