//! Virtual List Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod list;
mod models;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!("[APP] backend: {}", config.backend_url);

    mount_to_body(move || view! { <App config=config /> });
}
