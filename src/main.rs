//! Form Builder Frontend Entry Point

mod models;
mod config;
mod api;
mod state;
mod routes;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    // A second init only fails if a logger is already installed
    let _ = console_log::init_with_level(config.log_level);
    log::info!("[APP] Starting with API base {}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
