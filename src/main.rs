//! Stockboard Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::load();
    logger::init(config.log_level);
    log::info!("[APP] starting, API at {}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
