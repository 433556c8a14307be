mod app;
mod components;
mod config;
mod core;
mod features;
mod models;
mod pages;

use leptos::prelude::*;

use app::App;
use config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_document();
    if let Err(err) = console_log::init_with_level(config.log_level) {
        web_sys::console::error_1(&format!("logger already installed: {err}").into());
    }
    log::info!("starting {} against '{}'", config.app_name, config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
