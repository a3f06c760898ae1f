//! Party Rental Widget Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod logging;
mod store;

use app::App;
use config::WidgetConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = WidgetConfig::from_document();
    logging::init(config.level_filter());
    log::info!("Loading rental items from {}", config.items_url);

    mount_to_body(move || view! { <App config=config /> });
}
