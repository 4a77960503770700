#![allow(warnings)]
//! Food Dashboard Frontend Entry Point

mod api;
mod app;
mod collection;
mod components;
mod config;
mod context;
mod dashboard;
mod logging;
mod models;
mod store;
mod sync;

#[cfg(test)]
mod testing;

use app::App;
use config::DashboardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = DashboardConfig::from_build_env();
    logging::init_logging(config.log_level);
    log::info!("Starting FoodDashboard against {}", config.api_url);

    mount_to_body(move || view! { <App config=config /> });
}
