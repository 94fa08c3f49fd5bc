//! Tasky Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod forms;
mod logger;
mod models;
mod pages;
mod reconcile;
mod routes;
mod session;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_build_env();
    logger::init(config.log_level);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
