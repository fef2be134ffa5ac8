#![allow(warnings)]
//! StackView Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod error;
mod format;
mod models;
mod store;

use app::App;
use config::ApiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = ApiConfig::from_window();
    mount_to_body(move || view! { <App config=config /> });
}
