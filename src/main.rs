//! Portfolio Widgets Frontend Entry Point

mod app;
mod binding;
mod components;
mod config;
mod content;
mod context;
mod logging;
mod models;
mod router;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
