//! Order Form Frontend Entry Point

mod models;
mod error;
mod config;
mod commands;
mod cascade;
mod toggle;
mod submission;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
