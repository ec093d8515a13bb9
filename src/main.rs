//! Article Admin Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;
mod list;
mod store;
mod views;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
