//! Todo Frontend Entry Point

mod models;
mod context;
mod store;
mod storage;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();
    tracing::info!("starting todo frontend");
    mount_to_body(App);
}
