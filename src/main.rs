//! Mission Control Dashboard Entry Point

mod app;
mod components;
mod context;
mod form;
mod logging;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init_from_build_env();
    mount_to_body(App);
}
