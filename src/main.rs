//! Lost & Found Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod dialog;
mod logger;
mod store;
mod upload;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, problem) = config::load();
    logger::init(config.log_level());
    if let Some(problem) = problem {
        log::warn!("using default configuration: {}", problem);
    }

    mount_to_body(move || view! { <App config=config /> });
}
