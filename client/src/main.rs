//! Browser entry point: install the panic hook and logger, mount the app.

use client::app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    _ = console_log::init_with_level(level);

    leptos::mount::mount_to_body(|| view! { <App/> });
}
