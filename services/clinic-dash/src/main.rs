// services/clinic-dash/src/main.rs
//
// Hospital CMS Dashboard - browser entry point
//

mod app;
mod browser;
mod components;
mod pages;
mod state;

use leptos::*;

fn main() {
    // Better panic messages in browser console
    console_error_panic_hook::set_once();

    // Initialize logging
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Hospital CMS dashboard starting...");

    // Mount Leptos app
    mount_to_body(|| {
        view! { <app::App /> }
    });
}
