//! Hacker Stories Frontend Entry Point

use hacker_stories::app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = console_logger::level_from(option_env!("APP_LOG_LEVEL"));
    if let Err(e) = console_logger::init_logger("HackerStories", level) {
        web_sys::console::warn_1(&format!("Logger unavailable: {}", e).into());
    }
    mount_to_body(App);
}
