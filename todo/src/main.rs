//! Todo Frontend Entry Point

use leptos::prelude::*;
use todo_app::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let level = console_logger::level_from(option_env!("APP_LOG_LEVEL"));
    if let Err(e) = console_logger::init_logger("TodoApp", level) {
        web_sys::console::warn_1(&format!("Logger unavailable: {}", e).into());
    }
    mount_to_body(App);
}
