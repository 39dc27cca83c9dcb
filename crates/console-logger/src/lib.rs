//! Console Logger
//!
//! `log` backend for browser apps. Every record becomes one line
//! `[HH:MM:SS.mmm] [LEVEL] [App] target: message` sent to the console method
//! matching its level.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

pub struct ConsoleLogger {
    app_name: &'static str,
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(app_name: &'static str, level: LevelFilter) -> Self {
        Self { app_name, level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&timestamp, self.app_name, record.level(), record.target(), &record.args().to_string());
        let line = JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug => web_sys::console::log_1(&line),
            Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend
pub fn init_logger(app_name: &'static str, level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(app_name, level)))?;
    log::set_max_level(level);
    Ok(())
}

/// Level from a build-time setting such as `option_env!("APP_LOG_LEVEL")`
///
/// Unset or unparseable values mean `Info`.
pub fn level_from(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(LevelFilter::Info)
}

fn format_line(timestamp: &str, app_name: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{}] [{}] [{}] {}: {}", timestamp, level, app_name, target, message)
}
