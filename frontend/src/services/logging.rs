use gloo::console;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// `log` backend that writes to the browser console.
///
/// Components log through the `*_with_component` helpers so the console
/// line carries the component name as its target.
pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    /// Install as the global logger. Only the first call has any effect.
    pub fn init(level: LevelFilter) {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }

    pub fn debug_with_component(component: &str, message: &str) {
        log::debug!(target: component, "{}", message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        log::info!(target: component, "{}", message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        log::warn!(target: component, "{}", message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        log::error!(target: component, "{}", message);
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            Level::Error => console::error!(line),
            Level::Warn => console::warn!(line),
            Level::Info => console::info!(line),
            Level::Debug | Level::Trace => console::debug!(line),
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_logger_installs_and_writes() {
        Logger::init(LevelFilter::Debug);
        // A second install must not panic or reset the level
        Logger::init(LevelFilter::Error);

        assert_eq!(log::max_level(), LevelFilter::Debug);
        Logger::info_with_component("logging-test", "console logger is live");
        Logger::debug_with_component("logging-test", "debug records pass the filter");
    }
}
