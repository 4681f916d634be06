//! Console logger - routes `log` records to the browser console
//!
//! On wasm32 every record goes through `web_sys::console`. Native hosts
//! (tests, headless drivers) install whatever logger they like; calling
//! `init_logger` there is a no-op so the engine never touches JS imports
//! off-wasm.

use log::LevelFilter;

#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Level, Log, Metadata, Record};

    pub(super) struct ConsoleLogger;

    pub(super) static LOGGER: ConsoleLogger = ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let line = format!("[{}] {}", record.target(), record.args());
            let value = wasm_bindgen::JsValue::from_str(&line);
            match record.level() {
                Level::Error => web_sys::console::error_1(&value),
                Level::Warn => web_sys::console::warn_1(&value),
                _ => web_sys::console::log_1(&value),
            }
        }

        fn flush(&self) {}
    }
}

/// Install the console logger (wasm32 only). Safe to call more than once.
#[cfg(target_arch = "wasm32")]
pub fn init_logger(level: LevelFilter) {
    if log::set_logger(&console::LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Native builds leave logger choice to the host.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logger(_level: LevelFilter) {}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_init_leaves_global_logger_alone() {
        init_logger(LevelFilter::Trace);
        assert!(log::max_level() < LevelFilter::Trace);
    }
}
