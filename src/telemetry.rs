//! Routes [`log`] records to the browser console.

pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = format!("{}: {}", record.target(), record.args());
        match record.level() {
            Level::Error => console::error!(message),
            Level::Warn => console::warn!(message),
            Level::Info => console::info!(message),
            Level::Debug | Level::Trace => console::debug!(message),
        }
    }

    fn flush(&self) {}
}

/// Installs [`ConsoleLogger`] unless the embedding crate already set a logger.
pub fn init_global_default(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

use gloo_console as console;
use log::{Level, LevelFilter, Log, Metadata, Record};
