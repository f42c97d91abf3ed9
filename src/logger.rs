//! Custom logging module.
//!
//! This module provides a logger that formats records and hands them to a
//! callback. The application points the callback at a [`LogBuffer`] which the
//! render loop drains into the log panel.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Arc, Mutex};

/// Records from other crates are only kept at this level or above.
///
const DEPENDENCY_LEVEL: Level = Level::Info;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {:<5} {}", timestamp, level_str, record.args())
}

/// Custom logger that forwards formatted records to a callback
///
pub struct CustomLogger {
    log_callback: Arc<Mutex<Option<Box<dyn Fn(String) + Send + Sync>>>>,
}

impl Default for CustomLogger {
    fn default() -> Self {
        CustomLogger::new()
    }
}

impl CustomLogger {
    pub fn new() -> Self {
        CustomLogger {
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_log_callback(&self, callback: Box<dyn Fn(String) + Send + Sync>) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
    }

    /// Install this logger as the global logger.
    ///
    pub fn init(self, level: LevelFilter) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
            || metadata.level() <= DEPENDENCY_LEVEL
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(callback) = self.log_callback.lock() {
                if let Some(ref cb) = *callback {
                    cb(format_log(record));
                }
            }
        }
    }

    fn flush(&self) {}
}

/// Shared queue of formatted log lines.
///
/// Records are often emitted while the state lock is held, so they are
/// queued here and moved into state by the render loop.
///
#[derive(Clone, Debug, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn push(&self, entry: String) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
        }
    }

    /// Take every queued line, oldest first.
    ///
    pub fn drain(&self) -> Vec<String> {
        match self.entries.lock() {
            Ok(mut entries) => std::mem::take(&mut *entries),
            Err(_) => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logger_into(buffer: &LogBuffer) -> CustomLogger {
        let logger = CustomLogger::new();
        let sink = buffer.clone();
        logger.set_log_callback(Box::new(move |entry| sink.push(entry)));
        logger
    }

    #[test]
    fn test_records_reach_the_buffer() {
        let buffer = LogBuffer::default();
        let logger = logger_into(&buffer);
        logger.log(
            &Record::builder()
                .args(format_args!("Fetching lists..."))
                .level(Level::Info)
                .target("movies_tui::events::network")
                .build(),
        );

        let entries = buffer.drain();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].contains("INFO"));
        assert!(entries[0].ends_with("Fetching lists..."));
        assert!(buffer.drain().is_empty());
    }

    #[test]
    fn test_dependency_debug_records_are_dropped() {
        let buffer = LogBuffer::default();
        let logger = logger_into(&buffer);
        logger.log(
            &Record::builder()
                .args(format_args!("pooling idle connection"))
                .level(Level::Debug)
                .target("hyper::client::pool")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("Search store dispatch"))
                .level(Level::Debug)
                .target("movies_tui::store")
                .build(),
        );

        let entries = buffer.drain();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].contains("DEBUG"));
    }
}
