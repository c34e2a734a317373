//! `log` backend that writes records to the console one byte at a time.
use core::fmt::Write;

use heapless::String;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::Config;

pub type LogLine = String<{ Config::LOG_LINE_CAPACITY }>;

/// Formats `[LEVEL target] message` and hands each byte to `emit`.
///
/// `emit` must not take the runtime lock: records are produced while the
/// heap or console is already borrowed.
pub struct ConsoleLogger {
    emit: fn(u8),
    level: LevelFilter,
}

impl ConsoleLogger {
    pub const fn new(emit: fn(u8), level: LevelFilter) -> Self {
        Self { emit, level }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        for &byte in line.as_bytes() {
            (self.emit)(byte);
        }
        (self.emit)(b'\n');
    }

    fn flush(&self) {}
}

/// Renders one record, truncated to [`Config::LOG_LINE_CAPACITY`].
pub fn format_record(record: &Record<'_>) -> LogLine {
    let mut line = LogLine::new();
    let _ = write!(
        line,
        "[{level} {target}] {message}",
        level = record.level(),
        target = record.target(),
        message = record.args(),
    );
    line
}

/// Installs `logger` as the global `log` backend.
pub fn init(logger: &'static ConsoleLogger) -> Result<(), SetLoggerError> {
    #[cfg(target_has_atomic = "ptr")]
    log::set_logger(logger)?;
    // SAFETY: called once from the entry point before interrupts are used.
    #[cfg(not(target_has_atomic = "ptr"))]
    unsafe {
        log::set_logger_racy(logger)?
    };
    log::set_max_level(logger.level());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;
    use std::cell::RefCell;

    thread_local! {
        static CAPTURED: RefCell<Vec<u8>> = const { RefCell::new(Vec::new()) };
    }

    fn capture(byte: u8) {
        CAPTURED.with(|c| c.borrow_mut().push(byte));
    }

    fn taken() -> String<256> {
        let bytes = CAPTURED.with(|c| core::mem::take(&mut *c.borrow_mut()));
        let mut out = String::new();
        let _ = out.push_str(core::str::from_utf8(&bytes).unwrap());
        out
    }

    #[test]
    fn test_record_format() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("heap at {:#x}", 0x4000))
                .level(Level::Debug)
                .target("runtime::heap")
                .build(),
        );
        assert_eq!(line.as_str(), "[DEBUG runtime::heap] heap at 0x4000");
    }

    #[test]
    fn test_level_filtering() {
        let logger = ConsoleLogger::new(capture, LevelFilter::Info);
        logger.log(
            &Record::builder()
                .args(format_args!("dropped"))
                .level(Level::Debug)
                .target("t")
                .build(),
        );
        assert_eq!(taken().as_str(), "");

        logger.log(
            &Record::builder()
                .args(format_args!("kept"))
                .level(Level::Error)
                .target("t")
                .build(),
        );
        assert_eq!(taken().as_str(), "[ERROR t] kept\n");
    }

    #[test]
    fn test_long_records_are_cut() {
        let long = [b'x'; 300];
        let text = core::str::from_utf8(&long).unwrap();
        let line = format_record(
            &Record::builder()
                .args(format_args!("{text}"))
                .level(Level::Info)
                .target("t")
                .build(),
        );
        assert!(line.len() <= Config::LOG_LINE_CAPACITY);
        assert!(line.starts_with("[INFO t]"));
    }
}
