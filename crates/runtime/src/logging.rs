use std::fmt;
use std::sync::OnceLock;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::{PROGRAM_LOG_LEVEL, PROGRAM_NAME};

/// Level used when `LZ_LOG_LEVEL` is unset or unusable. Keeps the
/// per-directory `debug!` traces of a listing off stderr by default.
const DEFAULT_LEVEL: Level = Level::Warn;

/// Diagnostics for `lz`. The listing owns stdout, so every record goes to stderr.
pub struct Logger {
    level: Level,
}

impl Logger {
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    fn line(&self, level: Level, target: &str, args: &fmt::Arguments<'_>) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        format!("{timestamp} {PROGRAM_NAME} {level} [{target}] {args}")
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("{}", self.line(record.level(), record.target(), record.args()));
    }

    fn flush(&self) {}
}

/// `error`..`trace`, any case. `off` and garbage fall back to the default;
/// silencing warnings entirely is not offered.
fn parse_level(value: Option<&str>) -> Level {
    value
        .and_then(|s| s.trim().parse::<LevelFilter>().ok())
        .and_then(|filter| filter.to_level())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install the stderr logger at the level named by `LZ_LOG_LEVEL`.
pub fn init() -> Result<(), SetLoggerError> {
    let value = std::env::var(PROGRAM_LOG_LEVEL).ok();
    init_with_level(parse_level(value.as_deref()))
}

/// The first call wins; later calls keep the installed logger and its level.
pub fn init_with_level(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    if LOGGER.get().is_some() {
        return Ok(());
    }

    let logger = LOGGER.get_or_init(|| Logger::new(level));
    log::set_logger(logger)?;
    log::set_max_level(logger.level.to_level_filter());

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
