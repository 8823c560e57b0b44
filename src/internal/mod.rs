//! The crate's own diagnostics: rotation failures, retired files, config
//! loading. Silent unless `LOGROTATING_INTERNAL_LEVEL` names a level, since
//! a logging library must not write to stderr behind its caller's back.
//!
//! Uses `OnceLock` so the environment is read exactly once, even if
//! several threads log their first line at the same time.

use crate::flags::Flags;
use crate::level::Level;
use crate::logger::Logger;
use crate::output::Sink;
use std::sync::OnceLock;

/// Environment variable that enables internal diagnostics.
pub const LEVEL_ENV: &str = "LOGROTATING_INTERNAL_LEVEL";

static INTERNAL_LOGGER: OnceLock<Option<Logger>> = OnceLock::new();

/// Standard error only, so internal lines can never trigger a rotation of their own.
fn logger() -> Option<&'static Logger> {
    INTERNAL_LOGGER
        .get_or_init(|| {
            let level: Level = std::env::var(LEVEL_ENV).ok()?.parse().ok()?;
            let logger = Logger::new(Sink::Stderr, 0, Flags::DATE | Flags::TIME);
            logger.set_level(level);
            Some(logger)
        })
        .as_ref()
}

fn log(level: Level, msg: &str) {
    if let Some(logger) = logger() {
        let _ = logger.emit_at(level, &format!("logrotating: {msg}"), None);
    }
}

/// Directory creation, rotations, retired files.
pub fn debug(msg: &str) {
    log(Level::Debug, msg);
}

/// Config loaded and similar milestones.
pub fn info(msg: &str) {
    log(Level::Info, msg);
}

/// Best-effort steps that failed without failing the write.
pub fn warn(msg: &str) {
    log(Level::Warning, msg);
}

/// A requested sink could not be opened.
pub fn error(msg: &str) {
    log(Level::Error, msg);
}
