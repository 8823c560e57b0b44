//! Process-wide default logger for call sites that cannot be handed one.
//!
//! Prefer passing a `Logger` (or `Arc<Logger>`) explicitly; these
//! forwarders exist for the process boundary and drop write errors.

use crate::flags::Flags;
use crate::level::Level;
use crate::logger::{Logger, PanicSignal};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

static DEFAULT: OnceLock<RwLock<Arc<Logger>>> = OnceLock::new();

fn slot() -> &'static RwLock<Arc<Logger>> {
    DEFAULT.get_or_init(|| RwLock::new(Arc::new(Logger::stderr())))
}

/// Replaces the default instance and returns the previous one.
pub fn set_default(logger: Arc<Logger>) -> Arc<Logger> {
    let mut slot = slot().write().unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *slot, logger)
}

/// Standard error, [`Flags::STD`] and [`Level::Info`] until replaced.
#[must_use]
pub fn default_logger() -> Arc<Logger> {
    Arc::clone(&slot().read().unwrap_or_else(PoisonError::into_inner))
}

pub fn set_level(level: Level) {
    default_logger().set_level(level);
}

pub fn set_flags(flags: Flags) {
    default_logger().set_flags(flags);
}

#[track_caller]
pub fn log(level: Level, msg: &str) {
    let _ = default_logger().emit(level, msg);
}

#[track_caller]
pub fn error(msg: &str) {
    log(Level::Error, msg);
}

#[track_caller]
pub fn warning(msg: &str) {
    log(Level::Warning, msg);
}

#[track_caller]
pub fn info(msg: &str) {
    log(Level::Info, msg);
}

#[track_caller]
pub fn debug(msg: &str) {
    log(Level::Debug, msg);
}

/// See [`Logger::panic`].
#[track_caller]
pub fn panic(msg: &str) -> PanicSignal {
    default_logger().panic(msg)
}

/// See [`Logger::fatal`].
#[track_caller]
pub fn fatal(msg: &str) -> ! {
    default_logger().fatal(msg)
}
