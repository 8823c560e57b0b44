//! `logrotating` - leveled, thread-safe logging with size-based rotation.
//!
//! A [`Logger`] writes one formatted line per call to a single sink (a
//! file, standard error, standard output, or any writer), can mirror each
//! line to a standard stream, and renames its file to `<path>.<secs>` once
//! it reaches a configured size.
//!
//! # Example
//!
//! ```no_run
//! use logrotating::{Flags, Level, Logger};
//!
//! let logger = Logger::builder()
//!     .file("/var/log/app/server.log")
//!     .max_size(10 * 1024 * 1024)
//!     .flags(Flags::STD | Flags::MIRROR_STDERR)
//!     .level(Level::Debug)
//!     .build()?;
//!
//! logger.info("server started")?;
//! logrotating::warning!(logger, "slow request: {} ms", 1200)?;
//! # Ok::<(), logrotating::Error>(())
//! ```
//!
//! Lines look like `[2024-01-15 09:30:00.123] [server.rs:42] ERROR message`.
//!
//! # Features
//!
//! - `cli` (default): builds the `logrotating` binary, which pipes stdin into a log

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
mod error;
pub mod flags;
pub mod fmt;
pub mod global;
pub mod internal;
pub mod level;
pub mod logger;
mod macros;
pub mod output;
pub mod rotation;

pub use config::{Config, parse_size};
pub use error::Error;
pub use flags::Flags;
pub use fmt::Location;
pub use level::{Level, passes};
pub use logger::{Logger, LoggerBuilder, PanicSignal};
pub use output::{FileSink, Sink};
