//! Stepwise construction for loggers whose sink has to be opened first.

use super::Logger;
use crate::flags::Flags;
use crate::level::Level;
use crate::output::Sink;
use std::io::Write;
use std::path::PathBuf;

/// Where the built logger will write.
enum Target {
    Stderr,
    Stdout,
    File(PathBuf),
    Writer(Box<dyn Write + Send>),
}

/// Defaults: standard error, [`Flags::STD`], [`Level::Info`], no rotation.
pub struct LoggerBuilder {
    target: Target,
    threshold: u64,
    flags: Flags,
    level: Level,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            target: Target::Stderr,
            threshold: 0,
            flags: Flags::STD,
            level: Level::Info,
        }
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub const fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Opened on [`build`](Self::build); parent directories are created.
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.target = Target::File(path.into());
        self
    }

    /// Rotation threshold in bytes; `0` disables. Ignored for non-file targets.
    #[must_use]
    pub const fn max_size(mut self, bytes: u64) -> Self {
        self.threshold = bytes;
        self
    }

    #[must_use]
    pub fn stderr(mut self) -> Self {
        self.target = Target::Stderr;
        self
    }

    #[must_use]
    pub fn stdout(mut self) -> Self {
        self.target = Target::Stdout;
        self
    }

    #[must_use]
    pub fn writer(mut self, w: impl Write + Send + 'static) -> Self {
        self.target = Target::Writer(Box::new(w));
        self
    }

    /// # Errors
    /// Opening the target file failed.
    pub fn build(self) -> Result<Logger, crate::Error> {
        let sink = match self.target {
            Target::Stderr => Sink::Stderr,
            Target::Stdout => Sink::Stdout,
            Target::File(path) => Sink::file(path)?,
            Target::Writer(w) => Sink::Writer(w),
        };
        let logger = Logger::new(sink, self.threshold, self.flags);
        logger.set_level(self.level);
        Ok(logger)
    }
}
