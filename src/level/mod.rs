//! Severity levels and the threshold check that gates every logging call.

use std::fmt;
use std::str::FromStr;

/// Lower discriminant means more severe — `Panic` is 0, `Debug` is 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// Logged, then the caller unwinds with the rendered line as payload.
    Panic = 0,
    /// Logged, then the process exits with a non-zero status.
    Fatal = 1,
    /// Failures that stop the current operation.
    Error = 2,
    /// Anomalies worth a look that do not stop anything.
    Warning = 3,
    /// Normal operational milestones.
    #[default]
    Info = 4,
    /// Diagnostics that are too noisy outside development.
    Debug = 5,
}

impl Level {
    /// Tag rendered into every header.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Panic => "PANIC",
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    /// Most severe first.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Panic,
            Self::Fatal,
            Self::Error,
            Self::Warning,
            Self::Info,
            Self::Debug,
        ]
    }

    /// Shorthand for [`passes`] with `self` as the message level.
    #[must_use]
    pub const fn passes(self, threshold: Self) -> bool {
        passes(self, threshold)
    }
}

/// True iff a message at `message` should be written under `threshold`.
///
/// Severity increases toward zero, so everything at or above the
/// threshold's severity passes.
#[must_use]
pub const fn passes(message: Level, threshold: Level) -> bool {
    (message as u8) <= (threshold as u8)
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl From<ParseLevelError> for crate::Error {
    fn from(e: ParseLevelError) -> Self {
        Self::InvalidLevel(e.0)
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "panic" => Ok(Self::Panic),
            "fatal" => Ok(Self::Fatal),
            "error" | "err" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = ParseLevelError;

    fn try_from(value: u8) -> Result<Self, ParseLevelError> {
        Self::all()
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| ParseLevelError(value.to_string()))
    }
}
