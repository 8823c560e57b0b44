//! Caller file/line attached to a logging call.

use std::fmt;

/// Rendered as `file:line` inside the header's location brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location<'a> {
    file: &'a str,
    line: u32,
}

impl<'a> Location<'a> {
    /// Stands in when the caller could not be determined.
    pub const UNKNOWN: Location<'static> = Location {
        file: "???",
        line: 0,
    };

    #[must_use]
    pub const fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    #[must_use]
    pub const fn file(&self) -> &'a str {
        self.file
    }

    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Location of whoever called the outermost `#[track_caller]` function.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Location<'static> {
        std::panic::Location::caller().into()
    }
}

impl From<&'static std::panic::Location<'static>> for Location<'static> {
    fn from(loc: &'static std::panic::Location<'static>) -> Self {
        Self::new(loc.file(), loc.line())
    }
}

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
