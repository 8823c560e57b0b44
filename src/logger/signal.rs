//! Panic-level calls return a value instead of unwinding on their own, so
//! the caller decides where the unwind starts.

use std::fmt;

/// A panic-level line that has already been written.
#[derive(Debug)]
#[must_use = "a PanicSignal does nothing until raised"]
pub struct PanicSignal {
    line: String,
    write_error: Option<crate::Error>,
}

impl PanicSignal {
    pub(crate) const fn new(line: String, write_error: Option<crate::Error>) -> Self {
        Self { line, write_error }
    }

    /// The exact text handed to the sink, trailing newline included.
    #[must_use]
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Set if the sink or a mirror rejected the line.
    #[must_use]
    pub const fn write_error(&self) -> Option<&crate::Error> {
        self.write_error.as_ref()
    }

    #[must_use]
    pub fn into_line(self) -> String {
        self.line
    }

    /// Unwinds with the rendered line (a `String`) as the panic payload.
    pub fn raise(self) -> ! {
        std::panic::panic_any(self.line)
    }
}

impl fmt::Display for PanicSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.line.trim_end_matches('\n'))
    }
}
