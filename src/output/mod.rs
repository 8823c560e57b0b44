//! The single destination a `Logger` writes to. Tagged rather than a bare
//! `dyn Write` so rotation can ask "is this a file?" without comparing handles.

mod file;

pub use file::FileSink;

use std::fmt;
use std::io::{self, Write};
use std::path::Path;

/// Exactly one of these is active per logger at any instant.
pub enum Sink {
    /// Rotation-eligible file at a fixed path.
    File(FileSink),
    /// Process standard error; never renamed or reopened.
    Stderr,
    /// Process standard output; never renamed or reopened.
    Stdout,
    /// Caller-supplied writer (pipes, in-memory buffers); never rotated.
    Writer(Box<dyn Write + Send>),
}

impl Sink {
    /// Opens (creating if needed, appending) the file at `path`.
    ///
    /// # Errors
    /// I/O errors from creating parent directories or opening the file.
    pub fn file(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        Ok(Self::File(FileSink::open(path)?))
    }

    /// Wraps an arbitrary writer.
    pub fn writer(w: impl Write + Send + 'static) -> Self {
        Self::Writer(Box::new(w))
    }

    /// Only file sinks may be renamed and reopened by rotation.
    #[must_use]
    pub const fn is_rotatable(&self) -> bool {
        matches!(self, Self::File(_))
    }

    /// Backing path for file sinks, `None` for streams and custom writers.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(f) => Some(f.path()),
            _ => None,
        }
    }

    /// Hands the whole line to the destination in one call.
    ///
    /// # Errors
    /// Whatever the underlying destination reports.
    pub fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        match self {
            Self::File(f) => f.write_all(line),
            Self::Stderr => io::stderr().lock().write_all(line),
            Self::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(line)?;
                out.flush()
            }
            Self::Writer(w) => {
                w.write_all(line)?;
                w.flush()
            }
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(file) => f.debug_tuple("File").field(&file.path()).finish(),
            Self::Stderr => f.write_str("Stderr"),
            Self::Stdout => f.write_str("Stdout"),
            Self::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}
