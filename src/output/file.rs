//! Append-only log file that rotation can close, rename and reopen.

use crate::internal;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A path plus the handle currently open on it.
///
/// The handle is `None` between a rotation's rename and a successful
/// reopen; the next write retries the open.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Option<File>,
}

impl FileSink {
    /// Creates missing parent directories, then opens `path` for appending.
    ///
    /// # Errors
    /// I/O errors from directory creation or the open itself.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
            internal::debug(&format!("Created directory: {}", parent.display()));
        }

        let file = open_append(&path)?;
        Ok(Self {
            path,
            file: Some(file),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// False only while a failed reopen is pending.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Drops the handle so the file can be renamed.
    pub(crate) fn close(&mut self) {
        self.file = None;
    }

    /// Opens a fresh handle at the original path.
    pub(crate) fn reopen(&mut self) -> io::Result<()> {
        self.file = Some(open_append(&self.path)?);
        Ok(())
    }

    pub(crate) fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        if self.file.is_none() {
            self.reopen()?;
        }
        match self.file.as_mut() {
            Some(file) => file.write_all(buf),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "log file not open")),
        }
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
