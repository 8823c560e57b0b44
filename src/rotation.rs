//! Size-triggered rotation: once the file behind a sink reaches the
//! threshold it is renamed to `<path>.<unix_seconds>` and a fresh file is
//! opened at the original path.

use crate::internal;
use crate::output::Sink;
use chrono::{DateTime, TimeZone};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// `<path>.<secs>` with `secs` in plain decimal, no padding.
#[must_use]
pub fn rotated_path<Tz: TimeZone>(path: &Path, now: &DateTime<Tz>) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".{}", now.timestamp()));
    PathBuf::from(name)
}

/// True when a file of `size` bytes must be rotated under `threshold`.
///
/// A threshold of `0` disables rotation.
#[must_use]
pub const fn should_rotate(size: u64, threshold: u64) -> bool {
    threshold > 0 && size >= threshold
}

/// Rotates `sink` if its file has reached `threshold` bytes.
///
/// Returns the path the old file was moved to, or `None` when nothing
/// happened: rotation disabled, non-file sink, file below the threshold,
/// a failed `stat` (a missing file is not an error here), or a file
/// already rotated to `<path>.<secs>` this second. In the last case the
/// sink keeps appending and rotates on a later call.
///
/// # Errors
/// Rename or reopen failures. After a failed reopen the sink retries the
/// open on its next write.
pub fn maybe_rotate<Tz: TimeZone>(
    sink: &mut Sink,
    threshold: u64,
    now: &DateTime<Tz>,
) -> Result<Option<PathBuf>, crate::Error> {
    if threshold == 0 {
        return Ok(None);
    }
    let Sink::File(file) = sink else {
        return Ok(None);
    };
    let Ok(meta) = fs::metadata(file.path()) else {
        return Ok(None);
    };
    if !should_rotate(meta.len(), threshold) {
        return Ok(None);
    }

    let target = rotated_path(file.path(), now);
    if is_taken(&target) {
        internal::debug(&format!(
            "{} already exists, deferring rotation",
            target.display()
        ));
        return Ok(None);
    }

    file.close();
    let renamed = fs::rename(file.path(), &target);
    // Whatever happened to the rename, keep a handle on the original path.
    let reopened = file.reopen();
    renamed?;
    reopened?;

    internal::debug(&format!(
        "Rotated {} at {} bytes (threshold {threshold}) to {}",
        file.path().display(),
        meta.len(),
        target.display()
    ));
    Ok(Some(target))
}

/// Closes a file sink that is being replaced and moves its file aside.
///
/// Non-file sinks are simply dropped. When `<path>.<secs>` is already
/// taken the file stays where it is, so no earlier rotation is overwritten.
///
/// # Errors
/// The rename failed; the file is left at its original path.
pub fn retire<Tz: TimeZone>(
    sink: Sink,
    now: &DateTime<Tz>,
) -> Result<Option<PathBuf>, crate::Error> {
    let Sink::File(mut file) = sink else {
        return Ok(None);
    };
    file.close();
    let target = rotated_path(file.path(), now);
    if is_taken(&target) {
        internal::debug(&format!(
            "{} already exists, leaving {} in place",
            target.display(),
            file.path().display()
        ));
        return Ok(None);
    }
    fs::rename(file.path(), &target)?;
    Ok(Some(target))
}

/// Anything at all at `path`, dangling symlinks included.
fn is_taken(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}
