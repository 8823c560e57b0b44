//! One `Logger` owns one sink and serializes every call through a single
//! mutex: filter, format, rotate, write, mirror.

mod builder;
mod from_config;
mod signal;

pub use builder::LoggerBuilder;
pub use signal::PanicSignal;

use crate::flags::Flags;
use crate::fmt::{self, Location};
use crate::internal;
use crate::level::Level;
use crate::output::Sink;
use crate::rotation;
use chrono::{DateTime, Local};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Everything a write touches, guarded together.
#[derive(Debug)]
struct State {
    sink: Sink,
    /// Bytes; `0` disables rotation. Only consulted for file sinks.
    threshold: u64,
    flags: Flags,
}

/// Leveled logger writing to a single, swappable sink.
///
/// `Send + Sync`: share it behind an `Arc` and call from any thread.
#[derive(Debug)]
pub struct Logger {
    /// Kept outside the mutex so filtered calls never lock.
    level: AtomicU8,
    state: Mutex<State>,
    rotation_failures: AtomicU64,
}

impl Logger {
    /// Level starts at [`Level::Info`].
    #[must_use]
    pub fn new(sink: Sink, threshold: u64, flags: Flags) -> Self {
        Self {
            level: AtomicU8::new(Level::Info as u8),
            state: Mutex::new(State {
                sink,
                threshold,
                flags,
            }),
            rotation_failures: AtomicU64::new(0),
        }
    }

    /// Standard-error logger with [`Flags::STD`].
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Sink::Stderr, 0, Flags::STD)
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// A panic inside a caller-supplied writer must not take the logger down with it;
    /// the state is whole between calls, so the poison flag carries no information.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn level(&self) -> Level {
        Level::try_from(self.level.load(Ordering::Acquire)).unwrap_or_default()
    }

    #[must_use]
    pub fn flags(&self) -> Flags {
        self.lock().flags
    }

    #[must_use]
    pub fn threshold(&self) -> u64 {
        self.lock().threshold
    }

    /// `None` unless the sink is file-backed.
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        self.lock().sink.path().map(Path::to_path_buf)
    }

    #[must_use]
    pub fn is_rotatable(&self) -> bool {
        self.lock().sink.is_rotatable()
    }

    /// Rotations and sink replacements whose rename or reopen failed. Those
    /// failures never reach the caller that triggered them.
    #[must_use]
    pub fn rotation_failures(&self) -> u64 {
        self.rotation_failures.load(Ordering::Relaxed)
    }

    pub fn set_level(&self, level: Level) {
        let _state = self.lock();
        self.level.store(level as u8, Ordering::Release);
    }

    pub fn set_flags(&self, flags: Flags) {
        self.lock().flags = flags;
    }

    /// Switches to the file at `path`, rotating at `threshold` bytes.
    ///
    /// A current file sink is closed and renamed to `<old>.<secs>` first.
    ///
    /// # Errors
    /// Opening the new file failed. The logger falls back to standard
    /// error so that exactly one sink stays active.
    pub fn set_file(&self, path: impl AsRef<Path>, threshold: u64) -> Result<(), crate::Error> {
        let mut state = self.lock();
        self.retire_sink(&mut state, Sink::Stderr);
        state.threshold = threshold;
        match Sink::file(path) {
            Ok(sink) => {
                state.sink = sink;
                Ok(())
            }
            Err(e) => {
                internal::error(&format!("Failed to open log file, using stderr: {e}"));
                Err(e)
            }
        }
    }

    /// Switches to standard error; never rotated thereafter.
    pub fn set_stderr(&self) {
        self.retire_sink(&mut self.lock(), Sink::Stderr);
    }

    /// Switches to standard output; never rotated thereafter.
    pub fn set_stdout(&self) {
        self.retire_sink(&mut self.lock(), Sink::Stdout);
    }

    /// Switches to a caller-supplied writer; never rotated.
    pub fn set_writer(&self, w: impl Write + Send + 'static) {
        self.retire_sink(&mut self.lock(), Sink::writer(w));
    }

    fn retire_sink(&self, state: &mut State, replacement: Sink) {
        let old = std::mem::replace(&mut state.sink, replacement);
        match rotation::retire(old, &Local::now()) {
            Ok(Some(moved)) => {
                internal::debug(&format!("Retired log file to {}", moved.display()));
            }
            Ok(None) => {}
            Err(e) => {
                self.rotation_failures.fetch_add(1, Ordering::Relaxed);
                internal::warn(&format!("Failed to retire log file: {e}"));
            }
        }
    }

    /// Rotates now if the file has reached the threshold, without writing.
    pub fn check_rotation(&self) -> Option<PathBuf> {
        let now = Local::now();
        let mut state = self.lock();
        self.rotate(&mut state, &now)
    }

    fn rotate(&self, state: &mut State, now: &DateTime<Local>) -> Option<PathBuf> {
        match rotation::maybe_rotate(&mut state.sink, state.threshold, now) {
            Ok(moved) => moved,
            Err(e) => {
                self.rotation_failures.fetch_add(1, Ordering::Relaxed);
                internal::warn(&format!("Rotation failed: {e}"));
                None
            }
        }
    }

    /// Filters, renders and writes one line. `None` when filtered out;
    /// otherwise the rendered line and the outcome of the write.
    fn write_record(
        &self,
        level: Level,
        body: &str,
        location: Option<Location<'_>>,
    ) -> Option<(String, Result<(), crate::Error>)> {
        if !level.passes(self.level()) {
            return None;
        }
        // Before locking so contention does not skew the timestamp.
        let now = Local::now();

        let mut state = self.lock();
        let line = fmt::render_line(&now, location, level, state.flags, body);
        self.rotate(&mut state, &now);
        let written = state.sink.write_line(line.as_bytes());
        let mirrored = mirror(state.flags, line.as_bytes());
        drop(state);

        let result = written.and(mirrored).map_err(crate::Error::from);
        Some((line, result))
    }

    /// Logs `body` at `level` with the caller's location.
    ///
    /// Returns the rendered line, or `None` if `level` was filtered out.
    ///
    /// # Errors
    /// The sink or a mirror stream rejected the bytes.
    #[track_caller]
    pub fn emit(&self, level: Level, body: &str) -> Result<Option<String>, crate::Error> {
        self.emit_at(level, body, Some(Location::caller()))
    }

    /// Like [`emit`](Self::emit) with an explicit location; `None` renders as `???:0`.
    ///
    /// # Errors
    /// The sink or a mirror stream rejected the bytes.
    pub fn emit_at(
        &self,
        level: Level,
        body: &str,
        location: Option<Location<'_>>,
    ) -> Result<Option<String>, crate::Error> {
        match self.write_record(level, body, location) {
            Some((line, result)) => result.map(|()| Some(line)),
            None => Ok(None),
        }
    }

    /// Backs the formatting macros; formats only when `level` passes.
    ///
    /// # Errors
    /// The sink or a mirror stream rejected the bytes.
    #[track_caller]
    pub fn log_args(
        &self,
        level: Level,
        args: std::fmt::Arguments<'_>,
    ) -> Result<Option<String>, crate::Error> {
        if !level.passes(self.level()) {
            return Ok(None);
        }
        let location = Location::caller();
        match args.as_str() {
            Some(body) => self.emit_at(level, body, Some(location)),
            None => self.emit_at(level, &args.to_string(), Some(location)),
        }
    }

    /// # Errors
    /// The sink or a mirror stream rejected the bytes.
    #[track_caller]
    pub fn error(&self, body: &str) -> Result<Option<String>, crate::Error> {
        self.emit(Level::Error, body)
    }

    /// # Errors
    /// The sink or a mirror stream rejected the bytes.
    #[track_caller]
    pub fn warning(&self, body: &str) -> Result<Option<String>, crate::Error> {
        self.emit(Level::Warning, body)
    }

    /// # Errors
    /// The sink or a mirror stream rejected the bytes.
    #[track_caller]
    pub fn info(&self, body: &str) -> Result<Option<String>, crate::Error> {
        self.emit(Level::Info, body)
    }

    /// # Errors
    /// The sink or a mirror stream rejected the bytes.
    #[track_caller]
    pub fn debug(&self, body: &str) -> Result<Option<String>, crate::Error> {
        self.emit(Level::Debug, body)
    }

    /// Logs at panic level and hands back the rendered line for the caller
    /// to [`raise`](PanicSignal::raise) at its own boundary.
    #[track_caller]
    pub fn panic(&self, body: &str) -> PanicSignal {
        let location = Some(Location::caller());
        // Panic is the most severe level, so no threshold filters it.
        let (line, result) = self
            .write_record(Level::Panic, body, location)
            .unwrap_or_else(|| {
                let flags = self.flags();
                let line = fmt::render_line(&Local::now(), location, Level::Panic, flags, body);
                (line, Ok(()))
            });
        PanicSignal::new(line, result.err())
    }

    /// Logs at panic level, then unwinds with the rendered line as payload.
    #[track_caller]
    pub fn panic_now(&self, body: &str) -> ! {
        self.panic(body).raise()
    }

    /// Logs at fatal level, then exits the process with status 1.
    /// Destructors and other cleanup do not run.
    #[track_caller]
    pub fn fatal(&self, body: &str) -> ! {
        let _ = self.emit(Level::Fatal, body);
        std::process::exit(1)
    }
}

fn mirror(flags: Flags, line: &[u8]) -> io::Result<()> {
    if flags.contains(Flags::MIRROR_STDERR) {
        io::stderr().lock().write_all(line)?;
    }
    if flags.contains(Flags::MIRROR_STDOUT) {
        let mut out = io::stdout().lock();
        out.write_all(line)?;
        out.flush()?;
    }
    Ok(())
}
