//! Every line starts with the same prefix shape so logs stay grep-able:
//! `[date time] [file:line] LEVEL message`.

use super::Location;
use crate::flags::Flags;
use crate::level::Level;
use chrono::{DateTime, TimeZone};
use std::fmt::{Display, Write};

/// Drops every directory component, keeping only the file name.
///
/// Both `/` and `\` count as separators so Windows-built paths shorten too.
#[must_use]
pub fn short_file(file: &str) -> &str {
    file.rfind(['/', '\\']).map_or(file, |i| &file[i + 1..])
}

/// Appends the header for one line to `buf`.
///
/// Pure function of its inputs: identical arguments always produce
/// byte-identical output. A `None` location renders as `???:0`.
pub fn format_header<Tz>(
    buf: &mut String,
    now: &DateTime<Tz>,
    location: Option<Location<'_>>,
    level: Level,
    flags: Flags,
) where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if flags.intersects(Flags::DATE | Flags::TIME) {
        buf.push('[');
        if flags.contains(Flags::DATE) {
            let _ = write!(buf, "{}", now.format("%Y-%m-%d"));
        }
        if flags.contains(Flags::TIME) {
            let _ = write!(buf, " {}", now.format("%H:%M:%S%.3f"));
        }
        buf.push_str("] ");
    }

    if flags.intersects(Flags::LONG_FILE | Flags::SHORT_FILE) {
        let location = location.unwrap_or(Location::UNKNOWN);
        let file = if flags.contains(Flags::SHORT_FILE) {
            short_file(location.file())
        } else {
            location.file()
        };
        let _ = write!(buf, "[{file}:{}] ", location.line());
    }

    buf.push_str(level.as_str());
    buf.push(' ');
}

/// Collapses any run of trailing newlines in `buf` into exactly one.
pub fn finish_line(buf: &mut String) {
    let trimmed = buf.trim_end_matches('\n').len();
    buf.truncate(trimmed);
    buf.push('\n');
}

/// Header, body and trailing newline in one buffer, ready for a single write.
#[must_use]
pub fn render_line<Tz>(
    now: &DateTime<Tz>,
    location: Option<Location<'_>>,
    level: Level,
    flags: Flags,
    body: &str,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut buf = String::with_capacity(body.len() + 48);
    format_header(&mut buf, now, location, level, flags);
    buf.push_str(body);
    finish_line(&mut buf);
    buf
}
