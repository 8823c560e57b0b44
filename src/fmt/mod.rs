//! Line rendering: the optional date/time/location prefix, the level tag, and
//! the trailing-newline rule every emitted line follows.

mod header;
mod location;

pub use header::{finish_line, format_header, render_line, short_file};
pub use location::Location;
