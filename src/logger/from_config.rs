//! Builds a `Logger` from the `[general]` and `[output]` config sections.

use super::Logger;
use crate::config::{Config, Target};
use crate::internal;

impl Logger {
    /// # Errors
    /// Invalid level, flag or size strings, a file target without a path,
    /// or a file that cannot be opened.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        let level = config.parse_level()?;
        let flags = config.parse_flags()?;

        let mut builder = Self::builder().level(level).flags(flags);
        builder = match config.output.target {
            Target::Stderr => builder.stderr(),
            Target::Stdout => builder.stdout(),
            Target::File => {
                let path = config.resolved_path().ok_or(crate::Error::MissingPath)?;
                internal::debug(&format!("File target: {}", path.display()));
                builder.file(path).max_size(config.parse_max_size()?)
            }
        };

        builder.build()
    }
}
