//! Unified error type for all logrotating operations.

/// Error type for logrotating operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from a sink, a mirror stream, or a rotation step.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Unknown log level string.
    InvalidLevel(String),
    /// Size string that `parse_size` could not read.
    InvalidSize(String),
    /// Unknown header/mirror flag name.
    InvalidFlag(String),
    /// File target requested without a path.
    MissingPath,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidLevel(s) => write!(f, "invalid log level: {s}"),
            Self::InvalidSize(s) => write!(f, "invalid size: {s}"),
            Self::InvalidFlag(s) => write!(f, "invalid flag: {s}"),
            Self::MissingPath => write!(f, "file target requires a path"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
