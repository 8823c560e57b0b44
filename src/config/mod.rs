//! TOML configuration: which sink, which level, which header fields.
//!
//! Every field has a default, so an empty or missing file still yields a
//! working standard-error logger.

mod size;
mod structs;

pub use size::parse_size;
pub use structs::{GeneralConfig, OutputConfig, Target};

use crate::flags::Flags;
use crate::internal;
use crate::level::Level;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Threshold and header fields apply whatever the sink is.
    pub general: GeneralConfig,
    /// Sink selection and rotation.
    pub output: OutputConfig,
}

impl Config {
    /// Reads `<config dir>/logrotating/config.toml`; a missing file means defaults.
    ///
    /// # Errors
    /// The config directory cannot be determined, or the file is unreadable or malformed.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        let config = Self::load_from(&path)?;
        internal::info(&format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// Reads an explicit path; a missing file means defaults.
    ///
    /// # Errors
    /// The file is unreadable or not valid TOML for this schema.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// # Errors
    /// `content` is not valid TOML for this schema.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// # Errors
    /// No home/config directory could be determined for this user.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "logrotating")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// # Errors
    /// `general.level` is not a known level name.
    pub fn parse_level(&self) -> Result<Level, crate::Error> {
        Ok(self.general.level.parse()?)
    }

    /// Header and mirror names are OR-ed together; an empty list renders the level tag only.
    ///
    /// # Errors
    /// An entry of `general.flags` is not a known flag name.
    pub fn parse_flags(&self) -> Result<Flags, crate::Error> {
        Flags::from_names(&self.general.flags)
    }

    /// Absent means no rotation.
    ///
    /// # Errors
    /// `output.max_size` is present but not a size string.
    pub fn parse_max_size(&self) -> Result<u64, crate::Error> {
        self.output.max_size.as_deref().map_or(Ok(0), |s| {
            parse_size(s).ok_or_else(|| crate::Error::InvalidSize(s.to_string()))
        })
    }

    /// `output.path` with a leading `~` expanded.
    #[must_use]
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.output
            .path
            .as_deref()
            .map(|p| PathBuf::from(shellexpand::tilde(p).into_owned()))
    }
}
