//! Configuration struct definitions.

use serde::Deserialize;

/// `[general]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum level name (`panic` through `debug`).
    pub level: String,
    /// Header fields and mirrors: `date`, `time`, `longfile`, `shortfile`,
    /// `mirror_stderr`, `mirror_stdout`.
    pub flags: Vec<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            flags: vec!["date".to_string(), "time".to_string(), "shortfile".to_string()],
        }
    }
}

/// Which kind of sink to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Stderr,
    Stdout,
    File,
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub target: Target,
    /// Required when `target = "file"`. `~` is expanded.
    pub path: Option<String>,
    /// Rotation threshold such as `"10M"`; absent or `"0"` disables rotation.
    pub max_size: Option<String>,
}
