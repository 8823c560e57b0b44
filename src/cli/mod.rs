//! `logrotating` binary: forwards stdin, one line per record, into a logger
//! built from the config file and command-line overrides.

use crate::config::{Config, Target, parse_size};
use crate::flags::Flags;
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use clap::Parser;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

/// Pipe stdin into a leveled, size-rotated log.
#[derive(Debug, Parser)]
#[command(name = "logrotating", version, about)]
pub struct Cli {
    /// Config file (default: the per-user config directory)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Write to this file instead of the configured target
    #[arg(long, short)]
    pub file: Option<String>,

    /// Write to standard output instead of the configured target
    #[arg(long, conflicts_with = "file")]
    pub stdout: bool,

    /// Rotation threshold, e.g. 10M (0 disables)
    #[arg(long)]
    pub max_size: Option<String>,

    /// Minimum level written
    #[arg(long, short)]
    pub level: Option<Level>,

    /// Level each stdin line is logged at
    #[arg(long, default_value = "info")]
    pub emit_level: Level,

    /// Header fields, comma separated (date,time,longfile,shortfile).
    /// Without it, location fields from the config are dropped
    #[arg(long, value_delimiter = ',')]
    pub flags: Option<Vec<String>>,

    /// Also copy every line to standard error
    #[arg(long)]
    pub mirror_stderr: bool,
}

impl Cli {
    /// Applies command-line overrides on top of `config`.
    #[must_use]
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(path) = &self.file {
            config.output.target = Target::File;
            config.output.path = Some(path.clone());
        } else if self.stdout {
            config.output.target = Target::Stdout;
        }
        if let Some(size) = &self.max_size {
            config.output.max_size = Some(size.clone());
        }
        if let Some(level) = self.level {
            config.general.level = level.as_str().to_lowercase();
        }
        if let Some(flags) = &self.flags {
            config.general.flags.clone_from(flags);
        }
        if self.mirror_stderr {
            config.general.flags.push("mirror_stderr".to_string());
        }
        config
    }

    /// Stdin lines have no caller location worth rendering, so location
    /// fields inherited from the config are dropped. Fields named on the
    /// command line are kept as asked (they render as `???:0`).
    #[must_use]
    pub fn effective_flags(&self, configured: Flags) -> Flags {
        if self.flags.is_some() {
            configured
        } else {
            configured.difference(Flags::LONG_FILE | Flags::SHORT_FILE)
        }
    }

    /// # Errors
    /// `--max-size` is not a size string.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if let Some(size) = &self.max_size
            && parse_size(size).is_none()
        {
            return Err(crate::Error::InvalidSize(size.clone()));
        }
        Ok(())
    }
}

/// Reads stdin to EOF, logging each line. A fatal or panic `--emit-level`
/// is logged at error level instead, so one input line cannot end the pipe.
pub fn run(cli: &Cli) -> ExitCode {
    if let Err(e) = cli.validate() {
        eprintln!("logrotating: {e}");
        return ExitCode::FAILURE;
    }

    let loaded = cli
        .config
        .as_deref()
        .map_or_else(Config::load, Config::load_from);
    let config = match loaded {
        Ok(c) => cli.apply(c),
        Err(e) => {
            eprintln!("logrotating: error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let logger = match Logger::from_config(&config) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("logrotating: {e}");
            return ExitCode::FAILURE;
        }
    };

    logger.set_flags(cli.effective_flags(logger.flags()));
    let level = cli.emit_level.max(Level::Error);
    internal::debug(&format!(
        "Forwarding stdin at {level} with flags {}",
        logger.flags()
    ));

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("logrotating: read error: {e}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = logger.emit_at(level, &line, None) {
            eprintln!("logrotating: write error: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
