//! Pipe a process's output into a rotating log:
//!
//!   my-server 2>&1 | logrotating --file /var/log/my-server.log --max-size 50M

use clap::Parser;
use logrotating::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(&cli)
}
