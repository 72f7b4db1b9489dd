use std::{path::PathBuf, process::ExitCode};

use clap::Parser;

mod config;
mod list;
mod printer;

use lz_runtime::logging;
use printer::ColorChoice;

#[derive(Debug, Parser)]
#[command(
    name = "lz",
    version,
    about = "List directory contents, optionally sorted by time or size"
)]
pub struct Cli {
    /// Files or directories to list (default: the current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Sort by modification time, newest first
    #[arg(long, short = 't')]
    pub time: bool,

    /// Sort by file size, largest first
    #[arg(long, short = 's')]
    pub size: bool,

    /// Reverse order while sorting
    #[arg(long, short = 'r')]
    pub reverse: bool,

    /// Use long listing format
    #[arg(long, short = 'l')]
    pub long: bool,

    /// When to use colors
    #[arg(long, value_name = "WHEN", value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    list::run(cli)
}
