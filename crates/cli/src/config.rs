use std::path::PathBuf;

use lz_engine::{ConfigError, SortKey};

use crate::{Cli, printer::ColorChoice};

/// Validated options for one invocation, built once and passed down by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingConfig {
    pub paths: Vec<PathBuf>,
    pub sort_key: SortKey,
    pub reverse: bool,
    pub long: bool,
    pub color: ColorChoice,
}

impl ListingConfig {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        Ok(Self {
            sort_key: SortKey::from_flags(cli.time, cli.size)?,
            paths: cli.paths,
            reverse: cli.reverse,
            long: cli.long,
            color: cli.color,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
