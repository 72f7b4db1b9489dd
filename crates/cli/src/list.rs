use std::{
    io::{BufWriter, Stdout},
    process::ExitCode,
};

use anyhow::Result;
use log::debug;
use lz_engine::{Collection, collect};
use lz_fs::{FsSource, MetadataSource};
use lz_runtime::PROGRAM_NAME;

use crate::{
    Cli,
    config::ListingConfig,
    printer::{Printer, PrinterConfig},
};

const EXIT_LISTING_ERROR: u8 = 1;
const EXIT_CONFIG_ERROR: u8 = 2;

pub fn run(cli: Cli) -> ExitCode {
    // Flag conflicts are rejected before the filesystem is touched.
    let config = match ListingConfig::from_cli(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{PROGRAM_NAME}: {e}");
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    match execute(&config, &FsSource::new()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("[list] aborted: {e:?}");
            eprintln!("{PROGRAM_NAME}: {e:#}");
            ExitCode::from(EXIT_LISTING_ERROR)
        }
    }
}

fn execute<S: MetadataSource>(config: &ListingConfig, source: &S) -> Result<()> {
    let collection = ordered_collection(config, source)?;

    let mut printer = Printer::<BufWriter<Stdout>>::stdout(PrinterConfig::for_listing(config));
    printer.print(&collection)?;

    Ok(())
}

/// Collect, sort, then optionally reverse. Nothing is printed until this succeeds.
fn ordered_collection<S: MetadataSource>(
    config: &ListingConfig,
    source: &S,
) -> Result<Collection> {
    let mut collection = collect(source, &config.paths)?;

    collection.sort(config.sort_key);
    if config.reverse {
        collection.reverse();
    }

    debug!(
        "[list] {} entries, sort={:?}, reverse={}",
        collection.len(),
        config.sort_key,
        config.reverse
    );

    Ok(collection)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
