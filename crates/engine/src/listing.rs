use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use lz_fs::{MetadataRecord, MetadataSource};

use crate::{Collection, Entry};

/// Gather the entries for `targets`.
///
/// No targets means the current directory. A single directory target is
/// expanded into its children; any other combination lists each target
/// as given, in argument order. The first unreadable target aborts the
/// whole listing.
pub fn collect<S>(source: &S, targets: &[PathBuf]) -> Result<Collection>
where
    S: MetadataSource + ?Sized,
{
    let current = [PathBuf::from(".")];
    let targets = if targets.is_empty() {
        &current[..]
    } else {
        targets
    };

    let records = match targets {
        [dir] if expands(source, dir) => source
            .read_dir(dir)
            .with_context(|| format!("cannot open directory '{}'", dir.display()))?,
        _ => targets
            .iter()
            .map(|path| {
                source
                    .stat(path)
                    .with_context(|| format!("cannot access '{}'", path.display()))
            })
            .collect::<Result<Vec<MetadataRecord>>>()?,
    };

    debug!(
        "[collect] {} target(s) -> {} entries",
        targets.len(),
        records.len()
    );

    Ok(records
        .into_iter()
        .map(|record| {
            let owner = source.owner_name(record.uid);
            Entry::create(record, owner)
        })
        .collect())
}

/// A target that cannot be resolved is not expanded; `stat` then reports
/// the real error, or lists a dangling symlink as itself.
fn expands<S: MetadataSource + ?Sized>(source: &S, path: &Path) -> bool {
    source.is_dir(path).unwrap_or(false)
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;
