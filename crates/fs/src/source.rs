use std::{
    fs,
    io::Result,
    path::Path,
};

use log::debug;

use crate::{
    owner::OwnerCache,
    record::{MetadataRecord, name_for_path},
};

/// Where listing metadata comes from.
///
/// Every method is a single synchronous call; no handle outlives it.
pub trait MetadataSource {
    /// Attributes of `path` itself. Symlinks are not followed.
    fn stat(&self, path: &Path) -> Result<MetadataRecord>;

    /// Whether `path` resolves to a directory, following symlinks.
    fn is_dir(&self, path: &Path) -> Result<bool>;

    /// One record per child of `dir`, dotfiles included, sorted by name.
    fn read_dir(&self, dir: &Path) -> Result<Vec<MetadataRecord>>;

    /// Best-effort user name for `uid`.
    fn owner_name(&self, uid: u32) -> Option<String>;
}

/// The real filesystem.
#[derive(Debug, Default)]
pub struct FsSource {
    owners: OwnerCache,
}

impl FsSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetadataSource for FsSource {
    fn stat(&self, path: &Path) -> Result<MetadataRecord> {
        let meta = fs::symlink_metadata(path)?;
        Ok(MetadataRecord::from_metadata(name_for_path(path), &meta))
    }

    fn is_dir(&self, path: &Path) -> Result<bool> {
        Ok(fs::metadata(path)?.is_dir())
    }

    fn read_dir(&self, dir: &Path) -> Result<Vec<MetadataRecord>> {
        let mut records = Vec::new();

        for entry_res in fs::read_dir(dir)? {
            let entry = entry_res?;
            // DirEntry::metadata does not traverse symlinks.
            let meta = entry.metadata()?;
            let name = entry.file_name().to_string_lossy().into_owned();
            records.push(MetadataRecord::from_metadata(name, &meta));
        }

        records.sort_by(|a, b| a.name.cmp(&b.name));

        debug!("[read_dir] {:?}: {} entries", dir, records.len());

        Ok(records)
    }

    fn owner_name(&self, uid: u32) -> Option<String> {
        self.owners.lookup(uid)
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
