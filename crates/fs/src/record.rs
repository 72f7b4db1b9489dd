use std::{
    fs::Metadata,
    os::unix::fs::MetadataExt,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use crate::mode::FileMode;

/// Raw attributes of one filesystem object, as the metadata source saw them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    /// Bare file name, never empty
    pub name: String,
    pub mode: FileMode,
    /// Owning user id, resolved to a name later
    pub uid: u32,
    /// Last modification time (`UNIX_EPOCH` when the platform cannot tell)
    pub mtime: SystemTime,
    /// Size in bytes
    pub size: u64,
}

impl MetadataRecord {
    pub fn from_metadata(name: String, meta: &Metadata) -> Self {
        Self {
            name,
            mode: FileMode::from_raw(meta.mode()),
            uid: meta.uid(),
            mtime: meta.modified().unwrap_or(UNIX_EPOCH),
            size: meta.len(),
        }
    }
}

/// Name shown for a path argument.
///
/// `.`, `..` and `/` have no final component, so they are shown as written.
pub(crate) fn name_for_path(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| path.display().to_string())
}
