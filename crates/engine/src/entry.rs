use std::time::SystemTime;

use chrono::{DateTime, Utc};
use lz_fs::{FileMode, MetadataRecord};

use crate::{SortKey, format};

const DIR_ACCENT: &str = "\x1b[1;34m";
const EXEC_ACCENT: &str = "\x1b[1;32m";
const RESET: &str = "\x1b[0m";

/// Display classification of an entry. Exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Regular,
    Directory,
    Executable,
}

impl EntryKind {
    /// Directories win over execute bits; only regular files count as executable.
    pub fn classify(mode: FileMode) -> Self {
        if mode.is_dir() {
            EntryKind::Directory
        } else if mode.is_regular() && mode.is_executable() {
            EntryKind::Executable
        } else {
            EntryKind::Regular
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            EntryKind::Regular => "",
            EntryKind::Directory => "/",
            EntryKind::Executable => "*",
        }
    }

    fn accent(self) -> Option<&'static str> {
        match self {
            EntryKind::Regular => None,
            EntryKind::Directory => Some(DIR_ACCENT),
            EntryKind::Executable => Some(EXEC_ACCENT),
        }
    }
}

/// `name` plus the marker for `kind`: `bin/`, `run*`, `a.txt`.
pub fn display_name(name: &str, kind: EntryKind) -> String {
    format!("{name}{}", kind.suffix())
}

/// One listed filesystem object. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    kind: EntryKind,
    mod_time: SystemTime,
    size: u64,
    owner: String,
    mode: FileMode,
}

impl Entry {
    /// Build an entry from a raw record. An unresolved owner becomes "".
    pub fn create(record: MetadataRecord, owner: Option<String>) -> Self {
        Self {
            kind: EntryKind::classify(record.mode),
            mod_time: record.mtime,
            size: record.size,
            owner: owner.unwrap_or_default(),
            mode: record.mode,
            name: record.name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn mod_time(&self) -> SystemTime {
        self.mod_time
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn display_name(&self) -> String {
        display_name(&self.name, self.kind)
    }

    /// Same visible text as [`Entry::display_name`], with an ANSI accent
    /// around the name for directories and executables.
    pub fn painted_name(&self) -> String {
        match self.kind.accent() {
            Some(accent) => format!("{accent}{}{RESET}{}", self.name, self.kind.suffix()),
            None => self.name.clone(),
        }
    }

    pub fn mode_string(&self) -> String {
        self.mode.symbolic()
    }

    pub fn relative_time(&self, now: DateTime<Utc>) -> String {
        format::relative_time(format::utc_from_system_time(self.mod_time), now)
    }

    pub fn human_size(&self) -> String {
        format::human_size(self.size)
    }

    /// The value `key` orders by, as shown next to the name.
    pub fn property(&self, key: SortKey, now: DateTime<Utc>) -> String {
        match key {
            SortKey::None => String::new(),
            SortKey::ModificationTime => self.relative_time(now),
            SortKey::Size => self.human_size(),
        }
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
