use std::slice;

use crate::{ConfigError, Entry};

/// Attribute a listing is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Keep enumeration / argument order.
    #[default]
    None,
    /// Newest first.
    ModificationTime,
    /// Largest first.
    Size,
}

impl SortKey {
    pub fn from_flags(time: bool, size: bool) -> Result<Self, ConfigError> {
        match (time, size) {
            (true, true) => Err(ConfigError::ConflictingSortKeys),
            (true, false) => Ok(SortKey::ModificationTime),
            (false, true) => Ok(SortKey::Size),
            (false, false) => Ok(SortKey::None),
        }
    }

    pub fn is_active(self) -> bool {
        self != SortKey::None
    }
}

/// Ordered entries of one listing. Only the order ever changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    entries: Vec<Entry>,
}

impl Collection {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Stable, descending by `key`; equal keys keep their relative order.
    pub fn sort(&mut self, key: SortKey) {
        match key {
            SortKey::None => {}
            SortKey::ModificationTime => self
                .entries
                .sort_by(|a, b| b.mod_time().cmp(&a.mod_time())),
            SortKey::Size => self.entries.sort_by(|a, b| b.size().cmp(&a.size())),
        }
    }

    pub fn reverse(&mut self) {
        self.entries.reverse();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

impl FromIterator<Entry> for Collection {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Entry;
    type IntoIter = slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod tests;
