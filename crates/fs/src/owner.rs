use std::cell::RefCell;

use hashbrown::HashMap;
use log::debug;
use uzers::get_user_by_uid;

/// uid -> user name lookups, memoized for the lifetime of one listing.
///
/// Misses are cached too; a listing of a large directory owned by an
/// unknown uid would otherwise hit the password database once per entry.
#[derive(Debug, Default)]
pub struct OwnerCache {
    names: RefCell<HashMap<u32, Option<String>>>,
}

impl OwnerCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, uid: u32) -> Option<String> {
        if let Some(hit) = self.names.borrow().get(&uid) {
            return hit.clone();
        }

        let name = get_user_by_uid(uid).map(|u| u.name().to_string_lossy().into_owned());
        if name.is_none() {
            debug!("[owner] no user entry for uid {uid}");
        }

        self.names.borrow_mut().insert(uid, name.clone());
        name
    }

    /// Number of uids looked up so far, hits and misses alike.
    pub fn cached_uids(&self) -> usize {
        self.names.borrow().len()
    }
}
