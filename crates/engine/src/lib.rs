mod collection;
mod entry;
mod error;
mod format;
mod listing;

pub use collection::{Collection, SortKey};
pub use entry::{Entry, EntryKind, display_name};
pub use error::ConfigError;
pub use format::{human_size, relative_time, utc_from_system_time};
pub use listing::collect;
