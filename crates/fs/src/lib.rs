mod mode;
mod owner;
mod record;
mod source;

pub use mode::{FileMode, FileType, Permissions};
pub use owner::OwnerCache;
pub use record::MetadataRecord;
pub use source::{FsSource, MetadataSource};
