mod cache;
mod tag;

pub use cache::NameCache;
pub use tag::{ResolvedNames, Tag, TagId};
