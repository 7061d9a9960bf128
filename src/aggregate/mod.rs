//! Folding per-file line counts into grouped totals.
//!
//! Both groupings are built from owned [`FileRecord`]s and returned by value.

mod breakdown;
mod record;
mod tree;

pub use breakdown::{LanguageBreakdown, ROOT_GROUP, top_level_group};
pub use record::{AggregateRecord, FileRecord};
pub use tree::{DirectoryNode, DirectoryTree};
