//! Block-level document model.
//!
//! A document is a flat sequence of [`Block`]s. Nested lists are never stored
//! as a tree: list membership and depth live in three block attributes
//! (`listItemId`, `listIndent`, `listType`) and structure is recomputed from
//! them on demand by [`crate::list`].

pub mod attributes;
pub mod block;

pub use attributes::{AttributeKey, AttributeValue, ListItemId, ListType};
pub use block::{Block, BlockPos};
