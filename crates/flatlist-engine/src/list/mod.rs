//! # List structure over a flat block sequence
//!
//! Nested lists are encoded purely in block attributes. A list item is the
//! maximal contiguous run of blocks sharing a `listItemId`; its depth is the
//! `listIndent` of those blocks, and parent/child relationships follow from
//! indent and adjacency alone. Nothing here caches a tree: every query walks
//! the blocks again, so positions are the only handles ever held.
//!
//! - **`queries`**: read-only relationship lookups (siblings, item blocks,
//!   nested blocks, whole-item expansion)
//! - **`mutators`**: attribute writes that change indent or split items
//! - **`invariants`**: validation of the structural rules every command keeps

pub mod invariants;
pub mod mutators;
pub mod queries;

pub use invariants::{InvariantViolation, validate, violations};
pub use mutators::{fresh_item_id, remove_list_attributes, set_indent, split_item_before};
pub use queries::{
    NestedBlocks, SiblingQuery, expand_to_complete_items, is_first_block_of_item, item_blocks,
    nested_blocks_of, sibling_at_same_indent,
};

/// Direction of a walk through the block sequence
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}
