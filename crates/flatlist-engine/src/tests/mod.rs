//! Shared fixtures for unit tests.
//!
//! Item ids are written as small integers (`id(1)`, `id(2)`, ...) so that
//! documents read like the outlines they encode.

use crate::model::{Block, BlockPos, ListItemId, ListType};
use crate::store::BlockView;

pub fn id(n: u128) -> ListItemId {
    ListItemId::from_u128(n)
}

/// Unordered list block of item `n`
pub fn item(text: &str, n: u128, indent: usize) -> Block {
    typed(text, n, indent, ListType::Unordered)
}

pub fn typed(text: &str, n: u128, indent: usize, list_type: ListType) -> Block {
    Block::list_item(text, id(n), indent, list_type)
}

pub fn para(text: &str) -> Block {
    Block::paragraph(text)
}

/// `listIndent` of every block, `None` for blocks outside a list
pub fn indents<V: BlockView + ?Sized>(view: &V) -> Vec<Option<usize>> {
    (0..view.block_count())
        .map(|index| view.list_indent(BlockPos(index)))
        .collect()
}
