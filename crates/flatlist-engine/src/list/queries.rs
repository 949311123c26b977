use std::iter::FusedIterator;

use crate::list::Direction;
use crate::model::BlockPos;
use crate::store::BlockView;

fn step<V: BlockView + ?Sized>(view: &V, pos: BlockPos, direction: Direction) -> Option<BlockPos> {
    match direction {
        Direction::Backward => view.previous(pos),
        Direction::Forward => view.next(pos),
    }
}

/// True when no directly preceding block shares `pos`'s `listItemId`.
///
/// Also true at the start of the document and for blocks outside any list.
pub fn is_first_block_of_item<V: BlockView + ?Sized>(view: &V, pos: BlockPos) -> bool {
    let Some(id) = view.list_item_id(pos) else {
        return true;
    };
    match view.previous(pos) {
        Some(prev) => view.list_item_id(prev) != Some(id),
        None => true,
    }
}

/// The other blocks of `pos`'s list item lying in `direction`, in document order.
pub fn item_blocks<V: BlockView + ?Sized>(
    view: &V,
    pos: BlockPos,
    direction: Direction,
) -> Vec<BlockPos> {
    let Some(id) = view.list_item_id(pos) else {
        return Vec::new();
    };

    let mut blocks = Vec::new();
    let mut current = step(view, pos, direction);
    while let Some(candidate) = current {
        if view.list_item_id(candidate) != Some(id) {
            break;
        }
        blocks.push(candidate);
        current = step(view, candidate, direction);
    }

    if direction == Direction::Backward {
        blocks.reverse();
    }
    blocks
}

/// Blocks following a list block that sit deeper than it: the flattened
/// subtree of its item.
///
/// Created by [`nested_blocks_of`]. Each call starts a fresh walk.
pub struct NestedBlocks<'a, V: ?Sized> {
    view: &'a V,
    indent: usize,
    next: Option<BlockPos>,
}

impl<V: ?Sized> Clone for NestedBlocks<'_, V> {
    fn clone(&self) -> Self {
        Self {
            view: self.view,
            indent: self.indent,
            next: self.next,
        }
    }
}

impl<V: BlockView + ?Sized> Iterator for NestedBlocks<'_, V> {
    type Item = BlockPos;

    fn next(&mut self) -> Option<BlockPos> {
        let pos = self.next.take()?;
        let indent = self.view.list_indent(pos)?;
        if indent <= self.indent {
            return None;
        }
        self.next = self.view.next(pos);
        Some(pos)
    }
}

impl<V: BlockView + ?Sized> FusedIterator for NestedBlocks<'_, V> {}

/// Walk the blocks after `pos` whose indent is strictly greater than `pos`'s.
///
/// Stops at the first block with an indent `<=` that of `pos`, or at the
/// first block outside a list. Empty when `pos` is not a list block.
pub fn nested_blocks_of<V: BlockView + ?Sized>(view: &V, pos: BlockPos) -> NestedBlocks<'_, V> {
    match view.list_indent(pos) {
        Some(indent) => NestedBlocks {
            view,
            indent,
            next: view.next(pos),
        },
        None => NestedBlocks {
            view,
            indent: 0,
            next: None,
        },
    }
}

/// Grow an ordered selection so that it starts and ends on whole list items.
///
/// The first block is extended backward and the last block forward over every
/// block sharing their respective `listItemId`. Applying it twice changes
/// nothing further.
pub fn expand_to_complete_items<V: BlockView + ?Sized>(view: &V, blocks: &mut Vec<BlockPos>) {
    let (Some(&first), Some(&last)) = (blocks.first(), blocks.last()) else {
        return;
    };

    let leading = item_blocks(view, first, Direction::Backward);
    let trailing = item_blocks(view, last, Direction::Forward);

    blocks.splice(0..0, leading);
    blocks.extend(trailing);
}

/// Search parameters for [`sibling_at_same_indent`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SiblingQuery {
    pub indent: usize,
    pub direction: Direction,
}

/// Nearest list block at exactly `query.indent`, scanning from `from`
/// (inclusive) in `query.direction`.
///
/// A block with a smaller indent marks the boundary of the enclosing list and
/// ends the search, as does any block outside a list.
pub fn sibling_at_same_indent<V: BlockView + ?Sized>(
    view: &V,
    from: Option<BlockPos>,
    query: SiblingQuery,
) -> Option<BlockPos> {
    let mut current = from;
    while let Some(pos) = current {
        let indent = view.list_indent(pos)?;
        if indent == query.indent {
            return Some(pos);
        }
        if indent < query.indent {
            return None;
        }
        current = step(view, pos, query.direction);
    }
    None
}
