use std::collections::{HashMap, HashSet};

use crate::list::{Direction, is_first_block_of_item, item_blocks};
use crate::model::{AttributeKey, AttributeValue, BlockPos, ListItemId};
use crate::store::{BlockView, BlockWriter};

/// A `listItemId` that occurs nowhere in the document
pub fn fresh_item_id<V: BlockView + ?Sized>(view: &V) -> ListItemId {
    let taken: HashSet<ListItemId> = (0..view.block_count())
        .filter_map(|index| view.list_item_id(BlockPos(index)))
        .collect();
    loop {
        let id = ListItemId::random();
        if !taken.contains(&id) {
            return id;
        }
    }
}

/// Take `pos` out of its list by dropping all three list attributes
pub fn remove_list_attributes<W: BlockWriter + ?Sized>(writer: &mut W, pos: BlockPos) {
    for key in AttributeKey::LIST_KEYS {
        writer.remove_attribute(pos, &key);
    }
}

/// Shift the indent of every list block in `blocks` by `delta`.
///
/// Blocks are processed in the given (document) order and are expected to
/// cover whole list items. A block whose indent would drop below zero leaves
/// the list entirely. Otherwise the new indent is capped at one more than the
/// already-updated predecessor, or at 0 when the predecessor is not a list
/// block. Blocks outside any list are skipped.
///
/// Once a block has left the list, the remaining blocks of its item no longer
/// form one run: each run that follows is given a fresh `listItemId` and
/// becomes an item of its own.
///
/// Returns the blocks that changed, in document order.
pub fn set_indent<W: BlockWriter + ?Sized>(
    writer: &mut W,
    blocks: &[BlockPos],
    delta: isize,
) -> Vec<BlockPos> {
    let mut changed = Vec::new();
    // Items that lost a block, mapped to the id of their current remaining run
    let mut detached: HashMap<ListItemId, Option<ListItemId>> = HashMap::new();

    for &pos in blocks {
        let (Some(id), Some(indent)) = (writer.list_item_id(pos), writer.list_indent(pos)) else {
            continue;
        };

        let Some(target) = indent.checked_add_signed(delta) else {
            log::trace!("block {} leaves the list", pos.index());
            remove_list_attributes(writer, pos);
            detached.insert(id, None);
            changed.push(pos);
            continue;
        };

        let limit = writer
            .previous(pos)
            .and_then(|prev| writer.list_indent(prev))
            .map_or(0, |prev_indent| prev_indent + 1);
        let new_indent = target.min(limit);
        if new_indent != target {
            log::trace!(
                "block {} capped at indent {new_indent} (wanted {target})",
                pos.index()
            );
        }

        let mut block_changed = new_indent != indent;
        writer.set_attribute(pos, AttributeKey::ListIndent, AttributeValue::Indent(new_indent));

        if let Some(run) = detached.get_mut(&id) {
            let run_id = *run.get_or_insert_with(|| fresh_item_id(&*writer));
            log::trace!("block {} continues as item {run_id}", pos.index());
            writer.set_attribute(pos, AttributeKey::ListItemId, run_id.into());
            block_changed = true;
        }

        if block_changed {
            changed.push(pos);
        }
    }

    changed
}

/// Cleave the list item containing `pos` in two, so that `pos` starts a new item.
///
/// `pos` and the rest of its item's run get a fresh `listItemId`; indent and
/// type are untouched. A later block of the run that sits shallower than the
/// new item's first block starts yet another fresh item, so that no item
/// begins deeper than its own continuation. Deeper items nested under the tail
/// keep their own ids and now hang off the new item. Returns the id given to
/// `pos`, or `None` when `pos` already starts its item or is not in a list.
pub fn split_item_before<W: BlockWriter + ?Sized>(
    writer: &mut W,
    pos: BlockPos,
) -> Option<ListItemId> {
    let head_indent = writer.list_indent(pos)?;
    if is_first_block_of_item(&*writer, pos) {
        return None;
    }

    let tail = item_blocks(&*writer, pos, Direction::Forward);
    let new_id = fresh_item_id(&*writer);
    writer.set_attribute(pos, AttributeKey::ListItemId, new_id.into());

    let mut run_id = new_id;
    let mut run_indent = head_indent;
    for block in tail {
        let indent = writer.list_indent(block).unwrap_or(run_indent);
        if indent < run_indent {
            run_id = fresh_item_id(&*writer);
            run_indent = indent;
            log::trace!("block {} starts item {run_id}", block.index());
        }
        writer.set_attribute(block, AttributeKey::ListItemId, run_id.into());
    }

    log::trace!("split item at block {} as {new_id}", pos.index());
    Some(new_id)
}
