use crate::command::{AfterExecute, ExecuteObserver};
use crate::list::{
    Direction, SiblingQuery, is_first_block_of_item, item_blocks, sibling_at_same_indent,
};
use crate::model::{AttributeKey, BlockPos};
use crate::store::{BlockStore, BlockWriter};

/// Observer that keeps sibling items of one list on a single `listType`.
///
/// After an indent or outdent, every moved item whose new previous sibling
/// has a different type adopts that sibling's type. Runs in its own
/// transaction, after the command's has committed.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListTypeNormalizer;

impl<S: BlockStore> ExecuteObserver<S> for ListTypeNormalizer {
    fn after_execute(&mut self, store: &mut S, event: &AfterExecute) {
        let retyped = store.change(|writer| normalize_list_types(writer, &event.affected_blocks));
        if retyped > 0 {
            log::debug!("{}: re-typed {retyped} list items", event.direction);
        }
    }
}

/// Align the `listType` of each item starting in `blocks` with its previous
/// sibling at the same indent. Returns how many items changed type.
pub fn normalize_list_types<W: BlockWriter + ?Sized>(writer: &mut W, blocks: &[BlockPos]) -> usize {
    let mut retyped = 0;
    for &pos in blocks {
        if !is_first_block_of_item(&*writer, pos) {
            continue;
        }
        let (Some(indent), Some(list_type)) = (writer.list_indent(pos), writer.list_type(pos))
        else {
            continue;
        };

        let query = SiblingQuery {
            indent,
            direction: Direction::Backward,
        };
        let Some(sibling_type) = sibling_at_same_indent(&*writer, writer.previous(pos), query)
            .and_then(|sibling| writer.list_type(sibling))
        else {
            continue;
        };
        if sibling_type == list_type {
            continue;
        }

        let tail = item_blocks(&*writer, pos, Direction::Forward);
        for block in std::iter::once(pos).chain(tail) {
            writer.set_attribute(block, AttributeKey::ListType, sibling_type.into());
        }
        retyped += 1;
    }
    retyped
}
