//! Stable text rendering of a document's list structure.
//!
//! Item ids are random, so the outline names them by ordinal in order of
//! first appearance (`#1`, `#2`, ...). Indentation is two spaces per level;
//! continuation blocks of an item are aligned under its text without a marker.

use std::collections::HashMap;

use crate::list::is_first_block_of_item;
use crate::model::{BlockPos, ListItemId, ListType};
use crate::store::BlockView;

fn marker(list_type: ListType) -> &'static str {
    match list_type {
        ListType::Ordered => "1.",
        ListType::Unordered => "-",
        ListType::Todo => "[ ]",
    }
}

pub fn render<V: BlockView + ?Sized>(view: &V) -> String {
    let mut ordinals: HashMap<ListItemId, usize> = HashMap::new();
    let mut lines = Vec::with_capacity(view.block_count());

    for index in 0..view.block_count() {
        let pos = BlockPos(index);
        let Some(block) = view.block(pos) else {
            continue;
        };
        let (Some(id), Some(indent), Some(list_type)) =
            (block.list_item_id(), block.list_indent(), block.list_type())
        else {
            lines.push(block.text.clone());
            continue;
        };

        let next_ordinal = ordinals.len() + 1;
        let ordinal = *ordinals.entry(id).or_insert(next_ordinal);
        let pad = "  ".repeat(indent);
        let lead = if is_first_block_of_item(view, pos) {
            marker(list_type)
        } else {
            " "
        };
        lines.push(format!("{pad}{lead} {} #{ordinal}", block.text));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::tests::{item, para, typed};

    #[test]
    fn test_render_outline() {
        let store = MemoryStore::new(vec![
            para("Shopping"),
            item("fruit", 7, 0),
            item("(seasonal)", 7, 0),
            typed("apples", 3, 1, ListType::Ordered),
            typed("pears", 9, 1, ListType::Ordered),
            typed("call grocer", 8, 0, ListType::Todo),
        ]);

        insta::assert_snapshot!(render(&store), @r"
        Shopping
        - fruit #1
          (seasonal) #1
          1. apples #2
          1. pears #3
        [ ] call grocer #4
        ");
    }
}
