use std::collections::HashSet;

use thiserror::Error;

use crate::model::{AttributeKey, BlockPos, ListItemId};
use crate::store::BlockView;

/// A breach of the structural rules of flat-encoded lists
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("block {} has indent {indent}, shallower than its item's first block ({head_indent})", .pos.index())]
    ShallowerThanItemHead {
        pos: BlockPos,
        indent: usize,
        head_indent: usize,
    },

    #[error("block {} has indent {indent}, at most {max} allowed after the preceding block", .pos.index())]
    IndentJump {
        pos: BlockPos,
        indent: usize,
        max: usize,
    },

    #[error("list item {id} continues at block {} after its run already ended", .pos.index())]
    DiscontiguousItem { pos: BlockPos, id: ListItemId },

    #[error("block {} carries {key} without listItemId", .pos.index())]
    DanglingListAttribute { pos: BlockPos, key: AttributeKey },
}

/// Every invariant violation in the document, in document order
pub fn violations<V: BlockView + ?Sized>(view: &V) -> Vec<InvariantViolation> {
    let mut found = Vec::new();
    let mut finished_items: HashSet<ListItemId> = HashSet::new();
    let mut head_indent = 0;

    for index in 0..view.block_count() {
        let pos = BlockPos(index);
        let Some(block) = view.block(pos) else {
            continue;
        };

        let Some(id) = block.list_item_id() else {
            for key in [AttributeKey::ListIndent, AttributeKey::ListType] {
                if block.has_attribute(&key) {
                    found.push(InvariantViolation::DanglingListAttribute { pos, key });
                }
            }
            continue;
        };
        let indent = block.list_indent().unwrap_or(0);
        let previous = view.previous(pos);

        if previous.and_then(|prev| view.list_item_id(prev)) == Some(id) {
            if indent < head_indent {
                found.push(InvariantViolation::ShallowerThanItemHead {
                    pos,
                    indent,
                    head_indent,
                });
            }
        } else {
            if !finished_items.insert(id) {
                found.push(InvariantViolation::DiscontiguousItem { pos, id });
            }
            head_indent = indent;
        }

        let max = previous
            .and_then(|prev| view.list_indent(prev))
            .map_or(0, |prev_indent| prev_indent + 1);
        if indent > max {
            found.push(InvariantViolation::IndentJump { pos, indent, max });
        }
    }

    found
}

/// First invariant violation in the document, if any
pub fn validate<V: BlockView + ?Sized>(view: &V) -> Result<(), InvariantViolation> {
    match violations(view).into_iter().next() {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}

/// Asserts that the document satisfies every list invariant.
///
/// # Panics
/// Panics listing every violation found.
pub fn check<V: BlockView + ?Sized>(view: &V) {
    let found = violations(view);
    assert!(
        found.is_empty(),
        "list invariants violated:\n{}",
        found
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    );
}
