use std::collections::BTreeMap;

use crate::model::{AttributeKey, AttributeValue, Block, BlockPos};
use crate::store::{BlockStore, BlockView, BlockWriter, Patch};

/// In-memory block store with a block-range selection.
///
/// Transactions stage copy-on-write clones of the blocks they touch and swap
/// them in when the change closure returns. A panic inside the closure drops
/// the staged blocks, leaving the store as it was.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blocks: Vec<Block>,
    /// Inclusive `(first, last)` block indices of the selection
    selection: Option<(usize, usize)>,
    /// Version counter incremented by every commit that changed something
    version: u64,
    last_patch: Option<Patch>,
}

impl MemoryStore {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            ..Self::default()
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Patch produced by the most recent transaction
    pub fn last_patch(&self) -> Option<&Patch> {
        self.last_patch.as_ref()
    }

    /// Place a caret in a single block
    pub fn select(&mut self, pos: BlockPos) {
        self.select_range(pos, pos);
    }

    /// Select every block from `first` to `last`, both inclusive, in either order.
    ///
    /// The range is clamped to the document; selecting in an empty document
    /// clears the selection.
    pub fn select_range(&mut self, first: BlockPos, last: BlockPos) {
        let Some(max) = self.blocks.len().checked_sub(1) else {
            self.selection = None;
            return;
        };
        let start = first.index().min(last.index()).min(max);
        let end = first.index().max(last.index()).min(max);
        self.selection = Some((start, end));
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    fn commit(&mut self, staged: BTreeMap<usize, Block>) {
        let mut changed = Vec::new();
        for (index, block) in staged {
            if self.blocks[index] != block {
                self.blocks[index] = block;
                changed.push(BlockPos(index));
            }
        }

        if !changed.is_empty() {
            self.version += 1;
        }
        self.last_patch = Some(Patch {
            changed,
            version: self.version,
        });
    }
}

impl BlockView for MemoryStore {
    fn block_count(&self) -> usize {
        self.blocks.len()
    }

    fn block(&self, pos: BlockPos) -> Option<&Block> {
        self.blocks.get(pos.index())
    }
}

impl BlockStore for MemoryStore {
    fn selected_blocks(&self) -> Vec<BlockPos> {
        match self.selection {
            Some((start, end)) => (start..=end)
                .take_while(|index| *index < self.blocks.len())
                .map(BlockPos)
                .collect(),
            None => Vec::new(),
        }
    }

    fn change<R>(&mut self, f: impl FnOnce(&mut dyn BlockWriter) -> R) -> R {
        let mut transaction = Transaction {
            base: &self.blocks,
            staged: BTreeMap::new(),
        };
        let result = f(&mut transaction);
        let staged = transaction.staged;
        self.commit(staged);
        result
    }
}

/// Open write transaction over a [`MemoryStore`]
pub struct Transaction<'a> {
    base: &'a [Block],
    staged: BTreeMap<usize, Block>,
}

impl Transaction<'_> {
    fn staged_mut(&mut self, pos: BlockPos) -> Option<&mut Block> {
        let base = self.base;
        let original = base.get(pos.index())?;
        Some(
            self.staged
                .entry(pos.index())
                .or_insert_with(|| original.clone()),
        )
    }
}

impl BlockView for Transaction<'_> {
    fn block_count(&self) -> usize {
        self.base.len()
    }

    fn block(&self, pos: BlockPos) -> Option<&Block> {
        self.staged
            .get(&pos.index())
            .or_else(|| self.base.get(pos.index()))
    }
}

impl BlockWriter for Transaction<'_> {
    fn set_attribute(&mut self, pos: BlockPos, key: AttributeKey, value: AttributeValue) {
        if let Some(block) = self.staged_mut(pos) {
            block.set_attribute(key, value);
        }
    }

    fn remove_attribute(&mut self, pos: BlockPos, key: &AttributeKey) {
        if let Some(block) = self.staged_mut(pos) {
            block.remove_attribute(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ListItemId, ListType};
    use pretty_assertions::assert_eq;

    fn store() -> MemoryStore {
        MemoryStore::new(vec![
            Block::paragraph("intro"),
            Block::list_item("a", ListItemId::random(), 0, ListType::Unordered),
            Block::list_item("b", ListItemId::random(), 1, ListType::Unordered),
        ])
    }

    #[test]
    fn test_previous_and_next_stay_in_bounds() {
        let store = store();

        assert_eq!(store.previous(BlockPos(0)), None);
        assert_eq!(store.previous(BlockPos(1)), Some(BlockPos(0)));
        assert_eq!(store.next(BlockPos(1)), Some(BlockPos(2)));
        assert_eq!(store.next(BlockPos(2)), None);
    }

    #[test]
    fn test_selection_is_normalized_and_clamped() {
        let mut store = store();

        store.select_range(BlockPos(9), BlockPos(1));
        assert_eq!(store.selected_blocks(), vec![BlockPos(1), BlockPos(2)]);

        store.select(BlockPos(0));
        assert_eq!(store.selected_blocks(), vec![BlockPos(0)]);

        store.clear_selection();
        assert!(store.selected_blocks().is_empty());
    }

    #[test]
    fn test_empty_document_has_no_selection() {
        let mut store = MemoryStore::default();
        store.select(BlockPos(0));

        assert!(store.selected_blocks().is_empty());
    }

    #[test]
    fn test_writes_are_visible_inside_transaction_and_committed_after() {
        let mut store = store();

        let seen = store.change(|writer| {
            writer.set_attribute(BlockPos(2), AttributeKey::ListIndent, AttributeValue::Indent(0));
            writer.list_indent(BlockPos(2))
        });

        assert_eq!(seen, Some(0));
        assert_eq!(store.list_indent(BlockPos(2)), Some(0));
        assert_eq!(
            store.last_patch(),
            Some(&Patch {
                changed: vec![BlockPos(2)],
                version: 1
            })
        );
    }

    #[test]
    fn test_noop_transaction_keeps_version() {
        let mut store = store();

        store.change(|writer| {
            // Writing back the same value is not a change.
            writer.set_attribute(BlockPos(1), AttributeKey::ListIndent, AttributeValue::Indent(0));
        });

        assert_eq!(store.version(), 0);
        assert!(store.last_patch().unwrap().is_empty());
    }

    #[test]
    fn test_writes_outside_document_are_ignored() {
        let mut store = store();

        store.change(|writer| {
            writer.remove_attribute(BlockPos(42), &AttributeKey::ListItemId);
        });

        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_panicking_transaction_leaves_store_untouched() {
        let mut store = store();
        let before = store.blocks().to_vec();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _: () = store.change(|writer| {
                writer.remove_attribute(BlockPos(1), &AttributeKey::ListItemId);
                panic!("collaborator failure");
            });
        }));

        assert!(result.is_err());
        assert_eq!(store.blocks(), before.as_slice());
        assert_eq!(store.version(), 0);
    }
}
