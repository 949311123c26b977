// Shared by several integration test files; each one uses a different subset.
#![allow(dead_code)]

use flatlist_engine::{Block, BlockPos, BlockView, ListItemId, ListType, MemoryStore};

pub fn id(n: u128) -> ListItemId {
    ListItemId::from_u128(n)
}

pub fn item(text: &str, n: u128, indent: usize) -> Block {
    typed(text, n, indent, ListType::Unordered)
}

pub fn typed(text: &str, n: u128, indent: usize, list_type: ListType) -> Block {
    Block::list_item(text, id(n), indent, list_type)
}

pub fn para(text: &str) -> Block {
    Block::paragraph(text)
}

pub fn store_selecting(blocks: Vec<Block>, first: usize, last: usize) -> MemoryStore {
    let mut store = MemoryStore::new(blocks);
    store.select_range(BlockPos(first), BlockPos(last));
    store
}

pub fn indents(store: &MemoryStore) -> Vec<Option<usize>> {
    (0..store.block_count())
        .map(|index| store.list_indent(BlockPos(index)))
        .collect()
}

/// A document exercising continuations, nesting, mixed types and a paragraph break
pub fn mixed_outline() -> Vec<Block> {
    vec![
        item("a", 1, 0),
        item("a cont", 1, 0),
        item("a.1", 2, 1),
        item("a.1.1", 3, 2),
        item("a.1.1 cont", 3, 2),
        item("a.2", 4, 1),
        typed("b", 5, 0, ListType::Ordered),
        typed("b.1", 6, 1, ListType::Todo),
        typed("c", 7, 0, ListType::Ordered),
        para("between lists"),
        item("d", 8, 0),
        item("e", 9, 0),
        item("e cont", 9, 0),
    ]
}
