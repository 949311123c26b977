//! # Block Store
//!
//! The list engine never owns the document. It reads and writes block
//! attributes through three collaborator traits:
//!
//! - **[`BlockView`]**: ordered traversal with previous/next access and
//!   attribute reads. Implemented by stores and by open transactions, so every
//!   query in [`crate::list`] works both before and during a change.
//! - **[`BlockWriter`]**: attribute writes, only reachable inside a transaction.
//! - **[`BlockStore`]**: the transaction-scoping primitive plus the current
//!   selection accessor.
//!
//! [`MemoryStore`] is the in-memory implementation used by tests, benches and
//! embedders that have no document model of their own.

pub mod memory;
pub mod patch;

pub use memory::{MemoryStore, Transaction};
pub use patch::Patch;

use crate::model::{AttributeKey, AttributeValue, Block, BlockPos, ListItemId, ListType};

/// Read access to an ordered sequence of blocks
pub trait BlockView {
    fn block_count(&self) -> usize;

    fn block(&self, pos: BlockPos) -> Option<&Block>;

    fn previous(&self, pos: BlockPos) -> Option<BlockPos> {
        let prev = pos.prev()?;
        self.block(prev).map(|_| prev)
    }

    fn next(&self, pos: BlockPos) -> Option<BlockPos> {
        let next = pos.next();
        self.block(next).map(|_| next)
    }

    fn attribute(&self, pos: BlockPos, key: &AttributeKey) -> Option<&AttributeValue> {
        self.block(pos)?.attribute(key)
    }

    fn has_attribute(&self, pos: BlockPos, key: &AttributeKey) -> bool {
        self.attribute(pos, key).is_some()
    }

    fn is_list_block(&self, pos: BlockPos) -> bool {
        self.block(pos).is_some_and(Block::is_list_block)
    }

    fn list_item_id(&self, pos: BlockPos) -> Option<ListItemId> {
        self.block(pos)?.list_item_id()
    }

    fn list_indent(&self, pos: BlockPos) -> Option<usize> {
        self.block(pos)?.list_indent()
    }

    fn list_type(&self, pos: BlockPos) -> Option<ListType> {
        self.block(pos)?.list_type()
    }
}

/// Attribute writes inside an open transaction.
///
/// Writes to positions outside the document are ignored.
pub trait BlockWriter: BlockView {
    fn set_attribute(&mut self, pos: BlockPos, key: AttributeKey, value: AttributeValue);

    fn remove_attribute(&mut self, pos: BlockPos, key: &AttributeKey);
}

/// A document the list commands can operate on
pub trait BlockStore: BlockView {
    /// Blocks intersected by the active selection, in document order
    fn selected_blocks(&self) -> Vec<BlockPos>;

    /// Run `f` inside one atomic transaction.
    ///
    /// Writes made through the writer are visible to reads on the same writer
    /// immediately, and to everyone else only once `f` has returned. The
    /// transaction commits on every return path of `f`.
    fn change<R>(&mut self, f: impl FnOnce(&mut dyn BlockWriter) -> R) -> R;
}
