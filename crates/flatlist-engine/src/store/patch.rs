use crate::model::BlockPos;

/// Result of committing a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Blocks whose attributes differ from before the transaction
    pub changed: Vec<BlockPos>,
    pub version: u64,
}

impl Patch {
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }
}
