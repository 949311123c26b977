pub mod command;
pub mod list;
pub mod model;
pub mod snapshot;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use command::{
    AfterExecute, ExecuteObserver, IndentCommand, IndentDirection, ListCommands,
    ListTypeNormalizer,
};
pub use list::{Direction, InvariantViolation};
pub use model::{AttributeKey, AttributeValue, Block, BlockPos, ListItemId, ListType};
pub use store::{BlockStore, BlockView, BlockWriter, MemoryStore, Patch};
