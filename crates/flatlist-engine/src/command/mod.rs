//! # Indent/Outdent commands
//!
//! One command type, [`IndentCommand`], configured once per direction. Each
//! instance answers an enablement query and executes against a
//! [`BlockStore`] inside a single transaction. After the transaction commits
//! the command hands an [`AfterExecute`] event to its observers, which may
//! open transactions of their own (see [`ListTypeNormalizer`]).

pub mod indent;
pub mod normalize;

pub use indent::IndentCommand;
pub use normalize::{ListTypeNormalizer, normalize_list_types};

use std::fmt;

use flatlist_config::Config;

use crate::model::BlockPos;
use crate::store::BlockStore;

/// Which way a command moves list items
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IndentDirection {
    /// Nest deeper (indent)
    Forward,
    /// Move shallower (outdent)
    Backward,
}

impl IndentDirection {
    /// Change applied to `listIndent`
    pub fn indent_by(self) -> isize {
        match self {
            IndentDirection::Forward => 1,
            IndentDirection::Backward => -1,
        }
    }
}

impl fmt::Display for IndentDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentDirection::Forward => f.write_str("indent"),
            IndentDirection::Backward => f.write_str("outdent"),
        }
    }
}

/// Notification delivered once a command's transaction has committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AfterExecute {
    pub direction: IndentDirection,
    /// Every block the command re-indented or took out of the list, in document order
    pub affected_blocks: Vec<BlockPos>,
}

/// Collaborator reacting to executed commands.
///
/// Closures of the form `FnMut(&mut S, &AfterExecute)` implement this.
pub trait ExecuteObserver<S> {
    fn after_execute(&mut self, store: &mut S, event: &AfterExecute);
}

impl<S, F> ExecuteObserver<S> for F
where
    F: FnMut(&mut S, &AfterExecute),
{
    fn after_execute(&mut self, store: &mut S, event: &AfterExecute) {
        self(store, event)
    }
}

/// The indent and outdent command pair an editor registers
pub struct ListCommands<S> {
    pub indent: IndentCommand<S>,
    pub outdent: IndentCommand<S>,
}

impl<S: BlockStore> ListCommands<S> {
    pub fn new() -> Self {
        Self {
            indent: IndentCommand::new(IndentDirection::Forward),
            outdent: IndentCommand::new(IndentDirection::Backward),
        }
    }

    /// Build both commands from user configuration.
    ///
    /// With `normalize_list_types` set, both commands get a
    /// [`ListTypeNormalizer`] observer.
    pub fn from_config(config: &Config) -> Self {
        let settings = &config.commands;
        let mut commands = Self {
            indent: IndentCommand::with_settings(IndentDirection::Forward, settings),
            outdent: IndentCommand::with_settings(IndentDirection::Backward, settings),
        };
        if settings.normalize_list_types {
            commands.indent.add_observer(ListTypeNormalizer);
            commands.outdent.add_observer(ListTypeNormalizer);
        }
        commands
    }

    pub fn get(&self, direction: IndentDirection) -> &IndentCommand<S> {
        match direction {
            IndentDirection::Forward => &self.indent,
            IndentDirection::Backward => &self.outdent,
        }
    }

    pub fn get_mut(&mut self, direction: IndentDirection) -> &mut IndentCommand<S> {
        match direction {
            IndentDirection::Forward => &mut self.indent,
            IndentDirection::Backward => &mut self.outdent,
        }
    }

    /// Recompute enablement of both commands for the store's current selection
    pub fn refresh(&mut self, store: &S) {
        self.indent.refresh(store);
        self.outdent.refresh(store);
    }

    /// Execute the command for `direction` if it is enabled.
    ///
    /// Refreshes enablement first, so a disabled command is never run.
    pub fn execute(&mut self, direction: IndentDirection, store: &mut S) -> Option<AfterExecute> {
        let command = self.get_mut(direction);
        command.refresh(store);
        if !command.is_enabled() {
            log::debug!("{direction} is disabled for the current selection");
            return None;
        }
        command.execute(store)
    }
}

impl<S: BlockStore> Default for ListCommands<S> {
    fn default() -> Self {
        Self::new()
    }
}
