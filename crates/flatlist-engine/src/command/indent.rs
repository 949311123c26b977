use flatlist_config::CommandSettings;

use crate::command::{AfterExecute, ExecuteObserver, IndentDirection};
use crate::list::{
    Direction, SiblingQuery, expand_to_complete_items, is_first_block_of_item, nested_blocks_of,
    set_indent, sibling_at_same_indent, split_item_before,
};
use crate::model::BlockPos;
use crate::store::{BlockStore, BlockView};

/// Indents or outdents the selected list items, depending on the direction
/// fixed at construction.
///
/// ## Enablement
///
/// - Disabled when the selection does not start in a list.
/// - Outdent is otherwise always enabled: every list item can move up a level.
/// - Indent is disabled when the selection starts on a continuation block and
///   stays inside that one item.
/// - Indent otherwise needs a previous sibling at the same indent, of the same
///   `listType`, to become the new parent. A configured `max_indent` caps
///   the deepest resulting indent.
///
/// ## Execution
///
/// Within one transaction the selection is widened to whole items plus the
/// sub-items of the last one, then shifted by one level. Outdenting from a
/// continuation block of a single item instead splits that item in two and
/// changes no indent. Observers run only after the transaction has committed.
pub struct IndentCommand<S> {
    direction: IndentDirection,
    max_indent: Option<usize>,
    is_enabled: bool,
    observers: Vec<Box<dyn ExecuteObserver<S>>>,
}

impl<S: BlockStore> IndentCommand<S> {
    pub fn new(direction: IndentDirection) -> Self {
        Self {
            direction,
            max_indent: None,
            is_enabled: false,
            observers: Vec::new(),
        }
    }

    pub fn with_settings(direction: IndentDirection, settings: &CommandSettings) -> Self {
        Self {
            max_indent: settings.max_indent,
            ..Self::new(direction)
        }
    }

    pub fn direction(&self) -> IndentDirection {
        self.direction
    }

    /// Enablement as of the last [`refresh`](Self::refresh)
    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    pub fn refresh(&mut self, store: &S) {
        self.is_enabled = self.check_enabled(store);
    }

    /// Register a collaborator to run after every committed execution
    pub fn add_observer(&mut self, observer: impl ExecuteObserver<S> + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Whether the command can run on the store's current selection.
    ///
    /// Reads only; the store is never modified.
    pub fn check_enabled(&self, store: &S) -> bool {
        let mut blocks = store.selected_blocks();
        let Some(&first) = blocks.first() else {
            return false;
        };

        if !store.is_list_block(first) {
            return false;
        }

        if self.direction == IndentDirection::Backward {
            return true;
        }

        if starts_inside_single_item(store, &blocks) {
            return false;
        }

        expand_to_complete_items(store, &mut blocks);
        let first = blocks[0];
        let (Some(indent), Some(list_type)) = (store.list_indent(first), store.list_type(first))
        else {
            return false;
        };

        let query = SiblingQuery {
            indent,
            direction: Direction::Backward,
        };
        let Some(parent) = sibling_at_same_indent(store, store.previous(first), query) else {
            return false;
        };
        if store.list_type(parent) != Some(list_type) {
            return false;
        }

        match self.max_indent {
            Some(max_indent) => {
                let last = blocks[blocks.len() - 1];
                let deepest = blocks
                    .iter()
                    .copied()
                    .chain(nested_blocks_of(store, last))
                    .filter_map(|pos| store.list_indent(pos))
                    .max()
                    .unwrap_or(indent);
                deepest < max_indent
            }
            None => true,
        }
    }

    /// Apply the command to the store's current selection.
    ///
    /// Callers are expected to check enablement first. Returns the event that
    /// was delivered to observers, or `None` when no block's indent or list
    /// membership changed.
    pub fn execute(&mut self, store: &mut S) -> Option<AfterExecute> {
        let selected = store.selected_blocks();
        if selected.is_empty() {
            return None;
        }
        if !self.check_enabled(store) {
            log::warn!(
                "{} executed while disabled (selection starts at block {})",
                self.direction,
                selected[0].index()
            );
        }

        let direction = self.direction;
        let affected_blocks = store.change(|writer| {
            if starts_inside_single_item(&*writer, &selected) {
                // A continuation cannot be indented without its item; outdenting
                // it detaches it into an item of its own instead.
                if direction == IndentDirection::Backward
                    && let Some(new_id) = split_item_before(writer, selected[0])
                {
                    log::debug!(
                        "{direction}: split item at block {} into {new_id}",
                        selected[0].index()
                    );
                }
                return None;
            }

            let mut blocks = selected;
            expand_to_complete_items(&*writer, &mut blocks);
            let last = blocks[blocks.len() - 1];
            let nested: Vec<BlockPos> = nested_blocks_of(&*writer, last).collect();
            blocks.extend(nested);

            Some(set_indent(writer, &blocks, direction.indent_by()))
        })?;

        if affected_blocks.is_empty() {
            log::debug!("{direction}: no block changed");
            return None;
        }
        log::debug!("{direction}: {} blocks affected", affected_blocks.len());
        let event = AfterExecute {
            direction,
            affected_blocks,
        };
        for observer in &mut self.observers {
            observer.after_execute(store, &event);
        }
        Some(event)
    }
}

/// Whether the selection begins on a continuation block and never leaves
/// that block's item.
fn starts_inside_single_item<V: BlockView + ?Sized>(view: &V, blocks: &[BlockPos]) -> bool {
    let Some(&first) = blocks.first() else {
        return false;
    };
    if is_first_block_of_item(view, first) {
        return false;
    }
    let id = view.list_item_id(first);
    blocks.iter().all(|&pos| view.list_item_id(pos) == id)
}
