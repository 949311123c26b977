use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{AttributeKey, AttributeValue, ListItemId, ListType};

/// Position of a block in the document's flat sequence.
///
/// Positions double as arena indices: the core never inserts or removes
/// blocks, so a position stays valid for a whole command execution.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockPos(pub usize);

impl BlockPos {
    pub fn index(self) -> usize {
        self.0
    }

    /// Position directly before this one, if any
    pub fn prev(self) -> Option<BlockPos> {
        self.0.checked_sub(1).map(BlockPos)
    }

    /// Position directly after this one (may be past the end of the document)
    pub fn next(self) -> BlockPos {
        BlockPos(self.0 + 1)
    }
}

/// One paragraph-level unit of document content
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Content payload; opaque to the list engine
    pub text: String,
    attributes: BTreeMap<AttributeKey, AttributeValue>,
}

impl Block {
    /// A block outside any list
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// A block belonging to list item `id` at `indent`
    pub fn list_item(
        text: impl Into<String>,
        id: ListItemId,
        indent: usize,
        list_type: ListType,
    ) -> Self {
        Self::paragraph(text)
            .with_attribute(AttributeKey::ListItemId, id)
            .with_attribute(AttributeKey::ListIndent, AttributeValue::Indent(indent))
            .with_attribute(AttributeKey::ListType, list_type)
    }

    pub fn with_attribute(mut self, key: AttributeKey, value: impl Into<AttributeValue>) -> Self {
        self.set_attribute(key, value.into());
        self
    }

    pub fn attribute(&self, key: &AttributeKey) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    pub fn has_attribute(&self, key: &AttributeKey) -> bool {
        self.attributes.contains_key(key)
    }

    pub fn set_attribute(&mut self, key: AttributeKey, value: AttributeValue) {
        self.attributes.insert(key, value);
    }

    pub fn remove_attribute(&mut self, key: &AttributeKey) -> Option<AttributeValue> {
        self.attributes.remove(key)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&AttributeKey, &AttributeValue)> {
        self.attributes.iter()
    }

    /// Presence of `listItemId` is what makes a block part of a list.
    pub fn is_list_block(&self) -> bool {
        self.list_item_id().is_some()
    }

    pub fn list_item_id(&self) -> Option<ListItemId> {
        self.attribute(&AttributeKey::ListItemId)
            .and_then(AttributeValue::as_item_id)
    }

    /// Indent of a list block; a list block without `listIndent` sits at 0.
    pub fn list_indent(&self) -> Option<usize> {
        if !self.is_list_block() {
            return None;
        }
        Some(
            self.attribute(&AttributeKey::ListIndent)
                .and_then(AttributeValue::as_indent)
                .unwrap_or(0),
        )
    }

    /// Type of a list block; a list block without `listType` is unordered.
    pub fn list_type(&self) -> Option<ListType> {
        if !self.is_list_block() {
            return None;
        }
        Some(
            self.attribute(&AttributeKey::ListType)
                .and_then(AttributeValue::as_list_type)
                .unwrap_or_default(),
        )
    }
}
