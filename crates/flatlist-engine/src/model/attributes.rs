use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier shared by every block of one list item
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListItemId(pub Uuid);

impl ListItemId {
    /// Generate a random (v4) identifier.
    ///
    /// Use [`crate::list::fresh_item_id`] when the id must not collide with
    /// ids already present in a document.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Deterministic identifier, for editors with their own id scheme
    pub fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }
}

impl fmt::Display for ListItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of list an item belongs to
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Ordered,
    #[default]
    Unordered,
    Todo,
}

impl ListType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListType::Ordered => "ordered",
            ListType::Unordered => "unordered",
            ListType::Todo => "todo",
        }
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name of a block attribute.
///
/// The three list keys are first-class; anything else an embedding editor
/// stores on a block (alignment, heading level, ...) goes through `Named`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AttributeKey {
    ListItemId,
    ListIndent,
    ListType,
    Named(String),
}

impl AttributeKey {
    /// Keys that together encode list membership
    pub const LIST_KEYS: [AttributeKey; 3] = [
        AttributeKey::ListItemId,
        AttributeKey::ListIndent,
        AttributeKey::ListType,
    ];

    pub fn named(name: impl Into<String>) -> Self {
        AttributeKey::Named(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            AttributeKey::ListItemId => "listItemId",
            AttributeKey::ListIndent => "listIndent",
            AttributeKey::ListType => "listType",
            AttributeKey::Named(name) => name,
        }
    }

    pub fn is_list_key(&self) -> bool {
        !matches!(self, AttributeKey::Named(_))
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value stored under an [`AttributeKey`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeValue {
    ItemId(ListItemId),
    Indent(usize),
    Type(ListType),
    Text(String),
    Flag(bool),
}

impl AttributeValue {
    pub fn as_item_id(&self) -> Option<ListItemId> {
        match self {
            AttributeValue::ItemId(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_indent(&self) -> Option<usize> {
        match self {
            AttributeValue::Indent(indent) => Some(*indent),
            _ => None,
        }
    }

    pub fn as_list_type(&self) -> Option<ListType> {
        match self {
            AttributeValue::Type(list_type) => Some(*list_type),
            _ => None,
        }
    }
}

impl From<ListItemId> for AttributeValue {
    fn from(id: ListItemId) -> Self {
        AttributeValue::ItemId(id)
    }
}

impl From<ListType> for AttributeValue {
    fn from(list_type: ListType) -> Self {
        AttributeValue::Type(list_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(ListItemId::random(), ListItemId::random());
    }

    #[test]
    fn test_attribute_key_names_match_document_model() {
        let names: Vec<&str> = AttributeKey::LIST_KEYS.iter().map(|k| k.name()).collect();
        assert_eq!(names, vec!["listItemId", "listIndent", "listType"]);
        assert_eq!(AttributeKey::named("alignment").name(), "alignment");
        assert!(!AttributeKey::named("alignment").is_list_key());
    }

    #[test]
    fn test_value_accessors_reject_other_variants() {
        let value = AttributeValue::Indent(2);
        assert_eq!(value.as_indent(), Some(2));
        assert_eq!(value.as_item_id(), None);
        assert_eq!(value.as_list_type(), None);
    }

    #[test]
    fn test_list_type_display_and_default() {
        assert_eq!(ListType::Todo.to_string(), "todo");
        assert_eq!(ListType::default(), ListType::Unordered);
    }
}
