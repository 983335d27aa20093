//! The in-memory node model and its wire form.
//!
//! One `GraphNode` corresponds to one syntax-tree element or one filesystem
//! entry (project root, directory, file). A node is fully populated before
//! it reaches the emitter, serialized exactly once, and not retained; the
//! graph lives only in the output stream.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::kind::{CommonKind, Kind};

/// A typed property value as supplied by the walker.
///
/// Serialization always lowers the value to its textual form; the `type`
/// field preserves the semantic kind for downstream consumers.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Str(String),
    Number(i64),
    Bool(bool),
}

impl PropertyValue {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
        }
    }

    fn render(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<usize> for PropertyValue {
    fn from(value: usize) -> Self {
        Self::Number(value as i64)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// One `{type, value}` property entry on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "type")]
    pub value_type: String,
    pub value: String,
}

/// One entry in the output graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub common_kind: CommonKind,
    pub key: String,
    pub kind: Kind,
    /// Key of the enclosing node; `""` for the run's root.
    pub parent_key: String,
    /// Insertion-ordered so emitted property order is deterministic.
    pub properties: IndexMap<String, Property>,
    /// Keys of earlier siblings under the same parent, in emission order.
    pub older_siblings: Vec<String>,
    /// Child keys accumulated while this node sits on the ancestor stack.
    /// Never serialized; relationships on the wire come from `parentKey`.
    #[serde(skip)]
    pub children: Vec<String>,
}

impl GraphNode {
    pub fn new(key: String, kind: Kind, common_kind: CommonKind) -> Self {
        Self {
            common_kind,
            key,
            kind,
            parent_key: String::new(),
            properties: IndexMap::new(),
            older_siblings: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Store a typed property, lowered to its `{type, value}` wire form.
    pub fn set_property(&mut self, name: &str, value: impl Into<PropertyValue>) {
        let value = value.into();
        self.properties.insert(
            name.to_string(),
            Property {
                value_type: value.type_name().to_string(),
                value: value.render(),
            },
        );
    }

    /// True iff this node is the run's root.
    pub fn is_root(&self) -> bool {
        self.parent_key.is_empty()
    }
}
