//! Schema tree nodes.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::serde_helpers::{ExclusiveBound, SchemaKind};

/// One parsed, language-agnostic schema fragment (object, array or scalar).
///
/// Nodes are produced by schema ingestion and consumed read-only. The declared
/// kind is kept as written so that kinds the generator does not know about
/// survive ingestion and can degrade gracefully later.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
    /// Schema or property name (filled in by [`SchemaNode::normalize_names`]).
    #[serde(default)]
    pub name: String,
    /// Declared kind.
    #[serde(rename = "type")]
    pub kind: Option<SchemaKind>,
    /// Format specifier.
    pub format: Option<String>,
    /// Object properties in declaration order.
    #[serde(default)]
    pub properties: IndexMap<String, SchemaNode>,
    /// Required property names.
    #[serde(default)]
    pub required: Vec<String>,
    /// Item schema for arrays.
    pub items: Option<Box<SchemaNode>>,
    /// Allowed values.
    #[serde(rename = "enum", default)]
    pub enum_values: Vec<Value>,
    /// Explicit variant names, parallel to `enum_values`.
    #[serde(default, alias = "x-enum-varnames", alias = "x-enumNames")]
    pub enum_names: Vec<String>,
    /// Reference target (`"#/components/schemas/Pet"` or `"Pet"`).
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub write_only: bool,
    pub description: Option<String>,
    pub example: Option<Value>,
    pub default: Option<Value>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub exclusive_minimum: Option<ExclusiveBound>,
    pub exclusive_maximum: Option<ExclusiveBound>,
    pub multiple_of: Option<f64>,
    pub pattern: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
    /// Model is used as a request payload.
    #[serde(default)]
    pub is_request: bool,
    /// Model is used as a response payload.
    #[serde(default)]
    pub is_response: bool,
    /// Model is a partial-update payload.
    #[serde(default)]
    pub is_patch: bool,
}

impl SchemaNode {
    /// Create a node of the given declared kind.
    pub fn of_kind(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(SchemaKind::Single(kind.into())),
            ..Self::default()
        }
    }

    /// Create a reference node.
    pub fn reference(target: impl Into<String>) -> Self {
        Self {
            reference: Some(target.into()),
            ..Self::default()
        }
    }

    /// Create an array node.
    pub fn array_of(items: SchemaNode) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of_kind("array")
        }
    }

    /// Create an object node from `(name, node)` pairs, keeping their order.
    pub fn object(
        properties: impl IntoIterator<Item = (impl Into<String>, SchemaNode)>,
        required: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let mut node = Self {
            properties: properties
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
            required: required.into_iter().map(Into::into).collect(),
            ..Self::of_kind("object")
        };
        node.normalize_names();
        node
    }

    /// Set the name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the allowed values.
    pub fn with_enum(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.enum_values = values.into_iter().collect();
        self
    }

    /// Mark as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Mark as read-only.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Mark as write-only.
    pub fn write_only(mut self) -> Self {
        self.write_only = true;
        self
    }

    /// The declared kind as written, if any.
    pub fn declared_kind(&self) -> Option<&str> {
        self.kind.as_ref().and_then(SchemaKind::primary)
    }

    /// Nullable through the flag or through a `["T", "null"]` kind list.
    pub fn is_nullable(&self) -> bool {
        self.nullable || self.kind.as_ref().is_some_and(SchemaKind::admits_null)
    }

    /// Returns true if the node lists allowed values.
    pub fn is_enum(&self) -> bool {
        !self.enum_values.is_empty()
    }

    /// Resolved exclusive lower bound.
    pub fn exclusive_minimum_value(&self) -> Option<f64> {
        self.exclusive_minimum
            .and_then(|bound| bound.resolve(self.minimum))
    }

    /// Resolved exclusive upper bound.
    pub fn exclusive_maximum_value(&self) -> Option<f64> {
        self.exclusive_maximum
            .and_then(|bound| bound.resolve(self.maximum))
    }

    /// Check if a property is listed as required.
    pub fn is_required(&self, property: &str) -> bool {
        self.required.iter().any(|name| name == property)
    }

    /// Set every nested property name from its key, recursively.
    pub fn normalize_names(&mut self) {
        for (key, property) in self.properties.iter_mut() {
            if property.name.is_empty() {
                property.name = key.clone();
            }
            property.normalize_names();
        }
        if let Some(items) = self.items.as_deref_mut() {
            items.normalize_names();
        }
    }
}
