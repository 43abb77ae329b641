//! Serde helpers for schema keywords with more than one wire shape.

use serde::Deserialize;

/// The `type` keyword: a single kind, or a list of kinds (OpenAPI 3.1).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SchemaKind {
    Single(String),
    Multiple(Vec<String>),
}

impl SchemaKind {
    /// The first non-null kind.
    pub fn primary(&self) -> Option<&str> {
        match self {
            SchemaKind::Single(kind) => Some(kind.as_str()),
            SchemaKind::Multiple(kinds) => kinds
                .iter()
                .map(String::as_str)
                .find(|kind| *kind != "null")
                .or_else(|| kinds.first().map(String::as_str)),
        }
    }

    /// Returns true if the kind list admits `null` alongside another kind.
    pub fn admits_null(&self) -> bool {
        match self {
            SchemaKind::Single(_) => false,
            SchemaKind::Multiple(kinds) => kinds.len() > 1 && kinds.iter().any(|k| k == "null"),
        }
    }
}

/// `exclusiveMinimum`/`exclusiveMaximum`: a flag (OpenAPI 3.0) or a bound (3.1).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ExclusiveBound {
    Flag(bool),
    Value(f64),
}

impl ExclusiveBound {
    /// Resolve to a numeric bound, using the inclusive bound for the flag form.
    pub fn resolve(&self, inclusive: Option<f64>) -> Option<f64> {
        match self {
            ExclusiveBound::Flag(true) => inclusive,
            ExclusiveBound::Flag(false) => None,
            ExclusiveBound::Value(value) => Some(*value),
        }
    }
}
