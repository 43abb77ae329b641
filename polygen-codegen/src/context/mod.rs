//! Field and schema contexts.
//!
//! A context is an immutable, fully pre-computed description of a field or a
//! model, ready for direct template consumption:
//!
//! - [`FieldContext`] - one property with a type string per target language
//! - [`SchemaContext`] - one model with its ordered fields
//! - [`EnumContext`] - one shared enumeration schema
//! - [`ContextBuilder`] - fuses schema nodes, the type system and the detector
//! - [`ModelRegistry`] - the models and shared enums a document defines

mod enums;
mod field;
mod schema;

pub use enums::EnumContext;
pub use field::FieldContext;
use indexmap::{IndexMap, IndexSet};
use polygen_core::{
    FieldType, FormatType, TypeRef, TypeSystem, ref_target_name, to_pascal_case,
    to_screaming_snake_case,
};
use polygen_ir::{ApiDocument, SchemaNode};
pub use schema::SchemaContext;
use serde::Serialize;
use serde_json::Value;

/// Conversion of a context into a flat record for template engines.
pub trait Record: Serialize {
    /// Serialize into a JSON value with the context's fixed field list.
    fn to_record(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// The names a `$ref` may resolve to: object models and shared enums.
///
/// Schemas that produce no context (aliases, scalars) are never registered,
/// and the models phase removes schemas it had to skip, so a reference into
/// either one is reported as unresolved.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    names: IndexSet<String>,
    enums: IndexMap<String, SchemaNode>,
}

impl ModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every object model and shared enum a document defines.
    pub fn from_document(document: &ApiDocument) -> Self {
        let mut registry = Self::new();
        for (name, node) in &document.schemas {
            if is_enum_schema(node) {
                registry.register_enum(name.clone(), node.clone());
            } else if is_model_schema(name, node) {
                registry.register(name.clone());
            }
        }
        registry
    }

    /// Register a model name.
    pub fn register(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    /// Register a shared enum schema.
    pub fn register_enum(&mut self, name: impl Into<String>, node: SchemaNode) {
        self.enums.insert(name.into(), node);
    }

    /// Forget a name, returning true if it was registered.
    pub fn remove(&mut self, name: &str) -> bool {
        self.names.shift_remove(name) | self.enums.shift_remove(name).is_some()
    }

    /// Check if a model or shared enum name is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name) || self.enums.contains_key(name)
    }

    /// Check if a name is a shared enum.
    pub fn is_enum(&self, name: &str) -> bool {
        self.enums.contains_key(name)
    }

    /// Get the generated type name for a defined model or enum.
    pub fn type_name(&self, name: &str) -> Option<String> {
        self.contains(name).then(|| model_type_name(name))
    }

    /// The shared enum a node references, with its schema key.
    pub fn referenced_enum(&self, node: &SchemaNode) -> Option<(&str, &SchemaNode)> {
        let target = ref_target_name(node.reference.as_deref()?);
        self.enums
            .get_key_value(target)
            .map(|(name, node)| (name.as_str(), node))
    }

    /// Iterate over model names, then shared enum names, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .chain(self.enums.keys())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len() + self.enums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.enums.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ModelRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
            enums: IndexMap::new(),
        }
    }
}

/// Returns true if a named schema becomes a model.
pub(crate) fn is_model_schema(name: &str, node: &SchemaNode) -> bool {
    node.reference.is_none() && resolve_field_type(node, name) == FieldType::Object
}

/// Returns true if a named schema is a shared enumeration.
pub(crate) fn is_enum_schema(node: &SchemaNode) -> bool {
    node.reference.is_none() && node.is_enum()
}

/// Builds [`FieldContext`] and [`SchemaContext`] values.
///
/// The builder owns a [`TypeSystem`] whose import accumulator is reset at the
/// start of every model.
#[derive(Debug)]
pub struct ContextBuilder<'a> {
    registry: &'a ModelRegistry,
    types: TypeSystem,
}

impl<'a> ContextBuilder<'a> {
    /// Create a builder resolving references against `registry`.
    pub fn new(registry: &'a ModelRegistry) -> Self {
        Self {
            registry,
            types: TypeSystem::new(),
        }
    }

    /// The registry references are resolved against.
    pub fn registry(&self) -> &ModelRegistry {
        self.registry
    }
}

/// Generated type name for a model key (e.g., "machine-sharing" -> "MachineSharing").
pub fn model_type_name(name: &str) -> String {
    to_pascal_case(name)
}

/// Generated type name for an enum declared on a field path.
///
/// A dotted path concatenates its capitalized segments ("Parent.field" ->
/// "ParentField"); a bare field name is simply capitalized.
pub fn enum_type_name(path: &str) -> String {
    path.split('.').map(to_pascal_case).collect()
}

/// Derive variant names for enum values, preferring explicit names when the
/// schema supplies one per value.
pub fn enum_variant_names(values: &[Value], explicit: &[String]) -> Vec<String> {
    if !explicit.is_empty() && explicit.len() == values.len() {
        return explicit.iter().map(|name| to_screaming_snake_case(name)).collect();
    }
    values
        .iter()
        .enumerate()
        .map(|(index, value)| variant_name(value, index))
        .collect()
}

fn variant_name(value: &Value, index: usize) -> String {
    let raw = match value {
        Value::String(s) => to_screaming_snake_case(s),
        Value::Number(n) => {
            let digits = n.to_string().replace('-', "MINUS_").replace('.', "_");
            format!("VALUE_{}", digits)
        }
        Value::Bool(b) => b.to_string().to_uppercase(),
        _ => String::new(),
    };
    if raw.is_empty() {
        format!("VALUE_{}", index)
    } else if raw.starts_with(|c: char| c.is_ascii_digit()) {
        format!("VALUE_{}", raw)
    } else {
        raw
    }
}

/// Resolve a node's declared kind, falling back to `any` for unknown kinds.
pub(crate) fn resolve_field_type(node: &SchemaNode, field: &str) -> FieldType {
    match node.declared_kind() {
        Some(kind) => FieldType::parse(kind).unwrap_or_else(|| {
            tracing::debug!(field, kind, "unknown schema kind, falling back to any");
            FieldType::Any
        }),
        None if node.reference.is_some() => FieldType::Object,
        None if !node.properties.is_empty() => FieldType::Object,
        None if node.items.is_some() => FieldType::Array,
        None => FieldType::Any,
    }
}

/// Resolve a node's format, ignoring unknown formats.
pub(crate) fn resolve_format(node: &SchemaNode, field: &str) -> Option<FormatType> {
    let format = node.format.as_deref()?;
    let parsed = FormatType::parse(format);
    if parsed.is_none() {
        tracing::debug!(field, format, "unknown format ignored");
    }
    parsed
}

/// Resolve a node to a [`TypeRef`].
///
/// References resolve to the generated model name, enumerations to
/// `enum_type` when one is given. Returns the missing target name when a
/// reference is not defined by the registry.
pub(crate) fn resolve_type_ref(
    registry: &ModelRegistry,
    node: &SchemaNode,
    field: &str,
    enum_type: Option<&str>,
) -> Result<TypeRef, String> {
    if let Some(reference) = node.reference.as_deref() {
        let target = ref_target_name(reference);
        return registry
            .type_name(target)
            .map(TypeRef::Named)
            .ok_or_else(|| target.to_string());
    }

    if node.is_enum()
        && let Some(name) = enum_type
    {
        return Ok(TypeRef::named(name));
    }

    let field_type = resolve_field_type(node, field);
    if field_type == FieldType::Array {
        return match node.items.as_deref() {
            Some(items) => Ok(TypeRef::array(resolve_type_ref(
                registry, items, field, enum_type,
            )?)),
            None => Ok(TypeRef::scalar(FieldType::Array, None)),
        };
    }

    Ok(TypeRef::scalar(field_type, resolve_format(node, field)))
}
