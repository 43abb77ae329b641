//! Shared enumeration context.

use polygen_core::{FieldType, FormatType, LanguageTypes, TypeRef};
use polygen_ir::SchemaNode;
use serde::Serialize;
use serde_json::Value;

use super::{
    ContextBuilder, Record, enum_variant_names, is_enum_schema, model_type_name,
    resolve_field_type, resolve_format,
};
use crate::error::ContextError;

/// A top-level enum schema that fields refer to with `$ref`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumContext {
    /// Generated type name.
    pub name: String,
    /// Schema key as written in the document.
    pub original_name: String,
    pub description: Option<String>,
    /// Kind of the enum values.
    pub field_type: FieldType,
    pub format_type: Option<FormatType>,
    /// Underlying type per language.
    #[serde(flatten)]
    pub types: LanguageTypes,
    pub values: Vec<Value>,
    pub variant_names: Vec<String>,
    pub deprecated: bool,
}

impl Record for EnumContext {}

impl EnumContext {
    /// Variant names paired with their values.
    pub fn variants(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variant_names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

impl ContextBuilder<'_> {
    /// Build the context for a named enum schema.
    pub fn build_enum(
        &mut self,
        name: &str,
        node: &SchemaNode,
    ) -> Result<EnumContext, ContextError> {
        if !is_enum_schema(node) {
            return Err(ContextError::NotAnEnum {
                name: name.to_string(),
            });
        }

        self.types.reset();
        let field_type = match resolve_field_type(node, name) {
            FieldType::Any => FieldType::String,
            kind => kind,
        };
        let format_type = resolve_format(node, name);
        let types = self
            .types
            .resolve_all(&TypeRef::scalar(field_type, format_type), false, false);

        Ok(EnumContext {
            name: model_type_name(name),
            original_name: name.to_string(),
            description: node.description.clone(),
            field_type,
            format_type,
            types,
            values: node.enum_values.clone(),
            variant_names: enum_variant_names(&node.enum_values, &node.enum_names),
            deprecated: node.deprecated,
        })
    }
}
