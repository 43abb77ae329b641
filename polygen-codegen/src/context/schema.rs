//! Per-model context.

use std::collections::BTreeMap;

use polygen_core::Language;
use polygen_ir::SchemaNode;
use serde::Serialize;

use super::{ContextBuilder, FieldContext, Record, is_model_schema, model_type_name};
use crate::error::ContextError;

/// Everything a template needs to render one model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaContext {
    /// Generated type name.
    pub name: String,
    /// Schema key as written in the document.
    pub original_name: String,
    pub description: Option<String>,
    pub is_request: bool,
    pub is_response: bool,
    pub is_patch: bool,
    pub deprecated: bool,
    /// Fields in declaration order.
    pub fields: Vec<FieldContext>,
    pub required_fields: Vec<String>,
    pub has_required_fields: bool,
    pub has_optional_fields: bool,
    pub has_sensitive_fields: bool,
    pub has_readonly_fields: bool,
    pub field_count: usize,
    /// Import lines needed by this model's fields, per language.
    pub imports: BTreeMap<Language, Vec<String>>,
}

impl Record for SchemaContext {}

impl SchemaContext {
    /// Look up a field by its original name.
    pub fn field(&self, original_name: &str) -> Option<&FieldContext> {
        self.fields
            .iter()
            .find(|field| field.original_name == original_name)
    }

    /// Fields declaring an inline enumeration. Shared enums referenced with
    /// `$ref` are built once as [`EnumContext`](super::EnumContext) values.
    pub fn enum_fields(&self) -> impl Iterator<Item = &FieldContext> {
        self.fields
            .iter()
            .filter(|field| field.is_enum && !field.is_shared_enum())
    }

    /// Import lines for one language.
    pub fn imports_for(&self, language: Language) -> &[String] {
        self.imports
            .get(&language)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl ContextBuilder<'_> {
    /// Build the context for a named object schema.
    ///
    /// Properties are visited in declaration order. The import accumulator is
    /// reset first, so the snapshot holds only what this model needs.
    pub fn build_schema(
        &mut self,
        name: &str,
        node: &SchemaNode,
    ) -> Result<SchemaContext, ContextError> {
        if !is_model_schema(name, node) {
            return Err(ContextError::NotAnObject {
                name: name.to_string(),
            });
        }

        self.types.reset();
        let type_name = model_type_name(name);

        let fields = node
            .properties
            .iter()
            .map(|(key, property)| {
                self.field(Some(&type_name), key, property, node.is_required(key))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let required_fields = fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.original_name.clone())
            .collect();

        Ok(SchemaContext {
            name: type_name,
            original_name: name.to_string(),
            description: node.description.clone(),
            is_request: node.is_request,
            is_response: node.is_response,
            is_patch: node.is_patch,
            deprecated: node.deprecated,
            has_required_fields: fields.iter().any(|field| field.required),
            has_optional_fields: fields.iter().any(|field| field.optional),
            has_sensitive_fields: fields.iter().any(|field| field.sensitive),
            has_readonly_fields: fields.iter().any(|field| field.readonly),
            field_count: fields.len(),
            required_fields,
            fields,
            imports: self.types.import_snapshot(),
        })
    }
}
