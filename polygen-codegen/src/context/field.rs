//! Per-field context.

use polygen_core::{FieldType, FormatType, LanguageTypes, TypeRef, ref_target_name, to_snake_case};
use polygen_ir::SchemaNode;
use serde::Serialize;
use serde_json::Value;

use super::{
    ContextBuilder, Record, enum_type_name, enum_variant_names, model_type_name,
    resolve_field_type, resolve_format, resolve_type_ref,
};
use crate::{
    detector::{FieldSignals, InputType, ValidationRule, detect},
    error::ContextError,
};

/// Everything a template needs to render one model property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldContext {
    /// snake_case name.
    pub name: String,
    /// Property name as written in the schema.
    pub original_name: String,
    #[serde(flatten)]
    pub types: LanguageTypes,
    pub field_type: FieldType,
    pub format_type: Option<FormatType>,
    pub description: Option<String>,
    pub example: Option<Value>,
    pub default: Option<Value>,
    pub required: bool,
    pub nullable: bool,
    /// `!required || nullable`.
    pub optional: bool,
    pub read_only: bool,
    pub write_only: bool,
    /// `read_only` or inferred from the name.
    pub readonly: bool,
    pub input_type: InputType,
    pub validation: Option<ValidationRule>,
    pub sensitive: bool,
    pub placeholder: Option<String>,
    pub autocomplete: Option<String>,
    pub pattern: Option<String>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub has_validation: bool,
    pub is_array: bool,
    pub is_object: bool,
    pub is_enum: bool,
    pub is_binary: bool,
    pub is_ref: bool,
    /// Generated name of the referenced model.
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    /// Generated enum type name, for enum fields and arrays of enums.
    pub enum_type: Option<String>,
    pub enum_values: Vec<Value>,
    pub enum_names: Vec<String>,
    pub item_type: Option<FieldType>,
    pub item_format: Option<FormatType>,
    /// Generated name of the model referenced by array items.
    pub item_ref: Option<String>,
    pub exclusive_minimum: Option<f64>,
    pub exclusive_maximum: Option<f64>,
    pub multiple_of: Option<f64>,
    pub deprecated: bool,
    /// The resolved language-agnostic type.
    #[serde(skip)]
    pub type_ref: TypeRef,
}

impl Record for FieldContext {}

impl FieldContext {
    /// Returns true if the enum type is a shared schema reached through `$ref`
    /// rather than declared inline on this field.
    pub fn is_shared_enum(&self) -> bool {
        self.is_enum && (self.reference.is_some() || self.item_ref.is_some())
    }

    /// The values of the enumeration this field declares, if any.
    pub fn enum_variants(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.enum_names
            .iter()
            .map(String::as_str)
            .zip(self.enum_values.iter())
    }
}

impl ContextBuilder<'_> {
    /// Build the context for a single field.
    ///
    /// Enumerations are named after the field alone; fields built as part of
    /// a model are named after the model and the field instead.
    pub fn build_field(
        &mut self,
        node: &SchemaNode,
        required: bool,
    ) -> Result<FieldContext, ContextError> {
        self.field(None, &node.name, node, required)
    }

    pub(super) fn field(
        &mut self,
        parent: Option<&str>,
        original_name: &str,
        node: &SchemaNode,
        required: bool,
    ) -> Result<FieldContext, ContextError> {
        let registry = self.registry;
        let shared = registry.referenced_enum(node);
        let kind_node = shared.map_or(node, |(_, target)| target);
        let field_type = resolve_field_type(kind_node, original_name);
        let format = resolve_format(kind_node, original_name);
        let items = node
            .items
            .as_deref()
            .filter(|_| field_type == FieldType::Array);
        let item_shared = items.and_then(|items| registry.referenced_enum(items));
        let item_kind_node = item_shared.map(|(_, target)| target).or(items);

        // A `$ref` to a shared enum keeps the enum's own type name.
        let (enum_source, enum_type) = match shared.or(item_shared) {
            Some((target, enum_node)) => (Some(enum_node), Some(model_type_name(target))),
            None => {
                let source = if node.is_enum() {
                    Some(node)
                } else {
                    items.filter(|items| items.is_enum())
                };
                let enum_type = source.map(|_| match parent {
                    Some(parent) => enum_type_name(&format!("{}.{}", parent, original_name)),
                    None => enum_type_name(original_name),
                });
                (source, enum_type)
            }
        };

        let type_ref = resolve_type_ref(registry, node, original_name, enum_type.as_deref())
            .map_err(|target| ContextError::UnresolvedReference {
                field: original_name.to_string(),
                target,
            })?;

        let nullable = node.is_nullable();
        let optional = !required || nullable;
        let types = self.types.resolve_all(&type_ref, nullable, optional);

        let meta = detect(&FieldSignals {
            name: original_name,
            field_type,
            format,
            read_only: node.read_only,
            write_only: node.write_only,
            is_enum: enum_source.is_some(),
        });

        let reference = self.reference_name(node);
        let item_ref = items.and_then(|items| self.reference_name(items));
        let pattern = node.pattern.clone().or(meta.pattern);
        let exclusive_minimum = node.exclusive_minimum_value();
        let exclusive_maximum = node.exclusive_maximum_value();

        let has_validation = node.min_length.is_some()
            || node.max_length.is_some()
            || node.minimum.is_some()
            || node.maximum.is_some()
            || exclusive_minimum.is_some()
            || exclusive_maximum.is_some()
            || node.multiple_of.is_some()
            || pattern.is_some()
            || meta.validation.is_some();

        let (enum_values, enum_names) = enum_source
            .map(|source| {
                (
                    source.enum_values.clone(),
                    enum_variant_names(&source.enum_values, &source.enum_names),
                )
            })
            .unwrap_or_default();

        Ok(FieldContext {
            name: to_snake_case(original_name),
            original_name: original_name.to_string(),
            types,
            field_type,
            format_type: format,
            description: node.description.clone(),
            example: node.example.clone(),
            default: node.default.clone(),
            required,
            nullable,
            optional,
            read_only: node.read_only,
            write_only: node.write_only,
            readonly: node.read_only || meta.readonly,
            input_type: meta.input_type,
            validation: meta.validation,
            sensitive: meta.sensitive,
            placeholder: meta.placeholder,
            autocomplete: meta.autocomplete,
            pattern,
            min_length: node.min_length,
            max_length: node.max_length,
            minimum: node.minimum,
            maximum: node.maximum,
            has_validation,
            is_array: field_type == FieldType::Array,
            is_object: field_type == FieldType::Object,
            is_enum: enum_source.is_some(),
            is_binary: format == Some(FormatType::Binary),
            is_ref: node.reference.is_some(),
            reference,
            enum_type,
            enum_values,
            enum_names,
            item_type: item_kind_node.map(|items| resolve_field_type(items, original_name)),
            item_format: item_kind_node.and_then(|items| resolve_format(items, original_name)),
            item_ref,
            exclusive_minimum,
            exclusive_maximum,
            multiple_of: node.multiple_of,
            deprecated: node.deprecated,
            type_ref,
        })
    }

    fn reference_name(&self, node: &SchemaNode) -> Option<String> {
        node.reference
            .as_deref()
            .and_then(|reference| self.registry.type_name(ref_target_name(reference)))
    }
}
