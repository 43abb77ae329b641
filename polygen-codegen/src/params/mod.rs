//! Operation parameter contexts and call signatures.
//!
//! [`OperationParamsBuilder`] classifies an operation's inputs by location,
//! builds at most two request bodies (full and patch) and computes the
//! required-first parameter order shared by every generated client. The
//! `for_<language>()` helpers on [`OperationParamsContext`] turn that order
//! into language-specific call signatures.

mod context;
mod signature;

pub use context::{
    BodyContext, OperationParamsContext, ParamContext, ParamLocation, SignatureBody,
};
use polygen_core::{FieldType, TypeSystem, header_to_param_name, ref_target_name};
use polygen_ir::{OperationNode, ParameterNode, RequestBodyNode, SchemaNode};
pub use signature::{GoParamsField, GoParamsStruct, SignatureContext};

use crate::{
    context::{ModelRegistry, resolve_field_type, resolve_format, resolve_type_ref},
    error::OperationError,
    language::{GO_NAMING, PYTHON_NAMING, TYPESCRIPT_NAMING},
};

/// Builds [`OperationParamsContext`] values.
#[derive(Debug)]
pub struct OperationParamsBuilder<'a> {
    registry: &'a ModelRegistry,
    types: TypeSystem,
}

impl<'a> OperationParamsBuilder<'a> {
    /// Create a builder resolving body models against `registry`.
    pub fn new(registry: &'a ModelRegistry) -> Self {
        Self {
            registry,
            types: TypeSystem::new(),
        }
    }

    /// Build the parameter context for one operation.
    ///
    /// An operation with no parameters and no body is valid and yields a
    /// context with every `has_*` flag false.
    pub fn build(
        &mut self,
        operation: &OperationNode,
    ) -> Result<OperationParamsContext, OperationError> {
        self.types.reset();
        let operation_id = operation.operation_id.as_str();

        let params = operation
            .parameters
            .iter()
            .map(|param| self.param(operation_id, param))
            .collect::<Result<Vec<_>, _>>()?;

        let body = operation
            .request_body
            .as_ref()
            .map(|body| self.body(operation_id, body))
            .transpose()?;
        let patch_body = operation
            .patch_body
            .as_ref()
            .map(|body| self.body(operation_id, body))
            .transpose()?;

        Ok(OperationParamsContext::new(
            operation_id,
            params,
            body,
            patch_body,
        ))
    }

    fn param(
        &mut self,
        operation_id: &str,
        node: &ParameterNode,
    ) -> Result<ParamContext, OperationError> {
        let location =
            ParamLocation::parse(&node.location).ok_or_else(|| OperationError::UnknownLocation {
                operation: operation_id.to_string(),
                parameter: node.name.clone(),
                location: node.location.clone(),
            })?;

        let fallback;
        let schema = match node.schema.as_ref() {
            Some(schema) => schema,
            None => {
                tracing::debug!(
                    operation = operation_id,
                    parameter = node.name.as_str(),
                    "parameter without schema, treating as string"
                );
                fallback = SchemaNode::of_kind("string");
                &fallback
            }
        };

        let name = node.name.as_str();
        let registry = self.registry;
        // A `$ref` to a shared enum takes its kind and values from the enum schema.
        let kind_node = registry.referenced_enum(schema).map_or(schema, |(_, target)| target);
        let field_type = resolve_field_type(kind_node, name);
        let type_ref = resolve_type_ref(registry, schema, name, None).map_err(|target| {
            OperationError::UnresolvedReference {
                operation: operation_id.to_string(),
                target,
            }
        })?;

        let required = node.required || location == ParamLocation::Path;
        let nullable = schema.is_nullable();
        let types = self.types.resolve_all(&type_ref, nullable, !required || nullable);

        let items = schema
            .items
            .as_deref()
            .filter(|_| field_type == FieldType::Array)
            .map(|items| registry.referenced_enum(items).map_or(items, |(_, target)| target));
        let item_types = type_ref
            .inner_type()
            .map(|inner| self.types.resolve_all(inner, false, false));
        let enum_values = match items {
            Some(items) if !items.enum_values.is_empty() => items.enum_values.clone(),
            _ => kind_node.enum_values.clone(),
        };

        let typescript_name = match location {
            ParamLocation::Header => TYPESCRIPT_NAMING.safe_name(&header_to_param_name(name)),
            _ => TYPESCRIPT_NAMING.param_name(name),
        };

        Ok(ParamContext {
            name: PYTHON_NAMING.param_name(name),
            original_name: name.to_string(),
            typescript_name,
            go_name: GO_NAMING.field_name(name),
            location,
            field_type,
            format_type: resolve_format(kind_node, name),
            types,
            required,
            nullable,
            has_default: schema.default.is_some(),
            default: schema.default.clone(),
            enum_values,
            pattern: schema.pattern.clone(),
            min_length: schema.min_length,
            max_length: schema.max_length,
            minimum: schema.minimum,
            maximum: schema.maximum,
            is_array: field_type == FieldType::Array,
            item_type: items.map(|items| resolve_field_type(items, name)),
            item_types,
            description: node.description.clone().or_else(|| schema.description.clone()),
            deprecated: node.deprecated || schema.deprecated,
        })
    }

    fn body(
        &self,
        operation_id: &str,
        node: &RequestBodyNode,
    ) -> Result<BodyContext, OperationError> {
        let model = node
            .model
            .as_deref()
            .ok_or_else(|| OperationError::MissingBodyMetadata {
                operation: operation_id.to_string(),
            })?;
        let target = ref_target_name(model);
        let model = self.registry.type_name(target).ok_or_else(|| {
            OperationError::UnresolvedReference {
                operation: operation_id.to_string(),
                target: target.to_string(),
            }
        })?;

        Ok(BodyContext::new(
            model,
            node.content_type
                .as_deref()
                .unwrap_or(BodyContext::DEFAULT_CONTENT_TYPE),
            node.required,
            node.description.clone(),
        ))
    }
}
