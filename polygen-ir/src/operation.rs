//! API operation inputs.

use serde::Deserialize;

use crate::SchemaNode;

/// One API operation (a method on a path).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationNode {
    /// Unique operation identifier.
    pub operation_id: String,
    /// HTTP method (lowercase).
    #[serde(default = "default_method")]
    pub method: String,
    /// URL path template.
    #[serde(default)]
    pub path: String,
    pub summary: Option<String>,
    /// Parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<ParameterNode>,
    /// Primary request body (create/replace-style operations).
    pub request_body: Option<RequestBodyNode>,
    /// Separate partial-update body.
    #[serde(default, alias = "x-patch-body")]
    pub patch_body: Option<RequestBodyNode>,
    #[serde(default)]
    pub deprecated: bool,
}

fn default_method() -> String {
    "get".to_string()
}

/// A path, query, header or cookie parameter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterNode {
    pub name: String,
    /// Declared location (`path`, `query`, `header`, `cookie`).
    #[serde(rename = "in")]
    pub location: String,
    #[serde(default)]
    pub required: bool,
    pub schema: Option<SchemaNode>,
    pub description: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
}

impl ParameterNode {
    /// Create a parameter.
    pub fn new(name: impl Into<String>, location: impl Into<String>, schema: SchemaNode) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            schema: Some(schema),
            ..Self::default()
        }
    }

    /// Mark as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// A request body referencing a named model.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBodyNode {
    /// Media type (`application/json`, `multipart/form-data`, ...).
    pub content_type: Option<String>,
    /// Referenced model name.
    #[serde(alias = "$ref")]
    pub model: Option<String>,
    #[serde(default)]
    pub required: bool,
    pub description: Option<String>,
}

impl RequestBodyNode {
    /// Create a body for a model with the given media type.
    pub fn new(model: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            content_type: Some(content_type.into()),
            model: Some(model.into()),
            ..Self::default()
        }
    }

    /// Mark as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}
