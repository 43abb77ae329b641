//! The ingested API document.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{OperationNode, SchemaNode};

/// A whole API description: named models plus operations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiDocument {
    pub title: Option<String>,
    pub version: Option<String>,
    /// Named schemas in declaration order.
    #[serde(default)]
    pub schemas: IndexMap<String, SchemaNode>,
    #[serde(default)]
    pub operations: Vec<OperationNode>,
}

impl ApiDocument {
    /// Parse a document from JSON and fill in node names.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        let mut document: ApiDocument = serde_json::from_str(content)?;
        document.normalize_names();
        Ok(document)
    }

    /// Set every schema and property name from its key.
    pub fn normalize_names(&mut self) {
        for (key, schema) in self.schemas.iter_mut() {
            if schema.name.is_empty() {
                schema.name = key.clone();
            }
            schema.normalize_names();
        }
        for operation in &mut self.operations {
            for parameter in &mut operation.parameters {
                if let Some(schema) = parameter.schema.as_mut()
                    && schema.name.is_empty()
                {
                    schema.name = parameter.name.clone();
                }
            }
        }
    }

    /// Names of all defined schemas.
    pub fn schema_names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_normalizes_names() {
        let document = ApiDocument::from_json(
            r#"{
                "schemas": {
                    "User": {
                        "type": "object",
                        "properties": { "email": { "type": "string" } }
                    }
                },
                "operations": [
                    {
                        "operationId": "getUser",
                        "parameters": [{ "name": "id", "in": "path", "schema": { "type": "integer" } }]
                    }
                ]
            }"#,
        )
        .unwrap();

        let user = &document.schemas["User"];
        assert_eq!(user.name, "User");
        assert_eq!(user.properties["email"].name, "email");
        assert_eq!(
            document.operations[0].parameters[0]
                .schema
                .as_ref()
                .map(|s| s.name.as_str()),
            Some("id")
        );
        assert_eq!(document.schema_names().collect::<Vec<_>>(), ["User"]);
    }
}
