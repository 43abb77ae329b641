//! Core operations.
//!
//! This module contains the business logic for polygen commands,
//! separated from CLI argument parsing and output rendering.

pub mod build;
pub mod check;
pub mod document;
pub mod explain;

pub use build::build;
pub use check::check;
pub use document::load_document;
pub use explain::explain;

#[cfg(test)]
pub(crate) mod fixtures {
    use polygen_ir::ApiDocument;

    pub const PETSTORE: &str = r##"{
        "title": "Petstore",
        "version": "1.0.0",
        "schemas": {
            "Pet": {
                "type": "object",
                "properties": {
                    "id": { "type": "integer" },
                    "name": { "type": "string" },
                    "bornAt": { "type": "string", "format": "date-time" },
                    "kind": { "$ref": "#/components/schemas/PetKind" }
                },
                "required": ["id", "name"]
            },
            "PetKind": { "type": "string", "enum": ["dog", "cat"] },
            "Broken": {
                "type": "object",
                "properties": { "link": { "$ref": "#/components/schemas/Missing" } }
            }
        },
        "operations": [
            {
                "operationId": "getPet",
                "path": "/pets/{petId}",
                "parameters": [
                    { "name": "petId", "in": "path", "schema": { "type": "integer" } },
                    { "name": "fields", "in": "query", "schema": { "type": "string" } }
                ]
            }
        ]
    }"##;

    pub fn petstore() -> ApiDocument {
        ApiDocument::from_json(PETSTORE).unwrap()
    }
}
