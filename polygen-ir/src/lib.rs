//! Input types for the polygen code generator.
//!
//! This crate defines the schema tree consumed by code generation. Nodes are
//! produced by schema ingestion and are never mutated by generators.
//!
//! # Architecture
//!
//! ```text
//! OpenAPI document → ingestion → polygen-ir (schema tree) → polygen-codegen (contexts)
//! ```

mod document;
mod operation;
mod schema;
mod serde_helpers;

pub use document::ApiDocument;
pub use operation::{OperationNode, ParameterNode, RequestBodyNode};
pub use schema::SchemaNode;
pub use serde_helpers::{ExclusiveBound, SchemaKind};
