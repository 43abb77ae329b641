//! Errors raised while building contexts.
//!
//! Each error is fatal for one schema or one operation only. The pipeline
//! records it as a diagnostic and continues with the rest of the batch.

use thiserror::Error;

/// Failure to build a field or schema context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// A field references a model the document never defines.
    #[error("field `{field}` references undefined model `{target}`")]
    UnresolvedReference { field: String, target: String },

    /// A named schema is not an object and cannot become a model.
    #[error("schema `{name}` is not an object")]
    NotAnObject { name: String },

    /// A named schema lists no values and cannot become a shared enum.
    #[error("schema `{name}` is not an enum")]
    NotAnEnum { name: String },
}

/// Failure to build an operation's parameter context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    /// A request body is declared without the model it carries.
    #[error("operation `{operation}` declares a request body without a model")]
    MissingBodyMetadata { operation: String },

    /// A parameter has a location other than path, query, header or cookie.
    #[error("parameter `{parameter}` of operation `{operation}` has unknown location `{location}`")]
    UnknownLocation {
        operation: String,
        parameter: String,
        location: String,
    },

    /// A parameter or body references a model the document never defines.
    #[error("operation `{operation}` references undefined model `{target}`")]
    UnresolvedReference { operation: String, target: String },
}
