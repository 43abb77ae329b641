//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs document-level lints
//! - [`ModelsPhase`] - builds one model context per object schema
//! - [`OperationsPhase`] - builds one context per operation

mod models;
mod operations;
mod validate;

pub use models::ModelsPhase;
pub use operations::OperationsPhase;
pub use validate::{
    DuplicateOperationIdLint, Lint, LintInfo, MissingOperationIdLint, PathParameterLint,
    ValidatePhase,
};
