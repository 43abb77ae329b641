//! Context building for multi-language API client generation.
//!
//! This crate turns an [`ApiDocument`](polygen_ir::ApiDocument) into
//! immutable, template-ready contexts for Python, TypeScript, Zod, Go and
//! Protocol Buffers clients.
//!
//! # Module Organization
//!
//! - [`detector`] - UI and validation hints inferred from field names and types
//! - [`context`] - Field and model contexts ([`FieldContext`], [`SchemaContext`])
//! - [`params`] - Operation parameters and per-language call signatures
//! - [`mappers`] - Go structs and Protocol Buffers messages
//! - [`language`] - Per-language naming conventions
//! - [`pipeline`] - Batch orchestration and diagnostics

pub mod context;
pub mod detector;
pub mod error;
pub mod language;
pub mod mappers;
pub mod params;
pub mod pipeline;

pub use context::{
    ContextBuilder, EnumContext, FieldContext, ModelRegistry, Record, SchemaContext,
};
pub use detector::{FieldMeta, FieldSignals, InputType, ValidationRule, detect};
pub use error::{ContextError, OperationError};
pub use params::{
    BodyContext, OperationParamsBuilder, OperationParamsContext, ParamContext, ParamLocation,
    SignatureContext,
};
pub use pipeline::{CompilationContext, Diagnostic, OperationContext, Pipeline, Severity};
