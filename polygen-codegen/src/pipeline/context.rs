//! State shared by pipeline phases.

use polygen_ir::ApiDocument;
use serde::Serialize;

use super::diagnostic::{Diagnostic, Severity};
use crate::{
    context::{EnumContext, ModelRegistry, Record, SchemaContext},
    params::OperationParamsContext,
};

/// One operation with its parameter context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationContext {
    pub operation_id: String,
    /// Lowercase HTTP method.
    pub method: String,
    pub path: String,
    pub summary: Option<String>,
    pub deprecated: bool,
    pub params: OperationParamsContext,
}

impl Record for OperationContext {}

/// Context passed through all pipeline phases.
///
/// Holds the input document, the models and operations built so far, and
/// every diagnostic recorded along the way.
#[derive(Debug)]
pub struct CompilationContext {
    pub document: ApiDocument,
    /// Names a `$ref` may resolve to. ModelsPhase removes skipped schemas.
    pub registry: ModelRegistry,
    /// Model contexts in document order (populated by ModelsPhase).
    pub models: Vec<SchemaContext>,
    /// Shared enum contexts in document order (populated by ModelsPhase).
    pub enums: Vec<EnumContext>,
    /// Operation contexts in document order (populated by OperationsPhase).
    pub operations: Vec<OperationContext>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context from a document.
    pub fn new(document: ApiDocument) -> Self {
        Self {
            registry: ModelRegistry::from_document(&document),
            document,
            models: Vec::new(),
            enums: Vec::new(),
            operations: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Look up a built model by its schema key.
    pub fn model(&self, original_name: &str) -> Option<&SchemaContext> {
        self.models
            .iter()
            .find(|model| model.original_name == original_name)
    }

    /// Look up a built shared enum by its schema key.
    pub fn enumeration(&self, original_name: &str) -> Option<&EnumContext> {
        self.enums
            .iter()
            .find(|shared| shared.original_name == original_name)
    }

    /// Look up a built operation by id.
    pub fn operation(&self, operation_id: &str) -> Option<&OperationContext> {
        self.operations
            .iter()
            .find(|operation| operation.operation_id == operation_id)
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Record a diagnostic.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}
