//! Validate phase - runs lints on the document.

use std::collections::HashMap;

use eyre::Result;
use polygen_ir::{ApiDocument, OperationNode};

use crate::pipeline::{CompilationContext, Diagnostic, Phase};

const PHASE: &str = "validate";

/// Information about a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A lint that checks the document for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the document and add any diagnostics.
    fn check(&self, document: &ApiDocument, diagnostics: &mut Vec<Diagnostic>);

    /// Get information about this lint.
    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}

/// Phase that checks the document using configurable lints.
///
/// Lints only report. They never stop the run, so every model and operation
/// still gets built.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(MissingOperationIdLint),
                Box::new(DuplicateOperationIdLint),
                Box::new(PathParameterLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        PHASE
    }

    fn description(&self) -> &'static str {
        "Check document integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(&ctx.document, &mut diagnostics);
        }
        tracing::debug!(found = diagnostics.len(), "lints checked");
        for diagnostic in diagnostics {
            ctx.add_diagnostic(diagnostic);
        }
        Ok(())
    }
}

fn operation_location(index: usize, operation: &OperationNode) -> String {
    if operation.operation_id.is_empty() {
        format!("operations[{}]", index)
    } else {
        format!("operations.{}", operation.operation_id)
    }
}

/// Lint that rejects operations without an id.
///
/// Every generated method and Go options struct is named after the id.
pub struct MissingOperationIdLint;

impl Lint for MissingOperationIdLint {
    fn name(&self) -> &'static str {
        "missing-operation-id"
    }

    fn description(&self) -> &'static str {
        "Check every operation declares an operationId"
    }

    fn check(&self, document: &ApiDocument, diagnostics: &mut Vec<Diagnostic>) {
        for (index, operation) in document.operations.iter().enumerate() {
            if operation.operation_id.trim().is_empty() {
                diagnostics.push(
                    Diagnostic::error(
                        PHASE,
                        format!(
                            "operation {} {} has no operationId",
                            operation.method.to_ascii_uppercase(),
                            operation.path
                        ),
                    )
                    .at(operation_location(index, operation)),
                );
            }
        }
    }
}

/// Lint that reports operation ids used more than once.
pub struct DuplicateOperationIdLint;

impl Lint for DuplicateOperationIdLint {
    fn name(&self) -> &'static str {
        "duplicate-operation-id"
    }

    fn description(&self) -> &'static str {
        "Check operationIds are unique"
    }

    fn check(&self, document: &ApiDocument, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for operation in &document.operations {
            let id = operation.operation_id.as_str();
            if id.is_empty() {
                continue;
            }
            let count = seen.entry(id).or_default();
            *count += 1;
            if *count == 2 {
                diagnostics.push(
                    Diagnostic::error(PHASE, format!("operationId '{}' is used more than once", id))
                        .at(format!("operations.{}", id)),
                );
            }
        }
    }
}

/// Lint that compares path template placeholders with declared path
/// parameters.
pub struct PathParameterLint;

impl Lint for PathParameterLint {
    fn name(&self) -> &'static str {
        "path-parameter"
    }

    fn description(&self) -> &'static str {
        "Check path placeholders match declared path parameters"
    }

    fn check(&self, document: &ApiDocument, diagnostics: &mut Vec<Diagnostic>) {
        for (index, operation) in document.operations.iter().enumerate() {
            let placeholders = path_placeholders(&operation.path);
            let declared: Vec<&str> = operation
                .parameters
                .iter()
                .filter(|p| p.location.eq_ignore_ascii_case("path"))
                .map(|p| p.name.as_str())
                .collect();

            for name in placeholders.iter().filter(|name| !declared.contains(name)) {
                diagnostics.push(
                    Diagnostic::warning(
                        PHASE,
                        format!(
                            "path '{}' uses '{{{}}}' but declares no such path parameter",
                            operation.path, name
                        ),
                    )
                    .at(operation_location(index, operation)),
                );
            }
            for name in declared.iter().filter(|name| !placeholders.contains(name)) {
                diagnostics.push(
                    Diagnostic::warning(
                        PHASE,
                        format!(
                            "path parameter '{}' does not appear in path '{}'",
                            name, operation.path
                        ),
                    )
                    .at(operation_location(index, operation)),
                );
            }
        }
    }
}

/// Names inside `{...}` segments of a path template.
fn path_placeholders(path: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = path;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start + 1..].find('}') else {
            break;
        };
        names.push(&rest[start + 1..start + 1 + len]);
        rest = &rest[start + len + 2..];
    }
    names
}

#[cfg(test)]
mod tests {
    use polygen_ir::{ParameterNode, SchemaNode};

    use super::*;

    fn op(id: &str, path: &str, parameters: Vec<ParameterNode>) -> OperationNode {
        OperationNode {
            operation_id: id.into(),
            method: "get".into(),
            path: path.into(),
            parameters,
            ..OperationNode::default()
        }
    }

    fn document(operations: Vec<OperationNode>) -> ApiDocument {
        ApiDocument {
            operations,
            ..ApiDocument::default()
        }
    }

    fn check(lint: impl Lint, document: &ApiDocument) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        lint.check(document, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_path_placeholders() {
        assert_eq!(
            path_placeholders("/owners/{ownerId}/pets/{petId}"),
            ["ownerId", "petId"]
        );
        assert!(path_placeholders("/pets").is_empty());
        assert!(path_placeholders("/pets/{broken").is_empty());
    }

    #[test]
    fn test_missing_operation_id() {
        let doc = document(vec![op("", "/pets", vec![]), op("listPets", "/pets", vec![])]);
        let diagnostics = check(MissingOperationIdLint, &doc);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(diagnostics[0].message, "operation GET /pets has no operationId");
        assert_eq!(diagnostics[0].location.as_deref(), Some("operations[0]"));
    }

    #[test]
    fn test_duplicate_operation_id_reported_once() {
        let doc = document(vec![
            op("getPet", "/pets/{id}", vec![]),
            op("getPet", "/pets/{id}", vec![]),
            op("getPet", "/pets/{id}", vec![]),
        ]);
        let diagnostics = check(DuplicateOperationIdLint, &doc);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("operations.getPet"));
    }

    #[test]
    fn test_path_parameter_mismatch() {
        let doc = document(vec![op(
            "getPet",
            "/pets/{petId}",
            vec![ParameterNode::new("id", "path", SchemaNode::of_kind("integer"))],
        )]);
        let diagnostics = check(PathParameterLint, &doc);

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.severity.is_warning()));
        assert_eq!(
            diagnostics[0].message,
            "path '/pets/{petId}' uses '{petId}' but declares no such path parameter"
        );
        assert_eq!(
            diagnostics[1].message,
            "path parameter 'id' does not appear in path '/pets/{petId}'"
        );
    }

    #[test]
    fn test_matching_path_parameters_pass() {
        let doc = document(vec![op(
            "getPet",
            "/pets/{petId}",
            vec![
                ParameterNode::new("petId", "path", SchemaNode::of_kind("integer")),
                ParameterNode::new("petId", "query", SchemaNode::of_kind("integer")),
            ],
        )]);
        assert!(check(PathParameterLint, &doc).is_empty());
    }

    #[test]
    fn test_phase_never_stops_the_run() {
        let mut ctx = CompilationContext::new(document(vec![op("", "/pets", vec![])]));
        let phase = ValidatePhase::new();

        assert!(phase.run(&mut ctx).is_ok());
        assert!(ctx.has_errors());
        assert_eq!(phase.lint_info().len(), 3);
    }
}
