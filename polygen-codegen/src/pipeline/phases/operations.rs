//! Operations phase - builds one [`OperationContext`] per operation.

use eyre::Result;

use crate::{
    params::OperationParamsBuilder,
    pipeline::{CompilationContext, Diagnostic, OperationContext, Phase},
};

const PHASE: &str = "operations";

/// Phase that builds operation contexts.
///
/// An operation whose parameters or bodies cannot be built is skipped with
/// an error diagnostic.
pub struct OperationsPhase;

impl Phase for OperationsPhase {
    fn name(&self) -> &'static str {
        PHASE
    }

    fn description(&self) -> &'static str {
        "Build parameter contexts for every operation"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut builder = OperationParamsBuilder::new(&ctx.registry);
        let mut operations = Vec::new();
        let mut diagnostics = Vec::new();

        for operation in &ctx.document.operations {
            let id = operation.operation_id.as_str();
            match builder.build(operation) {
                Ok(params) => operations.push(OperationContext {
                    operation_id: id.to_string(),
                    method: match operation.method.trim() {
                        "" => "get".to_string(),
                        method => method.to_ascii_lowercase(),
                    },
                    path: operation.path.clone(),
                    summary: operation.summary.clone(),
                    deprecated: operation.deprecated,
                    params,
                }),
                Err(err) => {
                    tracing::warn!(operation = id, "skipping operation: {}", err);
                    diagnostics.push(
                        Diagnostic::error(PHASE, err.to_string()).at(format!("operations.{}", id)),
                    );
                }
            }
        }

        tracing::info!(
            built = operations.len(),
            skipped = diagnostics.len(),
            "operations built"
        );
        ctx.operations.extend(operations);
        for diagnostic in diagnostics {
            ctx.add_diagnostic(diagnostic);
        }
        Ok(())
    }
}
