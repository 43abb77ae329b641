//! Check operation - document diagnostics.

use std::path::Path;

use eyre::{Context, Result};
use polygen_codegen::{Pipeline, Severity};
use polygen_ir::ApiDocument;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the pipeline and returns its diagnostics.
pub fn check(document: ApiDocument, document_path: &Path) -> Result<CheckReport> {
    let ctx = Pipeline::new()
        .run(document)
        .wrap_err("Pipeline failed")?;

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    Ok(CheckReport {
        document_path: document_path.to_path_buf(),
        model_count: ctx.models.len(),
        enum_count: ctx.enums.len(),
        operation_count: ctx.operations.len(),
        errors,
        warnings,
        infos,
    })
}
