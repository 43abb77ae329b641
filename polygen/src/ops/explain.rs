//! Explain operation - pipeline explanation.

use std::path::Path;

use eyre::{Context, Result};
use polygen_codegen::pipeline::{Pipeline, phases::ValidatePhase};
use polygen_config::Config;
use polygen_ir::ApiDocument;

use super::build::output_file;
use crate::reports::{ExplainReport, LintInfo, PhaseInfo, PlannedFile};

/// Execute the explain operation.
///
/// Runs the pipeline and returns information about what it does.
pub fn explain(
    document: ApiDocument,
    document_path: &Path,
    config: &Config,
) -> Result<ExplainReport> {
    let pipeline = Pipeline::new();

    let phases = pipeline
        .phase_info()
        .into_iter()
        .map(|p| PhaseInfo {
            name: p.name.to_string(),
            description: p.description.to_string(),
        })
        .collect();

    let lints = ValidatePhase::new()
        .lint_info()
        .into_iter()
        .map(|l| LintInfo {
            name: l.name.to_string(),
            description: l.description.to_string(),
        })
        .collect();

    let title = document.title.clone();
    let version = document.version.clone();
    let ctx = pipeline.run(document).wrap_err("Pipeline failed")?;

    let names = ctx
        .models
        .iter()
        .map(|model| (&model.name, &model.original_name))
        .chain(ctx.enums.iter().map(|e| (&e.name, &e.original_name)));
    let files = names
        .flat_map(|(name, original_name)| {
            config.targets.iter().map(move |&language| PlannedFile {
                language,
                model: name.clone(),
                path: output_file(language, original_name),
            })
        })
        .collect();

    Ok(ExplainReport {
        document_path: document_path.to_path_buf(),
        title,
        version,
        targets: config.targets.clone(),
        phases,
        lints,
        model_count: ctx.models.len(),
        enum_count: ctx.enums.len(),
        operation_count: ctx.operations.len(),
        error_count: ctx.error_count(),
        warning_count: ctx.warning_count(),
        files,
    })
}
