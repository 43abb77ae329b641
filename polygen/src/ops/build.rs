//! Build operation - contexts for every enabled target.

use std::collections::BTreeMap;

use eyre::{Context, Result};
use polygen_codegen::{
    CompilationContext, Pipeline,
    language::naming_for,
    mappers::{GoMapper, ProtoMapper},
};
use polygen_config::Config;
use polygen_core::Language;
use polygen_ir::ApiDocument;

use crate::reports::{BuildReport, EnumOutput, ModelOutput, OperationOutput};

/// Output file per enabled target for a model or shared enum.
fn output_files(config: &Config, name: &str) -> BTreeMap<Language, String> {
    config
        .targets
        .iter()
        .map(|&language| (language, output_file(language, name)))
        .collect()
}

/// File a model is written to for a target language.
pub fn output_file(language: Language, model: &str) -> String {
    let stem = naming_for(language).file_name(model);
    let extension = match language {
        Language::Python => "py",
        Language::TypeScript => "ts",
        Language::Zod => "schema.ts",
        Language::Go => "go",
        Language::Proto => "proto",
    };
    format!("{}.{}", stem, extension)
}

/// Execute the build operation.
///
/// Runs the pipeline and maps every model and operation for the targets
/// enabled in `config`.
pub fn build(document: ApiDocument, config: &Config) -> Result<BuildReport> {
    let title = document.title.clone();
    let version = document.version.clone();

    let CompilationContext {
        models,
        enums,
        operations,
        diagnostics,
        ..
    } = Pipeline::new().run(document).wrap_err("Pipeline failed")?;

    let mut go = GoMapper::new();
    let mut proto = ProtoMapper::new().with_reserved_suffix(config.proto.reserved_suffix.as_str());

    let models = models
        .into_iter()
        .map(|context| ModelOutput {
            files: output_files(config, &context.original_name),
            go: config
                .enables(Language::Go)
                .then(|| go.map_schema(&context)),
            proto: config
                .enables(Language::Proto)
                .then(|| proto.map_schema(&context)),
            context,
        })
        .collect();

    let enums = enums
        .into_iter()
        .map(|context| EnumOutput {
            files: output_files(config, &context.original_name),
            go: config
                .enables(Language::Go)
                .then(|| GoMapper::map_shared_enum(&context)),
            proto: config
                .enables(Language::Proto)
                .then(|| ProtoMapper::map_shared_enum(&context)),
            context,
        })
        .collect();

    let operations = operations
        .into_iter()
        .map(|context| {
            let mut signatures = BTreeMap::new();
            for &language in &config.targets {
                let signature = match language {
                    Language::Python => context.params.for_python(),
                    Language::TypeScript => context.params.for_typescript(),
                    Language::Go => context.params.for_go(),
                    Language::Zod | Language::Proto => continue,
                };
                signatures.insert(language, signature);
            }
            OperationOutput {
                context,
                signatures,
            }
        })
        .collect();

    Ok(BuildReport {
        title,
        version,
        targets: config.targets.clone(),
        go_package: config
            .enables(Language::Go)
            .then(|| config.go.package.clone()),
        proto_package: config
            .proto
            .package
            .clone()
            .filter(|_| config.enables(Language::Proto)),
        models,
        enums,
        operations,
        diagnostics,
    })
}
