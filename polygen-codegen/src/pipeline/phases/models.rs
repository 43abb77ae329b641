//! Models phase - builds one [`SchemaContext`](crate::SchemaContext) per
//! object schema and one [`EnumContext`](crate::EnumContext) per shared enum.

use eyre::Result;

use crate::{
    context::ContextBuilder,
    error::ContextError,
    pipeline::{CompilationContext, Diagnostic, Phase},
};

const PHASE: &str = "models";

/// Phase that builds model and shared enum contexts.
///
/// A schema with a broken reference is skipped with an error diagnostic and
/// removed from the registry, so anything referencing it is skipped too.
/// A named schema that is neither an object nor an enum (an alias, a scalar)
/// produces nothing and an info diagnostic.
pub struct ModelsPhase;

impl ModelsPhase {
    /// Remove failing models from the registry until every remaining one builds.
    fn prune_registry(ctx: &mut CompilationContext) {
        loop {
            let failed: Vec<String> = {
                let mut builder = ContextBuilder::new(&ctx.registry);
                ctx.document
                    .schemas
                    .iter()
                    .filter(|(name, _)| {
                        ctx.registry.contains(name) && !ctx.registry.is_enum(name)
                    })
                    .filter(|(name, node)| builder.build_schema(name, node).is_err())
                    .map(|(name, _)| name.clone())
                    .collect()
            };
            if failed.is_empty() {
                return;
            }
            for name in &failed {
                tracing::debug!(schema = name.as_str(), "unregistering schema");
                ctx.registry.remove(name);
            }
        }
    }
}

impl Phase for ModelsPhase {
    fn name(&self) -> &'static str {
        PHASE
    }

    fn description(&self) -> &'static str {
        "Build model and shared enum contexts"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        Self::prune_registry(ctx);

        let mut builder = ContextBuilder::new(&ctx.registry);
        let mut models = Vec::new();
        let mut enums = Vec::new();
        let mut diagnostics = Vec::new();

        for (name, node) in &ctx.document.schemas {
            let location = format!("schemas.{}", name);
            let built = if ctx.registry.is_enum(name) {
                builder.build_enum(name, node).map(|shared| enums.push(shared))
            } else {
                builder.build_schema(name, node).map(|model| models.push(model))
            };
            match built {
                Ok(()) => {}
                Err(err @ ContextError::NotAnObject { .. }) => {
                    tracing::debug!(schema = name.as_str(), "{}", err);
                    diagnostics.push(Diagnostic::info(PHASE, err.to_string()).at(location));
                }
                Err(err) => {
                    tracing::warn!(schema = name.as_str(), "skipping schema: {}", err);
                    diagnostics.push(Diagnostic::error(PHASE, err.to_string()).at(location));
                }
            }
        }

        tracing::info!(
            built = models.len(),
            enums = enums.len(),
            skipped = diagnostics.iter().filter(|d| d.severity.is_error()).count(),
            "models built"
        );
        ctx.models.extend(models);
        ctx.enums.extend(enums);
        for diagnostic in diagnostics {
            ctx.add_diagnostic(diagnostic);
        }
        Ok(())
    }
}
