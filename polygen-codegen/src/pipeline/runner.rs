//! Pipeline orchestrator.

use eyre::Result;
use polygen_ir::ApiDocument;

use super::{
    CompilationContext, Phase, PhaseInfo,
    phases::{ModelsPhase, OperationsPhase, ValidatePhase},
};

/// The pipeline orchestrator.
///
/// Runs the built-in phases (validate, models, operations) followed by any
/// user phases.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new().phase(MyCustomPhase).run(document)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline with the default built-in phases.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
        }
    }

    /// Replace the built-in validate phase (e.g., to change its lints).
    pub fn validate(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Information about all phases, in execution order.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        [self.validate.info(), ModelsPhase.info(), OperationsPhase.info()]
            .into_iter()
            .chain(self.phases.iter().map(|phase| phase.info()))
            .collect()
    }

    /// Run the pipeline on a document.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally. Skipped schemas and
    /// operations do not fail the run; they are recorded as diagnostics.
    pub fn run(&self, document: ApiDocument) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(document);

        let builtin: [&dyn Phase; 3] = [&self.validate, &ModelsPhase, &OperationsPhase];
        for phase in builtin
            .into_iter()
            .chain(self.phases.iter().map(|phase| phase.as_ref()))
        {
            tracing::debug!(phase = phase.name(), "running phase");
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use polygen_ir::{OperationNode, SchemaNode};

    use super::*;

    struct CountingPhase {
        models_seen: Arc<AtomicUsize>,
    }

    impl Phase for CountingPhase {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn description(&self) -> &'static str {
            "Count built models"
        }

        fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
            self.models_seen.store(ctx.models.len(), Ordering::SeqCst);
            Ok(())
        }
    }

    fn document() -> ApiDocument {
        let mut document = ApiDocument::default();
        document.schemas.insert(
            "Pet".into(),
            SchemaNode::object([("name", SchemaNode::of_kind("string"))], ["name"]),
        );
        document.operations.push(OperationNode {
            operation_id: "listPets".into(),
            path: "/pets".into(),
            ..OperationNode::default()
        });
        document
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::new().run(document()).expect("pipeline should succeed");

        assert_eq!(ctx.models.len(), 1);
        assert_eq!(ctx.operations.len(), 1);
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_user_phase_runs_after_builtin() {
        let models_seen = Arc::new(AtomicUsize::new(0));
        let pipeline = Pipeline::new().phase(CountingPhase {
            models_seen: models_seen.clone(),
        });

        let names: Vec<&str> = pipeline.phase_info().iter().map(|p| p.name).collect();
        assert_eq!(names, ["validate", "models", "operations", "counting"]);
        pipeline.run(document()).expect("pipeline should succeed");
        assert_eq!(models_seen.load(Ordering::SeqCst), 1);
    }
}
