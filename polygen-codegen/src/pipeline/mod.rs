//! Batch pipeline from an [`ApiDocument`](polygen_ir::ApiDocument) to contexts.
//!
//! The [`Pipeline`] runs a fixed sequence of phases over a shared
//! [`CompilationContext`]:
//!
//! - [`ValidatePhase`](phases::ValidatePhase) - document-level lints
//! - [`ModelsPhase`](phases::ModelsPhase) - one [`SchemaContext`](crate::SchemaContext) per
//!   object schema and one [`EnumContext`](crate::EnumContext) per shared enum
//! - [`OperationsPhase`](phases::OperationsPhase) - one [`OperationContext`] per operation
//!
//! A schema or operation that fails to build is skipped and reported as a
//! [`Diagnostic`]; the rest of the batch still runs.
//!
//! # Example
//!
//! ```ignore
//! use polygen_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(document)?;
//! for diag in ctx.warnings() {
//!     eprintln!("{diag}");
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::{CompilationContext, OperationContext};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use runner::Pipeline;
