//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target (or, for
//! `build`, serialize them as JSON).

mod build;
mod check;
mod explain;
pub(crate) mod output;

pub use build::{BuildReport, EnumOutput, ModelOutput, OperationOutput};
pub use check::CheckReport;
pub use explain::{ExplainReport, LintInfo, PhaseInfo, PlannedFile};
pub use output::{Output, Report, TerminalOutput};
