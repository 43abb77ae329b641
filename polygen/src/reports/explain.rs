//! Explain command report data structures.

use std::path::PathBuf;

use polygen_core::Language;

use super::output::{Output, Report};

/// Report data from pipeline explanation.
#[derive(Debug)]
pub struct ExplainReport {
    /// Path to the API document.
    pub document_path: PathBuf,
    pub title: Option<String>,
    pub version: Option<String>,
    pub targets: Vec<Language>,
    /// Pipeline phases.
    pub phases: Vec<PhaseInfo>,
    /// Validation lints.
    pub lints: Vec<LintInfo>,
    pub model_count: usize,
    pub enum_count: usize,
    pub operation_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    /// Files a template step would write.
    pub files: Vec<PlannedFile>,
}

/// Information about a pipeline phase.
#[derive(Debug)]
pub struct PhaseInfo {
    pub name: String,
    pub description: String,
}

/// Information about a validation lint.
#[derive(Debug)]
pub struct LintInfo {
    pub name: String,
    pub description: String,
}

/// One output file for one model or shared enum and target.
#[derive(Debug)]
pub struct PlannedFile {
    pub language: Language,
    pub model: String,
    pub path: String,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Polygen Pipeline Explanation");
        out.newline();

        out.key_value("Input", &self.document_path.display().to_string());
        if let Some(title) = &self.title {
            out.key_value_indented("Title", title);
        }
        if let Some(version) = &self.version {
            out.key_value_indented("Version", version);
        }
        let targets: Vec<&str> = self.targets.iter().map(Language::as_str).collect();
        out.key_value_indented("Targets", &targets.join(", "));
        out.newline();

        out.section("Pipeline Phases");
        for (i, phase) in self.phases.iter().enumerate() {
            out.numbered_item(i + 1, &format!("{} - {}", phase.name, phase.description));
        }
        out.newline();

        out.section("Validation Lints");
        for lint in &self.lints {
            out.list_item(&format!("{}: {}", lint.name, lint.description));
        }
        out.newline();

        out.section("Analysis Results");
        out.key_value_indented("Models", &self.model_count.to_string());
        out.key_value_indented("Enums", &self.enum_count.to_string());
        out.key_value_indented("Operations", &self.operation_count.to_string());
        out.key_value_indented(
            "Diagnostics",
            &format!(
                "{} error(s), {} warning(s)",
                self.error_count, self.warning_count
            ),
        );
        out.newline();

        if !self.files.is_empty() {
            out.section("Files to Generate");
            for file in &self.files {
                out.list_item(&format!("[{}] {} ({})", file.language, file.path, file.model));
            }
        }
    }
}
