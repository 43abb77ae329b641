//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from checking a document.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the API document.
    pub document_path: PathBuf,
    pub model_count: usize,
    pub enum_count: usize,
    pub operation_count: usize,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }

        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.document_path.display()));
        } else {
            out.preformatted(&format!(
                "✗ {} has {} error{}",
                self.document_path.display(),
                self.errors.len(),
                if self.errors.len() == 1 { "" } else { "s" }
            ));
        }
        out.key_value_indented("Models", &self.model_count.to_string());
        out.key_value_indented("Enums", &self.enum_count.to_string());
        out.key_value_indented("Operations", &self.operation_count.to_string());
    }
}
