//! Document loading.

use std::path::Path;

use eyre::{Context, Result};
use polygen_ir::ApiDocument;

/// Read and parse a JSON API document.
pub fn load_document(path: &Path) -> Result<ApiDocument> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
    let document = ApiDocument::from_json(&content)
        .wrap_err_with(|| format!("failed to parse '{}'", path.display()))?;

    tracing::debug!(
        schemas = document.schemas.len(),
        operations = document.operations.len(),
        "loaded document"
    );
    Ok(document)
}
