use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use polygen_config::{DEFAULT_CONFIG_FILE, PolygenToml};
use polygen_core::Language;

use super::{UnwrapOrExit, parse_language};
use crate::ops;

#[derive(Args)]
pub struct BuildCommand {
    /// Path to the API document (JSON)
    pub document: PathBuf,

    /// Path to polygen.toml (defaults are used when the file is absent)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Only build these targets (repeatable, overrides the config)
    #[arg(short, long = "target", value_parser = parse_language)]
    pub targets: Vec<Language>,

    /// Write the JSON to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl BuildCommand {
    pub fn run(&self) -> Result<()> {
        let mut config = PolygenToml::load_or_default(&self.config).unwrap_or_exit();
        if !self.targets.is_empty() {
            config = config.with_targets(self.targets.iter().copied());
        }

        let document = ops::load_document(&self.document)?;
        let report = ops::build(document, &config)?;
        let json = serde_json::to_string_pretty(&report).wrap_err("failed to serialize output")?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, format!("{}\n", json))
                    .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
                tracing::info!(path = %path.display(), "wrote build output");
            }
            None => println!("{}", json),
        }

        let errors = report.error_count();
        if errors > 0 {
            tracing::warn!(
                "{} schema(s) or operation(s) were skipped; run `polygen check` for details",
                errors
            );
        }
        Ok(())
    }
}
