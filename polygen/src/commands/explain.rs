use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use polygen_config::{DEFAULT_CONFIG_FILE, PolygenToml};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    /// Path to the API document (JSON)
    pub document: PathBuf,

    /// Path to polygen.toml (defaults are used when the file is absent)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let config = PolygenToml::load_or_default(&self.config).unwrap_or_exit();
        let document = ops::load_document(&self.document)?;
        let report = ops::explain(document, &self.document, &config)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
