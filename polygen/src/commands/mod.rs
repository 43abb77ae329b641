mod build;
mod check;
mod explain;

use build::BuildCommand;
use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use eyre::Result;
use explain::ExplainCommand;
use polygen_core::Language;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for polygen_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Parse a `--target` value.
pub(crate) fn parse_language(value: &str) -> std::result::Result<Language, String> {
    Language::parse(value).ok_or_else(|| {
        format!(
            "unknown target '{}', expected one of: python, typescript, zod, go, proto",
            value
        )
    })
}

#[derive(Parser)]
#[command(name = "polygen")]
#[command(version)]
#[command(about = "Generate typed API clients from an API document")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Build(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Explain(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build model and operation contexts and print them as JSON
    Build(BuildCommand),

    /// Report diagnostics without printing contexts
    Check(CheckCommand),

    /// Show the pipeline phases, lints and planned output files
    Explain(ExplainCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language() {
        assert_eq!(parse_language("go"), Ok(Language::Go));
        assert_eq!(parse_language("ts"), Ok(Language::TypeScript));
        assert!(parse_language("rust").is_err());
    }

    #[test]
    fn test_cli_parses_build() {
        let cli = Cli::try_parse_from([
            "polygen", "-v", "build", "api.json", "--target", "go", "-t", "proto",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Build(cmd) => {
                assert_eq!(cmd.targets, [Language::Go, Language::Proto]);
                assert_eq!(cmd.config.to_str(), Some("polygen.toml"));
                assert!(cmd.output.is_none());
            }
            _ => panic!("expected build"),
        }
    }
}
