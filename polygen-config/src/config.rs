//! Configuration types and parsing.

use std::str::FromStr;

use polygen_core::Language;
use serde::Deserialize;

use crate::{
    Error, Result,
    error::SourceContext,
    validate::{
        find_value_span, find_value_spans, validate_go_package, validate_proto_package,
        validate_reserved_suffix,
    },
};

/// Go package used when none is configured.
pub const DEFAULT_GO_PACKAGE: &str = "client";

/// Suffix appended to Protocol Buffers field names that collide with a
/// reserved word.
pub const DEFAULT_RESERVED_SUFFIX: &str = "_field";

/// Validated generator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Enabled target languages, in the order listed.
    pub targets: Vec<Language>,
    pub go: GoConfig,
    pub proto: ProtoConfig,
}

/// Options for Go output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoConfig {
    pub package: String,
}

/// Options for Protocol Buffers output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtoConfig {
    pub package: Option<String>,
    pub reserved_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            targets: Language::ALL.to_vec(),
            go: GoConfig::default(),
            proto: ProtoConfig::default(),
        }
    }
}

impl Default for GoConfig {
    fn default() -> Self {
        Self {
            package: DEFAULT_GO_PACKAGE.to_string(),
        }
    }
}

impl Default for ProtoConfig {
    fn default() -> Self {
        Self {
            package: None,
            reserved_suffix: DEFAULT_RESERVED_SUFFIX.to_string(),
        }
    }
}

impl Config {
    /// Check if a target language is enabled.
    pub fn enables(&self, language: Language) -> bool {
        self.targets.contains(&language)
    }

    /// Replace the enabled targets, dropping repeats.
    pub fn with_targets(mut self, targets: impl IntoIterator<Item = Language>) -> Self {
        self.targets.clear();
        for target in targets {
            if !self.targets.contains(&target) {
                self.targets.push(target);
            }
        }
        self
    }

    /// Parse a polygen.toml from a string with a custom filename for error
    /// reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let raw: RawConfig = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        raw.validate(&ctx)
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Config::from_str_with_filename(s, "polygen.toml")
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    generator: RawGenerator,
    #[serde(default)]
    go: RawGo,
    #[serde(default)]
    proto: RawProto,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGenerator {
    targets: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGo {
    package: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProto {
    package: Option<String>,
    reserved_suffix: Option<String>,
}

impl RawConfig {
    fn validate(self, ctx: &SourceContext) -> Result<Config> {
        let targets = match self.generator.targets {
            Some(names) => parse_targets(&names, ctx)?,
            None => Language::ALL.to_vec(),
        };

        let go = match self.go.package {
            Some(package) => {
                if let Some(reason) = validate_go_package(&package) {
                    let span = find_value_span(ctx.src(), &package);
                    return Err(ctx.invalid_package_error("go", package, reason, span));
                }
                GoConfig { package }
            }
            None => GoConfig::default(),
        };

        if let Some(package) = &self.proto.package
            && let Some(reason) = validate_proto_package(package)
        {
            let span = find_value_span(ctx.src(), package);
            return Err(ctx.invalid_package_error("proto", package.clone(), reason, span));
        }

        let reserved_suffix = self
            .proto
            .reserved_suffix
            .unwrap_or_else(|| DEFAULT_RESERVED_SUFFIX.to_string());
        if let Some(reason) = validate_reserved_suffix(&reserved_suffix) {
            let span = find_value_span(ctx.src(), &reserved_suffix);
            return Err(ctx.validation_error(reason, span));
        }

        Ok(Config {
            targets,
            go,
            proto: ProtoConfig {
                package: self.proto.package,
                reserved_suffix,
            },
        })
    }
}

fn parse_targets(names: &[String], ctx: &SourceContext) -> Result<Vec<Language>> {
    if names.is_empty() {
        return Err(ctx.validation_error(
            "generator.targets must list at least one target",
            ctx.src().find("targets").map(|pos| (pos, "targets".len()).into()),
        ));
    }

    let mut targets: Vec<Language> = Vec::with_capacity(names.len());
    for (index, name) in names.iter().enumerate() {
        let Some(language) = Language::parse(name) else {
            let span = find_value_span(ctx.src(), name);
            return Err(ctx.unknown_target_error(name.clone(), span));
        };

        if targets.contains(&language) {
            let spelled: Vec<&String> = names[..index]
                .iter()
                .filter(|other| Language::parse(other) == Some(language))
                .collect();
            let first_span = spelled
                .first()
                .and_then(|first| find_value_span(ctx.src(), first));
            let second_span = find_value_spans(ctx.src(), name)
                .into_iter()
                .find(|span| Some(span.offset()) > first_span.map(|s| s.offset()));
            return Err(ctx.duplicate_target_error(language.as_str(), first_span, second_span));
        }
        targets.push(language);
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.targets, Language::ALL);
        assert_eq!(config.go.package, "client");
        assert_eq!(config.proto.reserved_suffix, "_field");
        assert!(config.proto.package.is_none());
    }

    #[test]
    fn test_full_config() {
        let config: Config = r#"
            [generator]
            targets = ["go", "ts", "proto"]

            [go]
            package = "petstore"

            [proto]
            package = "petstore.v1"
            reserved_suffix = "_"
        "#
        .parse()
        .unwrap();

        assert_eq!(
            config.targets,
            [Language::Go, Language::TypeScript, Language::Proto]
        );
        assert!(config.enables(Language::Go));
        assert!(!config.enables(Language::Python));
        assert_eq!(config.go.package, "petstore");
        assert_eq!(config.proto.package.as_deref(), Some("petstore.v1"));
        assert_eq!(config.proto.reserved_suffix, "_");
    }

    #[test]
    fn test_unknown_target() {
        let src = "[generator]\ntargets = [\"go\", \"rust\"]\n";
        let err = src.parse::<Config>().unwrap_err();
        match *err {
            Error::UnknownTarget { target, span, .. } => {
                assert_eq!(target, "rust");
                assert_eq!(span.map(|s| s.offset()), src.find("rust"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_target_through_alias() {
        let src = "[generator]\ntargets = [\"typescript\", \"go\", \"ts\"]\n";
        let err = src.parse::<Config>().unwrap_err();
        match *err {
            Error::DuplicateTarget {
                target,
                first_span,
                second_span,
                ..
            } => {
                assert_eq!(target, "typescript");
                assert_eq!(first_span.map(|s| s.offset()), src.find("typescript"));
                assert_eq!(second_span.map(|s| s.offset()), src.find("\"ts\"").map(|p| p + 1));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_target_same_spelling() {
        let src = "[generator]\ntargets = [\"go\", \"go\"]\n";
        let err = src.parse::<Config>().unwrap_err();
        match *err {
            Error::DuplicateTarget {
                first_span,
                second_span,
                ..
            } => {
                assert_eq!(first_span.map(|s| s.offset()), src.find("go"));
                assert_eq!(second_span.map(|s| s.offset()), src.rfind("go"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_targets() {
        let err = "[generator]\ntargets = []\n".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
        assert_eq!(
            err.to_string(),
            "generator.targets must list at least one target"
        );
    }

    #[test]
    fn test_invalid_packages() {
        let err = "[proto]\npackage = \"api..v1\"\n".parse::<Config>().unwrap_err();
        assert!(
            matches!(*err, Error::InvalidPackage { ref language, .. } if language == "proto")
        );
        assert_eq!(err.to_string(), "invalid proto package 'api..v1'");

        let err = "[go]\npackage = \"My-Client\"\n".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::InvalidPackage { ref language, .. } if language == "go"));
    }

    #[test]
    fn test_invalid_suffix() {
        let err = "[proto]\nreserved_suffix = \"-x\"\n"
            .parse::<Config>()
            .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_unknown_section_is_parse_error() {
        let err = "[rust]\nedition = \"2024\"\n".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_with_targets_drops_repeats() {
        let config = Config::default().with_targets([Language::Go, Language::Go, Language::Zod]);
        assert_eq!(config.targets, [Language::Go, Language::Zod]);
    }
}
