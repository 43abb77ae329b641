//! Build command report data structures.

use std::collections::BTreeMap;

use polygen_codegen::{
    Diagnostic, EnumContext, OperationContext, SchemaContext, SignatureContext,
    mappers::{GoEnum, GoStruct, ProtoEnum, ProtoMessage},
};
use polygen_core::Language;
use serde::Serialize;

/// Everything built from one document, serialized as the `build` output.
#[derive(Debug, Serialize)]
pub struct BuildReport {
    pub title: Option<String>,
    pub version: Option<String>,
    /// Enabled targets, in configured order.
    pub targets: Vec<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_package: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proto_package: Option<String>,
    pub models: Vec<ModelOutput>,
    pub enums: Vec<EnumOutput>,
    pub operations: Vec<OperationOutput>,
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildReport {
    /// Number of skipped schemas and operations.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }
}

/// One model with its per-target output.
#[derive(Debug, Serialize)]
pub struct ModelOutput {
    pub context: SchemaContext,
    /// Output file per enabled target.
    pub files: BTreeMap<Language, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go: Option<GoStruct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proto: Option<ProtoMessage>,
}

/// One shared enum with its per-target output.
#[derive(Debug, Serialize)]
pub struct EnumOutput {
    pub context: EnumContext,
    pub files: BTreeMap<Language, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go: Option<GoEnum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proto: Option<ProtoEnum>,
}

/// One operation with a call signature per enabled client language.
#[derive(Debug, Serialize)]
pub struct OperationOutput {
    pub context: OperationContext,
    pub signatures: BTreeMap<Language, SignatureContext>,
}
