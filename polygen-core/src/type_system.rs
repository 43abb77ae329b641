//! The Unified Type System.
//!
//! [`TypeSystem`] is the single entry point mapping schema kinds to a type
//! string per target language. It also accumulates the imports those types
//! need, per language, until [`TypeSystem::reset`] is called. Callers reset it
//! at the start of every independent model so unrelated imports never leak
//! into a generated file.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    imports::ImportCollector,
    mappers::mapper_for,
    type_ref::TypeRef,
    types::{FieldType, FormatType, Language},
};

/// One resolved type string per target language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageTypes {
    #[serde(rename = "python_type")]
    pub python: String,
    #[serde(rename = "typescript_type")]
    pub typescript: String,
    #[serde(rename = "zod_type")]
    pub zod: String,
    #[serde(rename = "go_type")]
    pub go: String,
    #[serde(rename = "proto_type")]
    pub proto: String,
}

impl LanguageTypes {
    /// Get the type string for a language.
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Python => &self.python,
            Language::TypeScript => &self.typescript,
            Language::Zod => &self.zod,
            Language::Go => &self.go,
            Language::Proto => &self.proto,
        }
    }
}

/// Maps schema kinds to every target language and tracks required imports.
#[derive(Debug, Clone, Default)]
pub struct TypeSystem {
    imports: BTreeMap<Language, ImportCollector>,
}

impl TypeSystem {
    /// Create a type system with no accumulated imports.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map to a Python type.
    pub fn to_python(
        &mut self,
        field_type: FieldType,
        format: Option<FormatType>,
        nullable: bool,
        optional: bool,
    ) -> String {
        self.resolve_scalar(Language::Python, field_type, format, nullable, optional)
    }

    /// Map to a TypeScript type.
    pub fn to_typescript(
        &mut self,
        field_type: FieldType,
        format: Option<FormatType>,
        nullable: bool,
        optional: bool,
    ) -> String {
        self.resolve_scalar(Language::TypeScript, field_type, format, nullable, optional)
    }

    /// Map to a Zod schema expression.
    pub fn to_zod(
        &mut self,
        field_type: FieldType,
        format: Option<FormatType>,
        nullable: bool,
        optional: bool,
    ) -> String {
        self.resolve_scalar(Language::Zod, field_type, format, nullable, optional)
    }

    /// Map to a Go type.
    pub fn to_go(
        &mut self,
        field_type: FieldType,
        format: Option<FormatType>,
        nullable: bool,
        optional: bool,
    ) -> String {
        self.resolve_scalar(Language::Go, field_type, format, nullable, optional)
    }

    /// Map to a Protocol Buffers field type (including its label).
    pub fn to_proto(
        &mut self,
        field_type: FieldType,
        format: Option<FormatType>,
        nullable: bool,
        optional: bool,
    ) -> String {
        self.resolve_scalar(Language::Proto, field_type, format, nullable, optional)
    }

    fn resolve_scalar(
        &mut self,
        language: Language,
        field_type: FieldType,
        format: Option<FormatType>,
        nullable: bool,
        optional: bool,
    ) -> String {
        self.resolve(
            language,
            &TypeRef::scalar(field_type, format),
            nullable,
            optional,
        )
    }

    /// Resolve a composite type reference for one language.
    pub fn resolve(
        &mut self,
        language: Language,
        ty: &TypeRef,
        nullable: bool,
        optional: bool,
    ) -> String {
        let imports = self.imports.entry(language).or_default();
        mapper_for(language).resolve(ty, nullable, optional, imports)
    }

    /// Resolve a type reference for one language without modifiers.
    pub fn render(&mut self, language: Language, ty: &TypeRef) -> String {
        let imports = self.imports.entry(language).or_default();
        mapper_for(language).render_type(ty, imports)
    }

    /// Resolve a type reference for every language.
    pub fn resolve_all(&mut self, ty: &TypeRef, nullable: bool, optional: bool) -> LanguageTypes {
        LanguageTypes {
            python: self.resolve(Language::Python, ty, nullable, optional),
            typescript: self.resolve(Language::TypeScript, ty, nullable, optional),
            zod: self.resolve(Language::Zod, ty, nullable, optional),
            go: self.resolve(Language::Go, ty, nullable, optional),
            proto: self.resolve(Language::Proto, ty, nullable, optional),
        }
    }

    /// Get the imports accumulated for a language since the last reset.
    pub fn get_imports_for(&self, language: Language) -> ImportCollector {
        self.imports.get(&language).cloned().unwrap_or_default()
    }

    /// Render the accumulated imports for a language in its own syntax.
    pub fn import_lines(&self, language: Language) -> Vec<String> {
        self.imports
            .get(&language)
            .map(|imports| mapper_for(language).render_imports(imports))
            .unwrap_or_default()
    }

    /// Rendered import lines for every language that needs at least one.
    pub fn import_snapshot(&self) -> BTreeMap<Language, Vec<String>> {
        Language::ALL
            .into_iter()
            .map(|language| (language, self.import_lines(language)))
            .filter(|(_, lines)| !lines.is_empty())
            .collect()
    }

    /// Forget all accumulated imports.
    pub fn reset(&mut self) {
        self.imports.clear();
    }
}
