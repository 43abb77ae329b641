//! Mapping between schema kinds and language-specific type strings.

use crate::{
    imports::ImportCollector,
    type_ref::TypeRef,
    types::{FieldType, FormatType, Language},
};

/// Trait for mapping schema types to language-specific type strings.
///
/// Implement this trait for each target language. Mappers never fail: kinds a
/// language cannot express resolve to that language's fallback type. Any
/// import a rendered type depends on is recorded in the supplied collector.
pub trait TypeMapper {
    /// The target language
    fn language(&self) -> Language;

    /// Map a scalar kind (with optional format) to a base type.
    fn map_scalar(
        &self,
        field_type: FieldType,
        format: Option<FormatType>,
        imports: &mut ImportCollector,
    ) -> String;

    /// Map a generated type name (model or enum).
    fn map_named(&self, name: &str, _imports: &mut ImportCollector) -> String {
        name.to_string()
    }

    /// Map a collection of an already rendered element type.
    fn map_array(&self, inner: &str, imports: &mut ImportCollector) -> String;

    /// Apply the language's nullable/optional representation to a rendered type.
    fn apply_modifiers(
        &self,
        ty: &TypeRef,
        rendered: String,
        nullable: bool,
        optional: bool,
        imports: &mut ImportCollector,
    ) -> String;

    /// Render collected imports in the language's syntax.
    fn render_imports(&self, imports: &ImportCollector) -> Vec<String>;

    /// Render a complete TypeRef to a string, without modifiers.
    fn render_type(&self, ty: &TypeRef, imports: &mut ImportCollector) -> String {
        match ty {
            TypeRef::Scalar { field_type, format } => {
                self.map_scalar(*field_type, *format, imports)
            }
            TypeRef::Named(name) => self.map_named(name, imports),
            TypeRef::Array(inner) => {
                let inner_str = self.render_type(inner, imports);
                self.map_array(&inner_str, imports)
            }
        }
    }

    /// Render a TypeRef and apply the nullable/optional representation.
    fn resolve(
        &self,
        ty: &TypeRef,
        nullable: bool,
        optional: bool,
        imports: &mut ImportCollector,
    ) -> String {
        let rendered = self.render_type(ty, imports);
        self.apply_modifiers(ty, rendered, nullable, optional, imports)
    }
}
