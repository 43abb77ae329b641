//! TypeScript type mapper implementation.

use crate::{
    ImportCollector, TypeMapper, TypeRef,
    types::{FieldType, FormatType, Language},
};

/// TypeScript type mapper implementation.
///
/// Optionality is expressed with the `?` marker at the property or parameter
/// site, so only nullability changes the type itself.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> Language {
        Language::TypeScript
    }

    fn map_scalar(
        &self,
        field_type: FieldType,
        format: Option<FormatType>,
        _imports: &mut ImportCollector,
    ) -> String {
        match (field_type, format) {
            (FieldType::String, Some(FormatType::Binary)) => "Blob",
            (FieldType::String, _) => "string",
            (FieldType::Integer | FieldType::Number, _) => "number",
            (FieldType::Boolean, _) => "boolean",
            (FieldType::Array, _) => "any[]",
            (FieldType::Object, _) => "Record<string, any>",
            (FieldType::Null, _) => "null",
            (FieldType::Any, _) => "any",
        }
        .to_string()
    }

    fn map_array(&self, inner: &str, _imports: &mut ImportCollector) -> String {
        if inner.contains(' ') {
            format!("Array<{}>", inner)
        } else {
            format!("{}[]", inner)
        }
    }

    fn apply_modifiers(
        &self,
        _ty: &TypeRef,
        rendered: String,
        nullable: bool,
        _optional: bool,
        _imports: &mut ImportCollector,
    ) -> String {
        if nullable && rendered != "null" {
            format!("{} | null", rendered)
        } else {
            rendered
        }
    }

    fn render_imports(&self, imports: &ImportCollector) -> Vec<String> {
        imports
            .iter()
            .map(|(module, symbols)| {
                if symbols.is_empty() {
                    format!("import \"{}\";", module)
                } else {
                    let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
                    format!("import type {{ {} }} from \"{}\";", symbols.join(", "), module)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typescript_types() {
        let mut imports = ImportCollector::new();
        let mapper = TypeScriptTypeMapper;

        assert_eq!(
            mapper.map_scalar(FieldType::Integer, None, &mut imports),
            "number"
        );
        assert_eq!(
            mapper.map_scalar(FieldType::String, Some(FormatType::DateTime), &mut imports),
            "string"
        );
        assert_eq!(
            mapper.resolve(&TypeRef::named("Pet"), true, true, &mut imports),
            "Pet | null"
        );
        assert_eq!(
            mapper.resolve(
                &TypeRef::array(TypeRef::scalar(FieldType::String, None)),
                false,
                true,
                &mut imports
            ),
            "string[]"
        );
        assert!(imports.is_empty());
    }

    #[test]
    fn test_typescript_array_of_union() {
        let mut imports = ImportCollector::new();
        assert_eq!(
            TypeScriptTypeMapper.map_array("string | null", &mut imports),
            "Array<string | null>"
        );
    }
}
