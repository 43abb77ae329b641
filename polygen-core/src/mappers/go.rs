//! Go type mapper implementation.

use crate::{
    ImportCollector, TypeMapper, TypeRef,
    types::{FieldType, FormatType, Language},
};

/// Go type mapper implementation.
///
/// Optional values become pointers, except for types whose zero value already
/// represents absence (slices, maps, `interface{}`).
pub struct GoTypeMapper;

impl GoTypeMapper {
    /// The universal fallback type.
    pub const ANY: &'static str = "interface{}";

    /// Returns true if an optional value of this rendered type needs a pointer.
    pub fn is_pointerable(rendered: &str) -> bool {
        !(rendered.starts_with("[]")
            || rendered.starts_with("map[")
            || rendered.starts_with('*')
            || rendered == Self::ANY)
    }
}

impl TypeMapper for GoTypeMapper {
    fn language(&self) -> Language {
        Language::Go
    }

    fn map_scalar(
        &self,
        field_type: FieldType,
        format: Option<FormatType>,
        imports: &mut ImportCollector,
    ) -> String {
        match (field_type, format) {
            (FieldType::String, Some(FormatType::DateTime | FormatType::Date)) => {
                imports.add_module("time");
                "time.Time"
            }
            (FieldType::String, Some(FormatType::Binary | FormatType::Byte)) => "[]byte",
            (FieldType::String, _) => "string",
            (FieldType::Integer, Some(FormatType::Int32)) => "int32",
            (FieldType::Integer, _) => "int64",
            (FieldType::Number, Some(FormatType::Float)) => "float32",
            (FieldType::Number, _) => "float64",
            (FieldType::Boolean, _) => "bool",
            (FieldType::Array, _) => "[]interface{}",
            (FieldType::Object, _) => "map[string]interface{}",
            (FieldType::Null | FieldType::Any, _) => Self::ANY,
        }
        .to_string()
    }

    fn map_array(&self, inner: &str, _imports: &mut ImportCollector) -> String {
        format!("[]{}", inner)
    }

    fn apply_modifiers(
        &self,
        _ty: &TypeRef,
        rendered: String,
        nullable: bool,
        optional: bool,
        _imports: &mut ImportCollector,
    ) -> String {
        if (nullable || optional) && Self::is_pointerable(&rendered) {
            format!("*{}", rendered)
        } else {
            rendered
        }
    }

    fn render_imports(&self, imports: &ImportCollector) -> Vec<String> {
        imports
            .iter()
            .map(|(module, _)| format!("\"{}\"", module))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_scalars() {
        let mut imports = ImportCollector::new();
        let mapper = GoTypeMapper;

        assert_eq!(mapper.map_scalar(FieldType::Integer, None, &mut imports), "int64");
        assert_eq!(
            mapper.map_scalar(FieldType::Integer, Some(FormatType::Int32), &mut imports),
            "int32"
        );
        assert_eq!(
            mapper.map_scalar(FieldType::Number, Some(FormatType::Float), &mut imports),
            "float32"
        );
        assert_eq!(mapper.map_scalar(FieldType::Any, None, &mut imports), "interface{}");
        assert!(imports.is_empty());

        assert_eq!(
            mapper.map_scalar(FieldType::String, Some(FormatType::DateTime), &mut imports),
            "time.Time"
        );
        assert!(imports.has_module("time"));
    }

    #[test]
    fn test_go_pointer_rules() {
        let mut imports = ImportCollector::new();
        let mapper = GoTypeMapper;

        let string = TypeRef::scalar(FieldType::String, None);
        assert_eq!(mapper.resolve(&string, false, false, &mut imports), "string");
        assert_eq!(mapper.resolve(&string, false, true, &mut imports), "*string");

        let list = TypeRef::array(TypeRef::named("Pet"));
        assert_eq!(mapper.resolve(&list, false, true, &mut imports), "[]Pet");

        let any = TypeRef::any();
        assert_eq!(mapper.resolve(&any, true, true, &mut imports), "interface{}");

        let object = TypeRef::scalar(FieldType::Object, None);
        assert_eq!(
            mapper.resolve(&object, false, true, &mut imports),
            "map[string]interface{}"
        );
    }
}
