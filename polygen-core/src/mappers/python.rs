//! Python (Pydantic) type mapper implementation.

use crate::{
    ImportCollector, TypeMapper, TypeRef,
    types::{FieldType, FormatType, Language},
};

/// Python type mapper implementation.
pub struct PythonTypeMapper;

impl TypeMapper for PythonTypeMapper {
    fn language(&self) -> Language {
        Language::Python
    }

    fn map_scalar(
        &self,
        field_type: FieldType,
        format: Option<FormatType>,
        imports: &mut ImportCollector,
    ) -> String {
        let (module, symbol) = match (field_type, format) {
            (FieldType::String, Some(FormatType::DateTime)) => ("datetime", "datetime"),
            (FieldType::String, Some(FormatType::Date)) => ("datetime", "date"),
            (FieldType::String, Some(FormatType::Time)) => ("datetime", "time"),
            (FieldType::String, Some(FormatType::Uuid)) => ("uuid", "UUID"),
            (FieldType::String, Some(FormatType::Email)) => ("pydantic", "EmailStr"),
            (FieldType::String, Some(FormatType::Uri)) => ("pydantic", "AnyUrl"),
            (FieldType::String, Some(FormatType::Url)) => ("pydantic", "HttpUrl"),
            (FieldType::String, Some(FormatType::Ipv4)) => ("ipaddress", "IPv4Address"),
            (FieldType::String, Some(FormatType::Ipv6)) => ("ipaddress", "IPv6Address"),
            (FieldType::String, Some(FormatType::Password)) => ("pydantic", "SecretStr"),
            (FieldType::String, Some(FormatType::Binary | FormatType::Byte)) => {
                return "bytes".to_string();
            }
            (FieldType::String, _) => return "str".to_string(),
            (FieldType::Integer, _) => return "int".to_string(),
            (FieldType::Number, _) => return "float".to_string(),
            (FieldType::Boolean, _) => return "bool".to_string(),
            (FieldType::Null, _) => return "None".to_string(),
            (FieldType::Array, _) => {
                imports.add("typing", "List");
                imports.add("typing", "Any");
                return "List[Any]".to_string();
            }
            (FieldType::Object, _) => {
                imports.add("typing", "Dict");
                imports.add("typing", "Any");
                return "Dict[str, Any]".to_string();
            }
            (FieldType::Any, _) => ("typing", "Any"),
        };
        imports.add(module, symbol);
        symbol.to_string()
    }

    fn map_array(&self, inner: &str, imports: &mut ImportCollector) -> String {
        imports.add("typing", "List");
        format!("List[{}]", inner)
    }

    fn apply_modifiers(
        &self,
        _ty: &TypeRef,
        rendered: String,
        nullable: bool,
        optional: bool,
        imports: &mut ImportCollector,
    ) -> String {
        if nullable || optional {
            imports.add("typing", "Optional");
            format!("Optional[{}]", rendered)
        } else {
            rendered
        }
    }

    fn render_imports(&self, imports: &ImportCollector) -> Vec<String> {
        imports
            .iter()
            .map(|(module, symbols)| {
                if symbols.is_empty() {
                    format!("import {}", module)
                } else {
                    let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
                    format!("from {} import {}", module, symbols.join(", "))
                }
            })
            .collect()
    }
}
