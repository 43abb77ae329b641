//! Zod schema type mapper implementation.

use crate::{
    ImportCollector, TypeMapper, TypeRef,
    types::{FieldType, FormatType, Language},
};

/// Zod type mapper implementation.
///
/// Named types refer to the generated `<Name>Schema` constant.
pub struct ZodTypeMapper;

impl TypeMapper for ZodTypeMapper {
    fn language(&self) -> Language {
        Language::Zod
    }

    fn map_scalar(
        &self,
        field_type: FieldType,
        format: Option<FormatType>,
        imports: &mut ImportCollector,
    ) -> String {
        imports.add("zod", "z");
        match (field_type, format) {
            (FieldType::String, Some(FormatType::DateTime)) => "z.string().datetime()",
            (FieldType::String, Some(FormatType::Date)) => "z.string().date()",
            (FieldType::String, Some(FormatType::Time)) => "z.string().time()",
            (FieldType::String, Some(FormatType::Uuid)) => "z.string().uuid()",
            (FieldType::String, Some(FormatType::Email)) => "z.string().email()",
            (FieldType::String, Some(FormatType::Uri | FormatType::Url)) => "z.string().url()",
            (FieldType::String, Some(FormatType::Ipv4)) => "z.string().ip({ version: \"v4\" })",
            (FieldType::String, Some(FormatType::Ipv6)) => "z.string().ip({ version: \"v6\" })",
            (FieldType::String, Some(FormatType::Binary)) => "z.instanceof(Blob)",
            (FieldType::String, Some(FormatType::Byte)) => "z.string().base64()",
            (FieldType::String, _) => "z.string()",
            (FieldType::Integer, _) => "z.number().int()",
            (FieldType::Number, _) => "z.number()",
            (FieldType::Boolean, _) => "z.boolean()",
            (FieldType::Array, _) => "z.array(z.any())",
            (FieldType::Object, _) => "z.record(z.string(), z.any())",
            (FieldType::Null, _) => "z.null()",
            (FieldType::Any, _) => "z.any()",
        }
        .to_string()
    }

    fn map_named(&self, name: &str, _imports: &mut ImportCollector) -> String {
        format!("{}Schema", name)
    }

    fn map_array(&self, inner: &str, imports: &mut ImportCollector) -> String {
        imports.add("zod", "z");
        format!("z.array({})", inner)
    }

    fn apply_modifiers(
        &self,
        _ty: &TypeRef,
        mut rendered: String,
        nullable: bool,
        optional: bool,
        _imports: &mut ImportCollector,
    ) -> String {
        if nullable {
            rendered.push_str(".nullable()");
        }
        if optional {
            rendered.push_str(".optional()");
        }
        rendered
    }

    fn render_imports(&self, imports: &ImportCollector) -> Vec<String> {
        imports
            .iter()
            .map(|(module, symbols)| {
                let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
                format!("import {{ {} }} from \"{}\";", symbols.join(", "), module)
            })
            .collect()
    }
}
