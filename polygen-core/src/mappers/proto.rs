//! Protocol Buffers type mapper implementation.

use crate::{
    ImportCollector, TypeMapper, TypeRef,
    types::{FieldType, FormatType, Language},
};

/// Well-known import for `google.protobuf.Timestamp`.
pub const TIMESTAMP_IMPORT: &str = "google/protobuf/timestamp.proto";
/// Well-known import for `google.protobuf.Struct`.
pub const STRUCT_IMPORT: &str = "google/protobuf/struct.proto";

/// Protocol Buffers type mapper implementation.
///
/// The rendered type includes the field label: `repeated` for arrays and
/// `optional` for optional singular fields.
pub struct ProtoTypeMapper;

impl ProtoTypeMapper {
    /// The universal fallback type.
    pub const ANY: &'static str = "string";
}

impl TypeMapper for ProtoTypeMapper {
    fn language(&self) -> Language {
        Language::Proto
    }

    fn map_scalar(
        &self,
        field_type: FieldType,
        format: Option<FormatType>,
        imports: &mut ImportCollector,
    ) -> String {
        match (field_type, format) {
            (FieldType::String, Some(FormatType::DateTime)) => {
                imports.add_module(TIMESTAMP_IMPORT);
                "google.protobuf.Timestamp"
            }
            (FieldType::String, Some(FormatType::Binary | FormatType::Byte)) => "bytes",
            (FieldType::String, _) => "string",
            (FieldType::Integer, Some(FormatType::Int32)) => "int32",
            (FieldType::Integer, _) => "int64",
            (FieldType::Number, Some(FormatType::Float)) => "float",
            (FieldType::Number, _) => "double",
            (FieldType::Boolean, _) => "bool",
            (FieldType::Object, _) => {
                imports.add_module(STRUCT_IMPORT);
                "google.protobuf.Struct"
            }
            (FieldType::Array | FieldType::Null | FieldType::Any, _) => Self::ANY,
        }
        .to_string()
    }

    // Nested repetition is not expressible; the label carries the collection.
    fn map_array(&self, inner: &str, _imports: &mut ImportCollector) -> String {
        inner.to_string()
    }

    fn apply_modifiers(
        &self,
        ty: &TypeRef,
        rendered: String,
        nullable: bool,
        optional: bool,
        _imports: &mut ImportCollector,
    ) -> String {
        if ty.is_array() {
            format!("repeated {}", rendered)
        } else if nullable || optional {
            format!("optional {}", rendered)
        } else {
            rendered
        }
    }

    fn render_imports(&self, imports: &ImportCollector) -> Vec<String> {
        imports
            .iter()
            .map(|(module, _)| format!("import \"{}\";", module))
            .collect()
    }
}
