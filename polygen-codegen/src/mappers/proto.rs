//! Protocol Buffers message mapper.

use polygen_core::{Language, TypeSystem, to_screaming_snake_case, to_snake_case};
use serde::Serialize;

use crate::{
    context::{EnumContext, FieldContext, Record, SchemaContext},
    language::PROTO_NAMING,
};

/// Suffix appended to field names that collide with a reserved word.
pub const DEFAULT_RESERVED_SUFFIX: &str = "_field";

/// Field label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtoLabel {
    None,
    Optional,
    Repeated,
}

impl ProtoLabel {
    /// The label keyword, if any.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            ProtoLabel::None => None,
            ProtoLabel::Optional => Some("optional"),
            ProtoLabel::Repeated => Some("repeated"),
        }
    }
}

/// A message generated from one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtoMessage {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<ProtoField>,
    pub enums: Vec<ProtoEnum>,
    /// Import statements needed by this message only.
    pub imports: Vec<String>,
}

impl Record for ProtoMessage {}

impl ProtoMessage {
    /// Render the message declaration.
    pub fn render(&self) -> String {
        let mut out = format!("message {} {{\n", self.name);
        for field in &self.fields {
            out.push_str("  ");
            out.push_str(&field.declaration());
            out.push('\n');
        }
        out.push('}');
        out
    }
}

/// One message field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtoField {
    pub name: String,
    pub proto_type: String,
    pub label: ProtoLabel,
    pub number: u32,
    /// Property name as written in the schema.
    pub json_name: String,
    pub description: Option<String>,
    pub deprecated: bool,
}

impl ProtoField {
    /// Render the field declaration (`optional string name = 2;`).
    pub fn declaration(&self) -> String {
        let mut out = String::new();
        if let Some(keyword) = self.label.keyword() {
            out.push_str(keyword);
            out.push(' ');
        }
        out.push_str(&format!("{} {} = {}", self.proto_type, self.name, self.number));
        if self.deprecated {
            out.push_str(" [deprecated = true]");
        }
        out.push(';');
        out
    }
}

/// An enumeration with a leading `_UNSPECIFIED = 0` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtoEnum {
    pub name: String,
    pub values: Vec<ProtoEnumValue>,
}

impl ProtoEnum {
    /// Render the enum declaration.
    pub fn render(&self) -> String {
        let mut out = format!("enum {} {{\n", self.name);
        for value in &self.values {
            out.push_str(&format!("  {} = {};\n", value.name, value.number));
        }
        out.push('}');
        out
    }
}

/// One enum entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtoEnumValue {
    pub name: String,
    pub number: u32,
}

/// Maps contexts to Protocol Buffers messages.
///
/// Imports are tracked from the types actually emitted and reset at the
/// start of every message.
#[derive(Debug)]
pub struct ProtoMapper {
    types: TypeSystem,
    reserved_suffix: String,
}

impl Default for ProtoMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtoMapper {
    pub fn new() -> Self {
        Self {
            types: TypeSystem::new(),
            reserved_suffix: DEFAULT_RESERVED_SUFFIX.to_string(),
        }
    }

    /// Use a different suffix for reserved field names.
    pub fn with_reserved_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.reserved_suffix = suffix.into();
        self
    }

    /// Compute a field label. Arrays are always repeated.
    pub fn label(required: bool, nullable: bool, is_array: bool) -> ProtoLabel {
        if is_array {
            ProtoLabel::Repeated
        } else if !required || nullable {
            ProtoLabel::Optional
        } else {
            ProtoLabel::None
        }
    }

    /// Convert a name to snake_case and rename reserved words.
    pub fn sanitize_field_name(&self, name: &str) -> String {
        let snake = to_snake_case(name);
        let snake = if snake.is_empty() {
            "field".to_string()
        } else if snake.starts_with(|c: char| c.is_ascii_digit()) {
            format!("field_{}", snake)
        } else {
            snake
        };

        if PROTO_NAMING.is_reserved(&snake) {
            format!("{}{}", snake, self.reserved_suffix)
        } else {
            snake
        }
    }

    /// Wire type for a field, without its label.
    pub fn field_type(&mut self, field: &FieldContext) -> String {
        self.types.render(Language::Proto, &field.type_ref)
    }

    /// Map one field with the given field number.
    pub fn map_field(&mut self, field: &FieldContext, number: u32) -> ProtoField {
        ProtoField {
            name: self.sanitize_field_name(&field.original_name),
            proto_type: self.field_type(field),
            label: Self::label(field.required, field.nullable, field.is_array),
            number,
            json_name: field.original_name.clone(),
            description: field.description.clone(),
            deprecated: field.deprecated,
        }
    }

    /// Map a model to a message. Fields are numbered from 1 in order.
    pub fn map_schema(&mut self, schema: &SchemaContext) -> ProtoMessage {
        self.types.reset();
        let fields = schema
            .fields
            .iter()
            .zip(1..)
            .map(|(field, number)| self.map_field(field, number))
            .collect();
        let enums = schema.enum_fields().filter_map(Self::map_enum).collect();

        ProtoMessage {
            name: schema.name.clone(),
            description: schema.description.clone(),
            fields,
            enums,
            imports: self.types.import_lines(Language::Proto),
        }
    }

    /// Map a field's enumeration, if it declares one.
    pub fn map_enum(field: &FieldContext) -> Option<ProtoEnum> {
        let name = field.enum_type.clone()?;
        Some(Self::prefixed_enum(name, &field.enum_names))
    }

    /// Map a shared enum schema.
    pub fn map_shared_enum(shared: &EnumContext) -> ProtoEnum {
        Self::prefixed_enum(shared.name.clone(), &shared.variant_names)
    }

    fn prefixed_enum(name: String, variants: &[String]) -> ProtoEnum {
        let prefix = to_screaming_snake_case(&name);

        let mut values = vec![ProtoEnumValue {
            name: format!("{}_UNSPECIFIED", prefix),
            number: 0,
        }];
        values.extend(variants.iter().zip(1..).map(|(variant, number)| {
            let variant = if variant == "UNSPECIFIED" {
                "UNSPECIFIED_VALUE"
            } else {
                variant.as_str()
            };
            ProtoEnumValue {
                name: format!("{}_{}", prefix, variant),
                number,
            }
        }));

        ProtoEnum { name, values }
    }
}

#[cfg(test)]
mod tests {
    use polygen_ir::SchemaNode;
    use serde_json::json;

    use super::*;
    use crate::context::{ContextBuilder, ModelRegistry};

    fn event_schema() -> SchemaContext {
        let registry: ModelRegistry = ["Event"].into_iter().collect();
        let node = SchemaNode::object(
            [
                ("id", SchemaNode::of_kind("integer").with_format("int64")),
                ("package", SchemaNode::of_kind("string")),
                (
                    "startsAt",
                    SchemaNode::of_kind("string").with_format("date-time"),
                ),
                (
                    "tags",
                    SchemaNode::array_of(SchemaNode::of_kind("string")).nullable(),
                ),
                ("score", SchemaNode::of_kind("number").nullable()),
                (
                    "level",
                    SchemaNode::of_kind("integer").with_enum([json!(1), json!(2)]),
                ),
            ],
            ["id", "package", "tags", "score"],
        );
        ContextBuilder::new(&registry)
            .build_schema("Event", &node)
            .unwrap()
    }

    #[test]
    fn test_label() {
        assert_eq!(ProtoMapper::label(true, false, false), ProtoLabel::None);
        assert_eq!(ProtoMapper::label(false, false, false), ProtoLabel::Optional);
        assert_eq!(ProtoMapper::label(true, true, false), ProtoLabel::Optional);
        assert_eq!(ProtoMapper::label(true, true, true), ProtoLabel::Repeated);
        assert_eq!(ProtoMapper::label(false, false, true), ProtoLabel::Repeated);
    }

    #[test]
    fn test_sanitize_field_name() {
        let mapper = ProtoMapper::new();
        assert_eq!(mapper.sanitize_field_name("firstName"), "first_name");
        assert_eq!(mapper.sanitize_field_name("package"), "package_field");
        assert_eq!(mapper.sanitize_field_name("2fa"), "field_2fa");

        let mapper = ProtoMapper::new().with_reserved_suffix("_");
        assert_eq!(mapper.sanitize_field_name("message"), "message_");
    }

    #[test]
    fn test_map_schema() {
        let message = ProtoMapper::new().map_schema(&event_schema());

        assert_eq!(
            message.render(),
            "message Event {\n  int64 id = 1;\n  string package_field = 2;\n  optional google.protobuf.Timestamp starts_at = 3;\n  repeated string tags = 4;\n  optional double score = 5;\n  optional EventLevel level = 6;\n}"
        );
        assert_eq!(
            message.imports,
            ["import \"google/protobuf/timestamp.proto\";"]
        );
    }

    #[test]
    fn test_enum_has_unspecified_zero() {
        let message = ProtoMapper::new().map_schema(&event_schema());
        let level = &message.enums[0];
        assert_eq!(
            level.render(),
            "enum EventLevel {\n  EVENT_LEVEL_UNSPECIFIED = 0;\n  EVENT_LEVEL_VALUE_1 = 1;\n  EVENT_LEVEL_VALUE_2 = 2;\n}"
        );
    }

    #[test]
    fn test_imports_reset_per_message() {
        let registry: ModelRegistry = ["Tag"].into_iter().collect();
        let tag = ContextBuilder::new(&registry)
            .build_schema(
                "Tag",
                &SchemaNode::object([("label", SchemaNode::of_kind("string"))], ["label"]),
            )
            .unwrap();

        let mut mapper = ProtoMapper::new();
        assert!(!mapper.map_schema(&event_schema()).imports.is_empty());
        assert!(mapper.map_schema(&tag).imports.is_empty());
    }

    #[test]
    fn test_shared_enum() {
        let registry = ModelRegistry::new();
        let node = SchemaNode::of_kind("string").with_enum([json!("available"), json!("sold")]);
        let status = ContextBuilder::new(&registry)
            .build_enum("StatusEnum", &node)
            .unwrap();

        assert_eq!(
            ProtoMapper::map_shared_enum(&status).render(),
            "enum StatusEnum {\n  STATUS_ENUM_UNSPECIFIED = 0;\n  STATUS_ENUM_AVAILABLE = 1;\n  STATUS_ENUM_SOLD = 2;\n}"
        );
    }

    #[test]
    fn test_deprecated_declaration() {
        let field = ProtoField {
            name: "old".into(),
            proto_type: "string".into(),
            label: ProtoLabel::Optional,
            number: 7,
            json_name: "old".into(),
            description: None,
            deprecated: true,
        };
        assert_eq!(
            field.declaration(),
            "optional string old = 7 [deprecated = true];"
        );
    }
}
