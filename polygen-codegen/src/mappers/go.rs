//! Go struct mapper.

use polygen_core::{FieldType, FormatType, Language, TypeSystem, to_pascal_case};
use serde::Serialize;
use serde_json::Value;

use crate::{
    context::{EnumContext, FieldContext, Record, SchemaContext, enum_type_name},
    language::GO_NAMING,
};

/// A Go struct generated from one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoStruct {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<GoField>,
    pub enums: Vec<GoEnum>,
    /// Import specs (`"time"`) needed by this struct only.
    pub imports: Vec<String>,
}

impl Record for GoStruct {}

impl GoStruct {
    /// Render the struct declaration.
    pub fn render(&self) -> String {
        let mut out = format!("type {} struct {{\n", self.name);
        for field in &self.fields {
            out.push_str(&format!("\t{} {} `{}`\n", field.name, field.go_type, field.tag));
        }
        out.push('}');
        out
    }
}

/// One exported struct field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoField {
    pub name: String,
    pub go_type: String,
    /// Struct tag contents, without backticks.
    pub tag: String,
    pub json_name: String,
    pub omit_empty: bool,
    pub required: bool,
    pub description: Option<String>,
    pub deprecated: bool,
}

/// A typed Go enumeration (`type X string` plus constants).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoEnum {
    pub name: String,
    pub base_type: String,
    pub values: Vec<GoEnumValue>,
}

impl GoEnum {
    /// Render the type and its constants.
    pub fn render(&self) -> String {
        let mut out = format!("type {} {}\n\nconst (\n", self.name, self.base_type);
        for value in &self.values {
            out.push_str(&format!("\t{} {} = {}\n", value.name, self.name, value.literal));
        }
        out.push(')');
        out
    }
}

/// One enum constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoEnumValue {
    pub name: String,
    /// Go literal for the value.
    pub literal: String,
}

/// Maps contexts to Go structs.
///
/// Optional references, enums and scalars become pointers. Slices never do:
/// an empty slice already means absent, and only optional slices get
/// `omitempty`. Imports are reset at the start of every struct.
#[derive(Debug, Default)]
pub struct GoMapper {
    types: TypeSystem,
}

impl GoMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a model to a struct.
    pub fn map_schema(&mut self, schema: &SchemaContext) -> GoStruct {
        self.types.reset();
        let fields = schema
            .fields
            .iter()
            .map(|field| self.map_field(field))
            .collect();
        let enums = schema.enum_fields().filter_map(Self::map_enum).collect();

        GoStruct {
            name: schema.name.clone(),
            description: schema.description.clone(),
            fields,
            enums,
            imports: self.types.import_lines(Language::Go),
        }
    }

    /// Map one field.
    pub fn map_field(&mut self, field: &FieldContext) -> GoField {
        let go_type = self.field_type(field);
        let omit_empty = field.optional;
        let tag = if omit_empty {
            format!("json:\"{},omitempty\"", field.original_name)
        } else {
            format!("json:\"{}\"", field.original_name)
        };

        GoField {
            name: GO_NAMING.field_name(&field.original_name),
            go_type,
            tag,
            json_name: field.original_name.clone(),
            omit_empty,
            required: field.required,
            description: field.description.clone(),
            deprecated: field.deprecated,
        }
    }

    /// Go type for a field, with a pointer when optional.
    pub fn field_type(&mut self, field: &FieldContext) -> String {
        self.types
            .resolve(Language::Go, &field.type_ref, field.nullable, field.optional)
    }

    /// Enum type name for a field path ("Parent.field" -> "ParentField").
    pub fn enum_type_name(path: &str) -> String {
        enum_type_name(path)
    }

    /// Underlying Go type of an enumeration.
    pub fn enum_base_type(field_type: FieldType, format: Option<FormatType>) -> &'static str {
        match (field_type, format) {
            (FieldType::Integer, Some(FormatType::Int32)) => "int32",
            (FieldType::Integer, _) => "int64",
            (FieldType::Number, _) => "float64",
            (FieldType::Boolean, _) => "bool",
            _ => "string",
        }
    }

    /// Map a field's enumeration, if it declares one.
    pub fn map_enum(field: &FieldContext) -> Option<GoEnum> {
        let name = field.enum_type.clone()?;
        let (kind, format) = if field.is_array {
            (
                field.item_type.unwrap_or(FieldType::String),
                field.item_format,
            )
        } else {
            (field.field_type, field.format_type)
        };

        Some(Self::typed_enum(name, kind, format, field.enum_variants()))
    }

    /// Map a shared enum schema to a typed enumeration.
    pub fn map_shared_enum(shared: &EnumContext) -> GoEnum {
        Self::typed_enum(
            shared.name.clone(),
            shared.field_type,
            shared.format_type,
            shared.variants(),
        )
    }

    fn typed_enum<'v>(
        name: String,
        kind: FieldType,
        format: Option<FormatType>,
        variants: impl Iterator<Item = (&'v str, &'v Value)>,
    ) -> GoEnum {
        let values = variants
            .map(|(variant, value)| GoEnumValue {
                name: format!("{}{}", name, to_pascal_case(&variant.to_lowercase())),
                literal: go_literal(value),
            })
            .collect();

        GoEnum {
            base_type: Self::enum_base_type(kind, format).to_string(),
            name,
            values,
        }
    }
}

fn go_literal(value: &Value) -> String {
    match value {
        Value::String(s) => serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s)),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use polygen_ir::SchemaNode;
    use serde_json::json;

    use super::*;
    use crate::context::{ContextBuilder, ModelRegistry};

    fn pet_schema() -> SchemaContext {
        let registry: ModelRegistry = ["Pet", "Owner"].into_iter().collect();
        let node = SchemaNode::object(
            [
                ("id", SchemaNode::of_kind("integer")),
                ("owner", SchemaNode::reference("Owner")),
                ("vet", SchemaNode::reference("Owner")),
                (
                    "status",
                    SchemaNode::of_kind("string")
                        .with_enum([json!("available"), json!("in-progress")]),
                ),
                ("tags", SchemaNode::array_of(SchemaNode::of_kind("string"))),
                ("aliases", SchemaNode::array_of(SchemaNode::of_kind("string"))),
                (
                    "bornAt",
                    SchemaNode::of_kind("string").with_format("date-time"),
                ),
                ("extra", SchemaNode::of_kind("mystery")),
            ],
            ["id", "owner", "aliases"],
        );
        ContextBuilder::new(&registry)
            .build_schema("Pet", &node)
            .unwrap()
    }

    #[test]
    fn test_reference_pointer_rule() {
        let schema = pet_schema();
        let mut mapper = GoMapper::new();

        assert_eq!(mapper.field_type(schema.field("owner").unwrap()), "Owner");
        assert_eq!(mapper.field_type(schema.field("vet").unwrap()), "*Owner");
    }

    #[test]
    fn test_enum_pointer_and_name() {
        let schema = pet_schema();
        let mut mapper = GoMapper::new();

        assert_eq!(mapper.field_type(schema.field("status").unwrap()), "*PetStatus");
        assert_eq!(GoMapper::enum_type_name("Parent.field"), "ParentField");
        assert_eq!(GoMapper::enum_type_name("status"), "Status");
    }

    #[test]
    fn test_slices_are_never_pointers() {
        let schema = pet_schema();
        let mut mapper = GoMapper::new();

        let tags = mapper.map_field(schema.field("tags").unwrap());
        assert_eq!(tags.go_type, "[]string");
        assert_eq!(tags.tag, "json:\"tags,omitempty\"");

        let aliases = mapper.map_field(schema.field("aliases").unwrap());
        assert_eq!(aliases.go_type, "[]string");
        assert_eq!(aliases.tag, "json:\"aliases\"");
        assert!(!aliases.omit_empty);
    }

    #[test]
    fn test_unknown_kind_falls_back_to_interface() {
        let schema = pet_schema();
        let mut mapper = GoMapper::new();
        assert_eq!(mapper.field_type(schema.field("extra").unwrap()), "interface{}");
    }

    #[test]
    fn test_enum_base_type() {
        assert_eq!(GoMapper::enum_base_type(FieldType::String, None), "string");
        assert_eq!(GoMapper::enum_base_type(FieldType::Integer, None), "int64");
        assert_eq!(
            GoMapper::enum_base_type(FieldType::Integer, Some(FormatType::Int32)),
            "int32"
        );
    }

    #[test]
    fn test_map_schema() {
        let schema = pet_schema();
        let go = GoMapper::new().map_schema(&schema);

        assert_eq!(go.name, "Pet");
        assert_eq!(go.fields[0].name, "ID");
        assert_eq!(go.fields[0].go_type, "int64");
        assert_eq!(go.fields[6].name, "BornAt");
        assert_eq!(go.fields[6].go_type, "*time.Time");
        assert_eq!(go.imports, ["\"time\""]);

        assert_eq!(go.enums.len(), 1);
        let status = &go.enums[0];
        assert_eq!(status.name, "PetStatus");
        assert_eq!(status.base_type, "string");
        assert_eq!(
            status.render(),
            "type PetStatus string\n\nconst (\n\tPetStatusAvailable PetStatus = \"available\"\n\tPetStatusInProgress PetStatus = \"in-progress\"\n)"
        );
    }

    #[test]
    fn test_shared_enum() {
        let registry = ModelRegistry::new();
        let node = SchemaNode::of_kind("integer")
            .with_format("int32")
            .with_enum([json!(1), json!(2)]);
        let priority = ContextBuilder::new(&registry)
            .build_enum("Priority", &node)
            .unwrap();

        let go = GoMapper::map_shared_enum(&priority);
        assert_eq!(
            go.render(),
            "type Priority int32\n\nconst (\n\tPriorityValue1 Priority = 1\n\tPriorityValue2 Priority = 2\n)"
        );
    }

    #[test]
    fn test_imports_reset_per_struct() {
        let registry: ModelRegistry = ["Tag"].into_iter().collect();
        let tag = ContextBuilder::new(&registry)
            .build_schema(
                "Tag",
                &SchemaNode::object([("label", SchemaNode::of_kind("string"))], ["label"]),
            )
            .unwrap();

        let mut mapper = GoMapper::new();
        assert!(!mapper.map_schema(&pet_schema()).imports.is_empty());
        assert!(mapper.map_schema(&tag).imports.is_empty());
        assert_eq!(
            mapper.map_schema(&tag).render(),
            "type Tag struct {\n\tLabel string `json:\"label\"`\n}"
        );
    }
}
