//! Canonical schema kinds shared by every target language.

use serde::Serialize;

/// Declared kind of a schema node.
///
/// Unrecognized kinds are normalized to [`FieldType::Any`] by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
    Null,
    Any,
}

impl FieldType {
    /// Get the schema kind name (as written in an OpenAPI document).
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Array => "array",
            FieldType::Object => "object",
            FieldType::Null => "null",
            FieldType::Any => "any",
        }
    }

    /// Parse a declared kind, returning `None` for anything unrecognized.
    pub fn parse(kind: &str) -> Option<Self> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "string" | "str" => Some(FieldType::String),
            "integer" | "int" => Some(FieldType::Integer),
            "number" | "float" => Some(FieldType::Number),
            "boolean" | "bool" => Some(FieldType::Boolean),
            "array" => Some(FieldType::Array),
            "object" => Some(FieldType::Object),
            "null" => Some(FieldType::Null),
            "any" => Some(FieldType::Any),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format specifier refining a [`FieldType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FormatType {
    #[serde(rename = "date-time")]
    DateTime,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "time")]
    Time,
    #[serde(rename = "uuid")]
    Uuid,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "uri")]
    Uri,
    #[serde(rename = "url")]
    Url,
    #[serde(rename = "hostname")]
    Hostname,
    #[serde(rename = "ipv4")]
    Ipv4,
    #[serde(rename = "ipv6")]
    Ipv6,
    #[serde(rename = "password")]
    Password,
    #[serde(rename = "binary")]
    Binary,
    #[serde(rename = "byte")]
    Byte,
    #[serde(rename = "int32")]
    Int32,
    #[serde(rename = "int64")]
    Int64,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "double")]
    Double,
}

impl FormatType {
    /// Get the OpenAPI format name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatType::DateTime => "date-time",
            FormatType::Date => "date",
            FormatType::Time => "time",
            FormatType::Uuid => "uuid",
            FormatType::Email => "email",
            FormatType::Uri => "uri",
            FormatType::Url => "url",
            FormatType::Hostname => "hostname",
            FormatType::Ipv4 => "ipv4",
            FormatType::Ipv6 => "ipv6",
            FormatType::Password => "password",
            FormatType::Binary => "binary",
            FormatType::Byte => "byte",
            FormatType::Int32 => "int32",
            FormatType::Int64 => "int64",
            FormatType::Float => "float",
            FormatType::Double => "double",
        }
    }

    /// Parse a format specifier, returning `None` for anything unrecognized.
    pub fn parse(format: &str) -> Option<Self> {
        match format.trim().to_ascii_lowercase().as_str() {
            "date-time" | "datetime" => Some(FormatType::DateTime),
            "date" => Some(FormatType::Date),
            "time" => Some(FormatType::Time),
            "uuid" => Some(FormatType::Uuid),
            "email" => Some(FormatType::Email),
            "uri" => Some(FormatType::Uri),
            "url" => Some(FormatType::Url),
            "hostname" => Some(FormatType::Hostname),
            "ipv4" => Some(FormatType::Ipv4),
            "ipv6" => Some(FormatType::Ipv6),
            "password" => Some(FormatType::Password),
            "binary" => Some(FormatType::Binary),
            "byte" => Some(FormatType::Byte),
            "int32" => Some(FormatType::Int32),
            "int64" => Some(FormatType::Int64),
            "float" => Some(FormatType::Float),
            "double" => Some(FormatType::Double),
            _ => None,
        }
    }
}

impl std::fmt::Display for FormatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target language of the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Pydantic-style models.
    Python,
    /// TypeScript interfaces.
    TypeScript,
    /// Zod schemas paired with the TypeScript interfaces.
    Zod,
    /// Go structs.
    Go,
    /// Protocol Buffers 3 messages.
    Proto,
}

impl Language {
    /// Every supported language, in record order.
    pub const ALL: [Language; 5] = [
        Language::Python,
        Language::TypeScript,
        Language::Zod,
        Language::Go,
        Language::Proto,
    ];

    /// Get the lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::TypeScript => "typescript",
            Language::Zod => "zod",
            Language::Go => "go",
            Language::Proto => "proto",
        }
    }

    /// Parse a language identifier (accepts a few common aliases).
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "python" | "py" => Some(Language::Python),
            "typescript" | "ts" => Some(Language::TypeScript),
            "zod" => Some(Language::Zod),
            "go" | "golang" => Some(Language::Go),
            "proto" | "protobuf" => Some(Language::Proto),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_parse() {
        assert_eq!(FieldType::parse("string"), Some(FieldType::String));
        assert_eq!(FieldType::parse("Integer"), Some(FieldType::Integer));
        assert_eq!(FieldType::parse(" boolean "), Some(FieldType::Boolean));
        assert_eq!(FieldType::parse("tuple"), None);
        assert_eq!(FieldType::parse(""), None);
    }

    #[test]
    fn test_field_type_round_trips_as_str() {
        for kind in [
            FieldType::String,
            FieldType::Integer,
            FieldType::Number,
            FieldType::Boolean,
            FieldType::Array,
            FieldType::Object,
            FieldType::Null,
            FieldType::Any,
        ] {
            assert_eq!(FieldType::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_format_type_parse() {
        assert_eq!(FormatType::parse("date-time"), Some(FormatType::DateTime));
        assert_eq!(FormatType::parse("int32"), Some(FormatType::Int32));
        assert_eq!(FormatType::parse("ipv6"), Some(FormatType::Ipv6));
        assert_eq!(FormatType::parse("semver"), None);
    }

    #[test]
    fn test_language_parse() {
        assert_eq!(Language::parse("ts"), Some(Language::TypeScript));
        assert_eq!(Language::parse("protobuf"), Some(Language::Proto));
        assert_eq!(Language::parse("rust"), None);
        assert_eq!(Language::Go.to_string(), "go");
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(
            serde_json::to_value(FormatType::DateTime).unwrap(),
            serde_json::json!("date-time")
        );
        assert_eq!(
            serde_json::to_value(FieldType::Boolean).unwrap(),
            serde_json::json!("boolean")
        );
        assert_eq!(
            serde_json::to_value(Language::TypeScript).unwrap(),
            serde_json::json!("typescript")
        );
    }
}
