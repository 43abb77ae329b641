//! Naming conventions for the target languages.

use polygen_core::{
    Language, split_words, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case,
};

/// Language-specific naming conventions.
///
/// Defines how to transform model, field and parameter names, and how to
/// handle reserved words.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a model name to a type name (e.g., "machine-sharing" -> "MachineSharing")
    pub model_to_type: fn(&str) -> String,
    /// Transform a model name to a file name (e.g., "MachineSharing" -> "machine_sharing")
    pub model_to_file: fn(&str) -> String,
    /// Transform a property name to a field name
    pub field_to_name: fn(&str) -> String,
    /// Transform a parameter name to an argument name
    pub param_to_name: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "from" -> "from_" in Python)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.model_to_type)(name);
        self.safe_name(&transformed)
    }

    /// Transform a model name into a file name (without extension).
    pub fn file_name(&self, name: &str) -> String {
        (self.model_to_file)(name)
    }

    /// Transform and make safe for use as a field name.
    pub fn field_name(&self, name: &str) -> String {
        let transformed = (self.field_to_name)(name);
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as a parameter name.
    pub fn param_name(&self, name: &str) -> String {
        let transformed = (self.param_to_name)(name);
        self.safe_name(&transformed)
    }
}

/// Get the naming convention for a language. Zod shares the TypeScript rules.
pub fn naming_for(language: Language) -> &'static NamingConvention {
    match language {
        Language::Python => &PYTHON_NAMING,
        Language::TypeScript | Language::Zod => &TYPESCRIPT_NAMING,
        Language::Go => &GO_NAMING,
        Language::Proto => &PROTO_NAMING,
    }
}

/// Initialisms Go keeps fully upper-cased in identifiers.
const GO_INITIALISMS: &[&str] = &[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID",
    "IP", "JSON", "JWT", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP",
    "TLS", "TTL", "UDP", "UI", "UID", "URI", "URL", "UTF8", "UUID", "VM", "XML", "XMPP", "XSRF",
    "XSS",
];

/// Convert to an exported Go identifier, keeping initialisms upper-cased
/// (e.g., "user_id" -> "UserID", "api_url" -> "APIURL").
pub fn to_go_exported(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| {
            let upper = word.to_uppercase();
            if GO_INITIALISMS.contains(&upper.as_str()) {
                upper
            } else {
                let lower = word.to_lowercase();
                let mut chars = lower.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        })
        .collect()
}

fn escape_with_trailing_underscore(name: &str) -> String {
    format!("{}_", name)
}

fn escape_with_underscore(name: &str) -> String {
    format!("_{}", name)
}

fn escape_proto_reserved(name: &str) -> String {
    format!("{}_field", name)
}

/// Python naming conventions.
pub const PYTHON_NAMING: NamingConvention = NamingConvention {
    model_to_type: to_pascal_case,
    model_to_file: to_snake_case,
    field_to_name: to_snake_case,
    param_to_name: to_snake_case,
    reserved_words: &[
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
        "try", "while", "with", "yield",
    ],
    escape_reserved: escape_with_trailing_underscore,
};

/// TypeScript naming conventions.
pub const TYPESCRIPT_NAMING: NamingConvention = NamingConvention {
    model_to_type: to_pascal_case,
    model_to_file: to_kebab_case,
    field_to_name: to_camel_case,
    param_to_name: to_camel_case,
    reserved_words: &[
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "implements",
        "interface",
        "let",
        "package",
        "private",
        "protected",
        "public",
        "static",
        "yield",
        "await",
    ],
    escape_reserved: escape_with_underscore,
};

/// Go naming conventions.
pub const GO_NAMING: NamingConvention = NamingConvention {
    model_to_type: to_pascal_case,
    model_to_file: to_snake_case,
    field_to_name: to_go_exported,
    param_to_name: to_camel_case,
    reserved_words: &[
        "break",
        "case",
        "chan",
        "const",
        "continue",
        "default",
        "defer",
        "else",
        "fallthrough",
        "for",
        "func",
        "go",
        "goto",
        "if",
        "import",
        "interface",
        "map",
        "package",
        "range",
        "return",
        "select",
        "struct",
        "switch",
        "type",
        "var",
        "ctx",
        "body",
        "params",
    ],
    escape_reserved: escape_with_trailing_underscore,
};

/// Protocol Buffers naming conventions.
pub const PROTO_NAMING: NamingConvention = NamingConvention {
    model_to_type: to_pascal_case,
    model_to_file: to_snake_case,
    field_to_name: to_snake_case,
    param_to_name: to_snake_case,
    reserved_words: &[
        "syntax",
        "import",
        "weak",
        "public",
        "package",
        "option",
        "message",
        "enum",
        "service",
        "rpc",
        "returns",
        "stream",
        "oneof",
        "map",
        "extend",
        "extensions",
        "reserved",
        "to",
        "max",
        "repeated",
        "optional",
        "required",
        "true",
        "false",
        "double",
        "float",
        "int32",
        "int64",
        "uint32",
        "uint64",
        "sint32",
        "sint64",
        "fixed32",
        "fixed64",
        "sfixed32",
        "sfixed64",
        "bool",
        "string",
        "bytes",
        "group",
    ],
    escape_reserved: escape_proto_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_naming() {
        assert_eq!(PYTHON_NAMING.type_name("machine-sharing"), "MachineSharing");
        assert_eq!(PYTHON_NAMING.file_name("MachineSharing"), "machine_sharing");
        assert_eq!(PYTHON_NAMING.field_name("createdAt"), "created_at");
        assert_eq!(PYTHON_NAMING.param_name("from"), "from_");
    }

    #[test]
    fn test_typescript_naming() {
        assert_eq!(TYPESCRIPT_NAMING.file_name("MachineSharing"), "machine-sharing");
        assert_eq!(TYPESCRIPT_NAMING.param_name("users_list"), "usersList");
        assert_eq!(TYPESCRIPT_NAMING.param_name("delete"), "_delete");
    }

    #[test]
    fn test_go_naming() {
        assert_eq!(GO_NAMING.field_name("user_id"), "UserID");
        assert_eq!(GO_NAMING.field_name("avatarUrl"), "AvatarURL");
        assert_eq!(GO_NAMING.field_name("HTTPClient"), "HTTPClient");
        assert_eq!(GO_NAMING.param_name("type"), "type_");
        assert_eq!(GO_NAMING.param_name("pet_id"), "petId");
    }

    #[test]
    fn test_proto_naming() {
        assert_eq!(PROTO_NAMING.field_name("firstName"), "first_name");
        assert_eq!(PROTO_NAMING.field_name("package"), "package_field");
    }

    #[test]
    fn test_naming_for_language() {
        assert!(naming_for(Language::Zod).is_reserved("delete"));
        assert!(naming_for(Language::Python).is_reserved("lambda"));
        assert!(!naming_for(Language::Go).is_reserved("lambda"));
    }

    #[test]
    fn test_to_go_exported() {
        assert_eq!(to_go_exported("id"), "ID");
        assert_eq!(to_go_exported("api_key"), "APIKey");
        assert_eq!(to_go_exported("machine-sharing"), "MachineSharing");
        assert_eq!(to_go_exported("XMLHttpRequest"), "XMLHTTPRequest");
    }
}
