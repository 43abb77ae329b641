//! Smart field detection.
//!
//! Infers UI and validation semantics for a field from its format, name and
//! declared kind. Precedence is expressed as explicit, ordered rule tables:
//!
//! 1. [`FORMAT_RULES`] keyed by the field's recognized format
//! 2. enumerated fields always render as a select
//! 3. [`NAME_RULES`] matched against the snake_case form of the name
//! 4. [`TYPE_RULES`] keyed by the declared kind
//!
//! The first tier that matches decides input type, validation, placeholder,
//! autocomplete and pattern. [`READONLY_RULES`] are evaluated independently of
//! those tiers. A field is sensitive when its format rule or any matching
//! name rule says so.

use polygen_core::{FieldType, FormatType, to_snake_case};
use serde::Serialize;

/// HTML-style input kind for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputType {
    Text,
    Email,
    Password,
    Tel,
    Url,
    Number,
    Checkbox,
    Date,
    Time,
    DatetimeLocal,
    Textarea,
    Select,
    File,
    Hidden,
    Color,
}

impl InputType {
    /// Get the HTML input type attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Password => "password",
            InputType::Tel => "tel",
            InputType::Url => "url",
            InputType::Number => "number",
            InputType::Checkbox => "checkbox",
            InputType::Date => "date",
            InputType::Time => "time",
            InputType::DatetimeLocal => "datetime-local",
            InputType::Textarea => "textarea",
            InputType::Select => "select",
            InputType::File => "file",
            InputType::Hidden => "hidden",
            InputType::Color => "color",
        }
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic validation applied on top of the declared kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationRule {
    Email,
    Url,
    Phone,
    Uuid,
    Slug,
    IpAddress,
    CreditCard,
    PostalCode,
}

impl ValidationRule {
    /// Get the rule identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationRule::Email => "email",
            ValidationRule::Url => "url",
            ValidationRule::Phone => "phone",
            ValidationRule::Uuid => "uuid",
            ValidationRule::Slug => "slug",
            ValidationRule::IpAddress => "ip_address",
            ValidationRule::CreditCard => "credit_card",
            ValidationRule::PostalCode => "postal_code",
        }
    }
}

impl std::fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the detector infers about one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMeta {
    pub input_type: InputType,
    pub validation: Option<ValidationRule>,
    pub sensitive: bool,
    pub readonly: bool,
    pub placeholder: Option<String>,
    pub autocomplete: Option<String>,
    pub pattern: Option<String>,
}

/// Inputs to detection.
#[derive(Debug, Clone, Copy)]
pub struct FieldSignals<'a> {
    /// Field name as written in the schema.
    pub name: &'a str,
    pub field_type: FieldType,
    pub format: Option<FormatType>,
    pub read_only: bool,
    pub write_only: bool,
    pub is_enum: bool,
}

impl<'a> FieldSignals<'a> {
    /// Signals for a plain field with no flags set.
    pub fn new(name: &'a str, field_type: FieldType, format: Option<FormatType>) -> Self {
        Self {
            name,
            field_type,
            format,
            read_only: false,
            write_only: false,
            is_enum: false,
        }
    }
}

/// Hints contributed by a matching rule.
#[derive(Debug, Clone, Copy)]
pub struct Hints {
    pub input_type: InputType,
    pub validation: Option<ValidationRule>,
    pub sensitive: bool,
    pub placeholder: Option<&'static str>,
    pub autocomplete: Option<&'static str>,
    pub pattern: Option<&'static str>,
}

impl Hints {
    const fn input(input_type: InputType) -> Self {
        Self {
            input_type,
            validation: None,
            sensitive: false,
            placeholder: None,
            autocomplete: None,
            pattern: None,
        }
    }

    const fn validate(mut self, rule: ValidationRule) -> Self {
        self.validation = Some(rule);
        self
    }

    const fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    const fn autocomplete(mut self, autocomplete: &'static str) -> Self {
        self.autocomplete = Some(autocomplete);
        self
    }

    const fn pattern(mut self, pattern: &'static str) -> Self {
        self.pattern = Some(pattern);
        self
    }
}

/// How a name rule compares against the snake_case field name.
#[derive(Debug, Clone, Copy)]
pub enum NameMatch {
    Exact(&'static str),
    Prefix(&'static str),
    Suffix(&'static str),
    Contains(&'static str),
}

impl NameMatch {
    /// Check a snake_case name against this matcher.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            NameMatch::Exact(s) => name == *s,
            NameMatch::Prefix(s) => name.starts_with(s),
            NameMatch::Suffix(s) => name.ends_with(s),
            NameMatch::Contains(s) => name.contains(s),
        }
    }
}

/// Kinds a name rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    /// Strings and untyped fields.
    Textual,
    /// Any declared kind.
    Any,
}

impl KindFilter {
    fn accepts(&self, field_type: FieldType) -> bool {
        match self {
            KindFilter::Textual => matches!(field_type, FieldType::String | FieldType::Any),
            KindFilter::Any => true,
        }
    }
}

/// A rule keyed by format.
#[derive(Debug, Clone, Copy)]
pub struct FormatRule {
    pub format: FormatType,
    pub hints: Hints,
}

/// A rule keyed by field name.
#[derive(Debug, Clone, Copy)]
pub struct NameRule {
    pub matchers: &'static [NameMatch],
    pub kinds: KindFilter,
    pub hints: Hints,
}

impl NameRule {
    fn matches(&self, name: &str, field_type: FieldType) -> bool {
        self.kinds.accepts(field_type) && self.matchers.iter().any(|m| m.matches(name))
    }
}

/// A rule keyed by declared kind.
#[derive(Debug, Clone, Copy)]
pub struct TypeRule {
    pub field_type: FieldType,
    pub hints: Hints,
}

const UUID_PATTERN: &str =
    "^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$";
const PHONE_PATTERN: &str = r"^\+?[0-9\s\-()]{7,20}$";
const SLUG_PATTERN: &str = "^[a-z0-9]+(?:-[a-z0-9]+)*$";
const COLOR_PATTERN: &str = "^#[0-9a-fA-F]{6}$";
const CARD_PATTERN: &str = r"^[0-9\s]{12,19}$";

/// Format-based rules. Checked first.
pub const FORMAT_RULES: &[FormatRule] = &[
    FormatRule {
        format: FormatType::Email,
        hints: Hints::input(InputType::Email)
            .validate(ValidationRule::Email)
            .placeholder("user@example.com")
            .autocomplete("email"),
    },
    FormatRule {
        format: FormatType::Password,
        hints: Hints::input(InputType::Password)
            .sensitive()
            .autocomplete("current-password"),
    },
    FormatRule {
        format: FormatType::DateTime,
        hints: Hints::input(InputType::DatetimeLocal),
    },
    FormatRule {
        format: FormatType::Date,
        hints: Hints::input(InputType::Date),
    },
    FormatRule {
        format: FormatType::Time,
        hints: Hints::input(InputType::Time),
    },
    FormatRule {
        format: FormatType::Uri,
        hints: Hints::input(InputType::Url)
            .validate(ValidationRule::Url)
            .placeholder("https://example.com")
            .autocomplete("url"),
    },
    FormatRule {
        format: FormatType::Url,
        hints: Hints::input(InputType::Url)
            .validate(ValidationRule::Url)
            .placeholder("https://example.com")
            .autocomplete("url"),
    },
    FormatRule {
        format: FormatType::Uuid,
        hints: Hints::input(InputType::Text)
            .validate(ValidationRule::Uuid)
            .pattern(UUID_PATTERN),
    },
    FormatRule {
        format: FormatType::Ipv4,
        hints: Hints::input(InputType::Text)
            .validate(ValidationRule::IpAddress)
            .placeholder("192.168.0.1"),
    },
    FormatRule {
        format: FormatType::Ipv6,
        hints: Hints::input(InputType::Text)
            .validate(ValidationRule::IpAddress)
            .placeholder("::1"),
    },
    FormatRule {
        format: FormatType::Hostname,
        hints: Hints::input(InputType::Text).placeholder("example.com"),
    },
    FormatRule {
        format: FormatType::Binary,
        hints: Hints::input(InputType::File),
    },
];

/// Name-based rules, in precedence order.
pub const NAME_RULES: &[NameRule] = &[
    NameRule {
        matchers: &[NameMatch::Contains("password"), NameMatch::Contains("passwd")],
        kinds: KindFilter::Textual,
        hints: Hints::input(InputType::Password)
            .sensitive()
            .autocomplete("current-password"),
    },
    NameRule {
        matchers: &[
            NameMatch::Contains("secret"),
            NameMatch::Contains("token"),
            NameMatch::Contains("api_key"),
            NameMatch::Exact("apikey"),
        ],
        kinds: KindFilter::Textual,
        hints: Hints::input(InputType::Password)
            .sensitive()
            .autocomplete("off"),
    },
    NameRule {
        matchers: &[
            NameMatch::Exact("email"),
            NameMatch::Prefix("email_"),
            NameMatch::Suffix("_email"),
        ],
        kinds: KindFilter::Textual,
        hints: Hints::input(InputType::Email)
            .validate(ValidationRule::Email)
            .placeholder("user@example.com")
            .autocomplete("email"),
    },
    NameRule {
        matchers: &[
            NameMatch::Contains("phone"),
            NameMatch::Exact("mobile"),
            NameMatch::Suffix("_mobile"),
            NameMatch::Exact("tel"),
            NameMatch::Suffix("_tel"),
        ],
        kinds: KindFilter::Textual,
        hints: Hints::input(InputType::Tel)
            .validate(ValidationRule::Phone)
            .placeholder("+1 555 0100")
            .autocomplete("tel")
            .pattern(PHONE_PATTERN),
    },
    NameRule {
        matchers: &[
            NameMatch::Exact("url"),
            NameMatch::Suffix("_url"),
            NameMatch::Exact("uri"),
            NameMatch::Suffix("_uri"),
            NameMatch::Contains("website"),
            NameMatch::Exact("homepage"),
        ],
        kinds: KindFilter::Textual,
        hints: Hints::input(InputType::Url)
            .validate(ValidationRule::Url)
            .placeholder("https://example.com")
            .autocomplete("url"),
    },
    NameRule {
        matchers: &[NameMatch::Exact("slug"), NameMatch::Suffix("_slug")],
        kinds: KindFilter::Textual,
        hints: Hints::input(InputType::Text)
            .validate(ValidationRule::Slug)
            .placeholder("my-slug")
            .pattern(SLUG_PATTERN),
    },
    NameRule {
        matchers: &[
            NameMatch::Exact("ip"),
            NameMatch::Suffix("_ip"),
            NameMatch::Contains("ip_address"),
        ],
        kinds: KindFilter::Textual,
        hints: Hints::input(InputType::Text)
            .validate(ValidationRule::IpAddress)
            .placeholder("192.168.0.1"),
    },
    NameRule {
        matchers: &[
            NameMatch::Contains("card_number"),
            NameMatch::Exact("credit_card"),
            NameMatch::Suffix("_credit_card"),
        ],
        kinds: KindFilter::Textual,
        hints: Hints::input(InputType::Text)
            .validate(ValidationRule::CreditCard)
            .sensitive()
            .autocomplete("cc-number")
            .pattern(CARD_PATTERN),
    },
    NameRule {
        matchers: &[
            NameMatch::Contains("postal"),
            NameMatch::Exact("zip"),
            NameMatch::Prefix("zip_"),
            NameMatch::Suffix("_zip"),
        ],
        kinds: KindFilter::Textual,
        hints: Hints::input(InputType::Text)
            .validate(ValidationRule::PostalCode)
            .autocomplete("postal-code"),
    },
    NameRule {
        matchers: &[
            NameMatch::Exact("uuid"),
            NameMatch::Suffix("_uuid"),
            NameMatch::Exact("guid"),
        ],
        kinds: KindFilter::Textual,
        hints: Hints::input(InputType::Text)
            .validate(ValidationRule::Uuid)
            .pattern(UUID_PATTERN),
    },
    NameRule {
        matchers: &[
            NameMatch::Exact("color"),
            NameMatch::Suffix("_color"),
            NameMatch::Exact("colour"),
            NameMatch::Suffix("_colour"),
        ],
        kinds: KindFilter::Textual,
        hints: Hints::input(InputType::Color)
            .placeholder("#000000")
            .pattern(COLOR_PATTERN),
    },
    NameRule {
        matchers: &[
            NameMatch::Exact("description"),
            NameMatch::Suffix("_description"),
            NameMatch::Exact("bio"),
            NameMatch::Suffix("_bio"),
            NameMatch::Exact("notes"),
            NameMatch::Suffix("_notes"),
            NameMatch::Exact("content"),
            NameMatch::Exact("body"),
            NameMatch::Exact("comment"),
            NameMatch::Suffix("_comment"),
            NameMatch::Exact("message"),
        ],
        kinds: KindFilter::Textual,
        hints: Hints::input(InputType::Textarea),
    },
    NameRule {
        matchers: &[
            NameMatch::Exact("file"),
            NameMatch::Suffix("_file"),
            NameMatch::Exact("attachment"),
            NameMatch::Suffix("_attachment"),
            NameMatch::Exact("avatar"),
            NameMatch::Exact("upload"),
        ],
        kinds: KindFilter::Textual,
        hints: Hints::input(InputType::File),
    },
    NameRule {
        matchers: &[NameMatch::Exact("date"), NameMatch::Suffix("_date")],
        kinds: KindFilter::Textual,
        hints: Hints::input(InputType::Date),
    },
    NameRule {
        matchers: &[NameMatch::Exact("time"), NameMatch::Suffix("_time")],
        kinds: KindFilter::Textual,
        hints: Hints::input(InputType::Time),
    },
    NameRule {
        matchers: &[NameMatch::Exact("first_name"), NameMatch::Exact("given_name")],
        kinds: KindFilter::Textual,
        hints: Hints::input(InputType::Text).autocomplete("given-name"),
    },
    NameRule {
        matchers: &[NameMatch::Exact("last_name"), NameMatch::Exact("family_name")],
        kinds: KindFilter::Textual,
        hints: Hints::input(InputType::Text).autocomplete("family-name"),
    },
    NameRule {
        matchers: &[NameMatch::Exact("username"), NameMatch::Exact("user_name")],
        kinds: KindFilter::Textual,
        hints: Hints::input(InputType::Text).autocomplete("username"),
    },
    NameRule {
        matchers: &[NameMatch::Exact("id")],
        kinds: KindFilter::Any,
        hints: Hints::input(InputType::Hidden),
    },
];

/// Kind-based rules. Checked last.
pub const TYPE_RULES: &[TypeRule] = &[
    TypeRule {
        field_type: FieldType::Boolean,
        hints: Hints::input(InputType::Checkbox),
    },
    TypeRule {
        field_type: FieldType::Integer,
        hints: Hints::input(InputType::Number),
    },
    TypeRule {
        field_type: FieldType::Number,
        hints: Hints::input(InputType::Number),
    },
];

/// Names that mark a field as server-managed.
pub const READONLY_RULES: &[NameMatch] = &[
    NameMatch::Suffix("_at"),
    NameMatch::Suffix("_id"),
    NameMatch::Exact("id"),
    NameMatch::Prefix("created"),
    NameMatch::Prefix("updated"),
];

const SELECT: Hints = Hints::input(InputType::Select);
const DEFAULT: Hints = Hints::input(InputType::Text);

/// Infer [`FieldMeta`] for a field. A pure function of its inputs.
pub fn detect(signals: &FieldSignals<'_>) -> FieldMeta {
    let name = to_snake_case(signals.name);

    let format_rule = signals
        .format
        .and_then(|format| FORMAT_RULES.iter().find(|rule| rule.format == format));
    let mut name_rules = NAME_RULES
        .iter()
        .filter(|rule| rule.matches(&name, signals.field_type));

    let hints = format_rule
        .map(|rule| rule.hints)
        .or_else(|| signals.is_enum.then_some(SELECT))
        .or_else(|| name_rules.clone().next().map(|rule| rule.hints))
        .or_else(|| {
            TYPE_RULES
                .iter()
                .find(|rule| rule.field_type == signals.field_type)
                .map(|rule| rule.hints)
        })
        .unwrap_or(DEFAULT);

    let sensitive = hints.sensitive
        || format_rule.is_some_and(|rule| rule.hints.sensitive)
        || name_rules.any(|rule| rule.hints.sensitive);

    let readonly = signals.read_only
        || (!signals.write_only && READONLY_RULES.iter().any(|rule| rule.matches(&name)));

    FieldMeta {
        input_type: hints.input_type,
        validation: hints.validation,
        sensitive,
        readonly,
        placeholder: hints.placeholder.map(str::to_string),
        autocomplete: hints.autocomplete.map(str::to_string),
        pattern: hints.pattern.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect_plain(name: &str, field_type: FieldType, format: Option<FormatType>) -> FieldMeta {
        detect(&FieldSignals::new(name, field_type, format))
    }

    #[test]
    fn test_format_rules_take_precedence() {
        let meta = detect_plain("contact", FieldType::String, Some(FormatType::Email));
        assert_eq!(meta.input_type, InputType::Email);
        assert_eq!(meta.validation, Some(ValidationRule::Email));
        assert_eq!(meta.autocomplete.as_deref(), Some("email"));

        let meta = detect_plain("phone", FieldType::String, Some(FormatType::DateTime));
        assert_eq!(meta.input_type, InputType::DatetimeLocal);
        assert_eq!(meta.validation, None);

        let meta = detect_plain("value", FieldType::String, Some(FormatType::Password));
        assert_eq!(meta.input_type, InputType::Password);
        assert!(meta.sensitive);
    }

    #[test]
    fn test_name_rules() {
        let meta = detect_plain("work_email", FieldType::String, None);
        assert_eq!(meta.input_type, InputType::Email);
        assert_eq!(meta.validation, Some(ValidationRule::Email));

        let meta = detect_plain("refreshToken", FieldType::String, None);
        assert_eq!(meta.input_type, InputType::Password);
        assert!(meta.sensitive);

        let meta = detect_plain("mobilePhone", FieldType::String, None);
        assert_eq!(meta.input_type, InputType::Tel);
        assert_eq!(meta.validation, Some(ValidationRule::Phone));

        let meta = detect_plain("homepage_url", FieldType::String, None);
        assert_eq!(meta.input_type, InputType::Url);

        let meta = detect_plain("bio", FieldType::String, None);
        assert_eq!(meta.input_type, InputType::Textarea);

        let meta = detect_plain("brand_color", FieldType::String, None);
        assert_eq!(meta.input_type, InputType::Color);
        assert_eq!(meta.pattern.as_deref(), Some(COLOR_PATTERN));

        let meta = detect_plain("zip", FieldType::String, None);
        assert_eq!(meta.validation, Some(ValidationRule::PostalCode));
    }

    #[test]
    fn test_name_rules_skip_non_textual_kinds() {
        let meta = detect_plain("email_verified", FieldType::Boolean, None);
        assert_eq!(meta.input_type, InputType::Checkbox);
        assert_eq!(meta.validation, None);

        let meta = detect_plain("phone_count", FieldType::Integer, None);
        assert_eq!(meta.input_type, InputType::Number);
    }

    #[test]
    fn test_type_rules_and_default() {
        assert_eq!(
            detect_plain("active", FieldType::Boolean, None).input_type,
            InputType::Checkbox
        );
        assert_eq!(
            detect_plain("age", FieldType::Integer, None).input_type,
            InputType::Number
        );
        assert_eq!(
            detect_plain("ratio", FieldType::Number, None).input_type,
            InputType::Number
        );

        let meta = detect_plain("title", FieldType::String, None);
        assert_eq!(
            meta,
            FieldMeta {
                input_type: InputType::Text,
                validation: None,
                sensitive: false,
                readonly: false,
                placeholder: None,
                autocomplete: None,
                pattern: None,
            }
        );
    }

    #[test]
    fn test_enum_renders_as_select() {
        let signals = FieldSignals {
            is_enum: true,
            ..FieldSignals::new("color", FieldType::String, None)
        };
        assert_eq!(detect(&signals).input_type, InputType::Select);
    }

    #[test]
    fn test_readonly_rules() {
        for name in ["created_at", "updatedAt", "owner_id", "id", "createdBy"] {
            assert!(
                detect_plain(name, FieldType::String, None).readonly,
                "{name} should be readonly"
            );
        }
        assert!(!detect_plain("name", FieldType::String, None).readonly);
        assert!(!detect_plain("identity", FieldType::String, None).readonly);
    }

    #[test]
    fn test_read_only_flag_always_wins() {
        let signals = FieldSignals {
            read_only: true,
            write_only: true,
            ..FieldSignals::new("name", FieldType::String, None)
        };
        assert!(detect(&signals).readonly);
    }

    #[test]
    fn test_write_only_suppresses_name_readonly() {
        let signals = FieldSignals {
            write_only: true,
            ..FieldSignals::new("owner_id", FieldType::String, None)
        };
        assert!(!detect(&signals).readonly);
    }

    #[test]
    fn test_sensitive_name_with_non_sensitive_format() {
        // The format decides the input, the name still marks it sensitive.
        let meta = detect_plain("access_token", FieldType::String, Some(FormatType::Uuid));
        assert_eq!(meta.input_type, InputType::Text);
        assert_eq!(meta.validation, Some(ValidationRule::Uuid));
        assert!(meta.sensitive);

        let meta = detect_plain("reset_token_url", FieldType::String, Some(FormatType::Url));
        assert_eq!(meta.input_type, InputType::Url);
        assert!(meta.sensitive);

        let meta = detect_plain("profile_url", FieldType::String, Some(FormatType::Url));
        assert!(!meta.sensitive);
    }

    #[test]
    fn test_detection_is_deterministic() {
        let names = ["email", "password", "created_at", "slug", "count", "x"];
        let kinds = [FieldType::String, FieldType::Integer, FieldType::Boolean];
        let formats = [None, Some(FormatType::Email), Some(FormatType::Date)];
        for name in names {
            for kind in kinds {
                for format in formats {
                    assert_eq!(
                        detect_plain(name, kind, format),
                        detect_plain(name, kind, format)
                    );
                }
            }
        }
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(
            serde_json::to_value(InputType::DatetimeLocal).unwrap(),
            serde_json::json!("datetime-local")
        );
        assert_eq!(
            serde_json::to_value(ValidationRule::IpAddress).unwrap(),
            serde_json::json!("ip_address")
        );
        assert_eq!(InputType::DatetimeLocal.to_string(), "datetime-local");
    }
}
