//! Parameter, body and operation contexts.

use polygen_core::{FieldType, FormatType, LanguageTypes};
use serde::Serialize;
use serde_json::Value;

use crate::context::Record;

/// Where a parameter is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Path,
    Query,
    Header,
    Cookie,
}

impl ParamLocation {
    /// Every location, in canonical signature order.
    pub const ALL: [ParamLocation; 4] = [
        ParamLocation::Path,
        ParamLocation::Query,
        ParamLocation::Header,
        ParamLocation::Cookie,
    ];

    /// Get the location name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamLocation::Path => "path",
            ParamLocation::Query => "query",
            ParamLocation::Header => "header",
            ParamLocation::Cookie => "cookie",
        }
    }

    /// Parse a declared location.
    pub fn parse(location: &str) -> Option<Self> {
        match location.trim().to_ascii_lowercase().as_str() {
            "path" => Some(ParamLocation::Path),
            "query" => Some(ParamLocation::Query),
            "header" => Some(ParamLocation::Header),
            "cookie" => Some(ParamLocation::Cookie),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamContext {
    /// snake_case identifier (Python).
    pub name: String,
    /// Name as sent on the wire.
    pub original_name: String,
    /// camelCase identifier (TypeScript).
    pub typescript_name: String,
    /// Exported field name in the Go options struct.
    pub go_name: String,
    pub location: ParamLocation,
    pub field_type: FieldType,
    pub format_type: Option<FormatType>,
    #[serde(flatten)]
    pub types: LanguageTypes,
    pub required: bool,
    pub nullable: bool,
    pub has_default: bool,
    pub default: Option<Value>,
    pub enum_values: Vec<Value>,
    pub pattern: Option<String>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub is_array: bool,
    pub item_type: Option<FieldType>,
    /// Element type per language, for array parameters.
    pub item_types: Option<LanguageTypes>,
    pub description: Option<String>,
    pub deprecated: bool,
}

impl Record for ParamContext {}

/// One request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodyContext {
    /// Generated name of the body model.
    pub model: String,
    pub content_type: String,
    pub required: bool,
    pub description: Option<String>,
    pub is_json: bool,
    pub is_multipart: bool,
    pub is_binary: bool,
    pub is_form_urlencoded: bool,
}

impl Record for BodyContext {}

impl BodyContext {
    /// Default media type when a body does not declare one.
    pub const DEFAULT_CONTENT_TYPE: &'static str = "application/json";

    /// Create a body context, classifying its media type.
    pub fn new(
        model: impl Into<String>,
        content_type: impl Into<String>,
        required: bool,
        description: Option<String>,
    ) -> Self {
        let content_type = content_type.into();
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        let is_json = essence == "application/json" || essence.ends_with("+json");
        let is_multipart = essence.starts_with("multipart/");
        let is_form_urlencoded = essence == "application/x-www-form-urlencoded";
        let is_binary = !is_json
            && !is_multipart
            && !is_form_urlencoded
            && !essence.starts_with("text/")
            && !essence.ends_with("+xml")
            && essence != "application/xml";

        Self {
            model: model.into(),
            content_type,
            required,
            description,
            is_json,
            is_multipart,
            is_binary,
            is_form_urlencoded,
        }
    }
}

/// All inputs of one operation, grouped by location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationParamsContext {
    pub operation_id: String,
    pub path_params: Vec<ParamContext>,
    pub query_params: Vec<ParamContext>,
    pub header_params: Vec<ParamContext>,
    pub cookie_params: Vec<ParamContext>,
    /// Full (create/replace) body.
    pub body: Option<BodyContext>,
    /// Partial-update body.
    pub patch_body: Option<BodyContext>,
    pub has_path_params: bool,
    pub has_query_params: bool,
    pub has_header_params: bool,
    pub has_cookie_params: bool,
    pub has_body: bool,
    pub has_patch_body: bool,
    pub has_params: bool,
    /// Path, query, header and cookie parameters, required ones first.
    pub all_params_sorted: Vec<ParamContext>,
}

impl Record for OperationParamsContext {}

impl OperationParamsContext {
    /// Assemble the context from grouped parameters and bodies.
    pub fn new(
        operation_id: impl Into<String>,
        params: Vec<ParamContext>,
        body: Option<BodyContext>,
        patch_body: Option<BodyContext>,
    ) -> Self {
        let group = |location: ParamLocation| -> Vec<ParamContext> {
            params
                .iter()
                .filter(|param| param.location == location)
                .cloned()
                .collect()
        };
        let path_params = group(ParamLocation::Path);
        let query_params = group(ParamLocation::Query);
        let header_params = group(ParamLocation::Header);
        let cookie_params = group(ParamLocation::Cookie);

        let (required, optional): (Vec<ParamContext>, Vec<ParamContext>) = path_params
            .iter()
            .chain(&query_params)
            .chain(&header_params)
            .chain(&cookie_params)
            .cloned()
            .partition(|param| param.required);
        let all_params_sorted: Vec<ParamContext> = required.into_iter().chain(optional).collect();

        Self {
            operation_id: operation_id.into(),
            has_path_params: !path_params.is_empty(),
            has_query_params: !query_params.is_empty(),
            has_header_params: !header_params.is_empty(),
            has_cookie_params: !cookie_params.is_empty(),
            has_body: body.is_some(),
            has_patch_body: patch_body.is_some(),
            has_params: !all_params_sorted.is_empty(),
            path_params,
            query_params,
            header_params,
            cookie_params,
            body,
            patch_body,
            all_params_sorted,
        }
    }

    /// The body passed as the `data` argument: the full body if declared,
    /// otherwise the patch body.
    pub fn signature_body(&self) -> Option<SignatureBody<'_>> {
        match (&self.body, &self.patch_body) {
            (Some(body), _) => Some(SignatureBody {
                body,
                is_patch: false,
            }),
            (None, Some(body)) => Some(SignatureBody {
                body,
                is_patch: true,
            }),
            (None, None) => None,
        }
    }

    /// Non-path parameters in signature order.
    pub fn non_path_params(&self) -> impl Iterator<Item = &ParamContext> {
        self.all_params_sorted
            .iter()
            .filter(|param| param.location != ParamLocation::Path)
    }

    /// Path parameters in signature order.
    pub fn sorted_path_params(&self) -> impl Iterator<Item = &ParamContext> {
        self.all_params_sorted
            .iter()
            .filter(|param| param.location == ParamLocation::Path)
    }
}

/// The body selected for a signature.
#[derive(Debug, Clone, Copy)]
pub struct SignatureBody<'a> {
    pub body: &'a BodyContext,
    pub is_patch: bool,
}

impl SignatureBody<'_> {
    /// Patch bodies are always optional in signatures.
    pub fn is_required(&self) -> bool {
        !self.is_patch && self.body.required
    }
}
