//! Per-language call signatures.

use std::borrow::Cow;

use polygen_core::{Language, to_pascal_case};
use serde::Serialize;

use super::{BodyContext, OperationParamsContext, ParamContext, ParamLocation};
use crate::{context::Record, language::GO_NAMING};

/// Argument name of the request body in Python and TypeScript signatures.
const DATA_ARG: &str = "data";

/// A language-specific call signature plus the grouped records behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignatureContext {
    pub language: Language,
    /// Ordered argument fragments.
    pub params: Vec<String>,
    /// Fragments joined with `", "`.
    pub signature: String,
    pub path_params: Vec<ParamContext>,
    pub query_params: Vec<ParamContext>,
    pub header_params: Vec<ParamContext>,
    pub cookie_params: Vec<ParamContext>,
    pub body: Option<BodyContext>,
    pub is_patch: bool,
    /// Options struct carrying non-path parameters (Go only).
    pub params_struct: Option<GoParamsStruct>,
}

impl Record for SignatureContext {}

/// A Go options struct for an operation's non-path parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoParamsStruct {
    pub name: String,
    pub fields: Vec<GoParamsField>,
}

/// One field of a [`GoParamsStruct`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoParamsField {
    pub name: String,
    pub go_type: String,
    pub location: ParamLocation,
    pub original_name: String,
    pub required: bool,
    /// Struct tag contents, without backticks.
    pub tag: String,
    pub description: Option<String>,
}

impl GoParamsStruct {
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

impl OperationParamsContext {
    /// Python signature: positional path parameters and body, then
    /// keyword-only query/header/cookie parameters.
    pub fn for_python(&self) -> SignatureContext {
        let body = self.signature_body();
        let has_body = body.is_some();
        let mut params: Vec<String> = self
            .sorted_path_params()
            .map(|p| format!("{}: {}", body_safe_name(&p.name, has_body), p.types.python))
            .collect();

        if let Some(body) = body {
            if body.is_required() {
                params.push(format!("{}: {}", DATA_ARG, body.body.model));
            } else {
                params.push(format!("{}: Optional[{}] = None", DATA_ARG, body.body.model));
            }
        }

        let mut rest = self.non_path_params().peekable();
        if rest.peek().is_some() {
            params.push("*".to_string());
        }
        for param in rest {
            let name = body_safe_name(&param.name, has_body);
            if param.required {
                params.push(format!("{}: {}", name, param.types.python));
            } else {
                params.push(format!("{}: {} = None", name, param.types.python));
            }
        }

        self.signature(Language::Python, params, None)
    }

    /// TypeScript signature: same grouping as Python, with `?` for optional
    /// parameters.
    pub fn for_typescript(&self) -> SignatureContext {
        let body = self.signature_body();
        let has_body = body.is_some();
        let mut params: Vec<String> = self
            .sorted_path_params()
            .map(|p| {
                let name = body_safe_name(&p.typescript_name, has_body);
                format!("{}: {}", name, p.types.typescript)
            })
            .collect();

        let required_follows = self.non_path_params().any(|p| p.required);
        if let Some(body) = body {
            let model = &body.body.model;
            if body.is_required() {
                params.push(format!("{}: {}", DATA_ARG, model));
            } else if required_follows {
                params.push(format!("{}: {} | undefined", DATA_ARG, model));
            } else {
                params.push(format!("{}?: {}", DATA_ARG, model));
            }
        }

        for param in self.non_path_params() {
            let marker = if param.required { "" } else { "?" };
            params.push(format!(
                "{}{}: {}",
                body_safe_name(&param.typescript_name, has_body),
                marker,
                param.types.typescript
            ));
        }

        self.signature(Language::TypeScript, params, None)
    }

    /// Go signature: a context, path parameters by value, a body pointer and
    /// one options struct pointer for everything else.
    pub fn for_go(&self) -> SignatureContext {
        let mut params = vec!["ctx context.Context".to_string()];
        params.extend(
            self.sorted_path_params()
                .map(|p| format!("{} {}", GO_NAMING.param_name(&p.original_name), p.types.go)),
        );

        if let Some(body) = self.signature_body() {
            params.push(format!("body *{}", body.body.model));
        }

        let params_struct = self.go_params_struct();
        if let Some(params_struct) = &params_struct {
            params.push(format!("params *{}", params_struct.name));
        }

        self.signature(Language::Go, params, params_struct)
    }

    /// Options struct for non-path parameters, if any exist.
    pub fn go_params_struct(&self) -> Option<GoParamsStruct> {
        let fields: Vec<GoParamsField> = self
            .non_path_params()
            .map(|param| GoParamsField {
                name: param.go_name.clone(),
                go_type: param.types.go.clone(),
                location: param.location,
                original_name: param.original_name.clone(),
                required: param.required,
                tag: go_param_tag(param),
                description: param.description.clone(),
            })
            .collect();

        (!fields.is_empty()).then(|| GoParamsStruct {
            name: format!("{}Params", to_pascal_case(&self.operation_id)),
            fields,
        })
    }

    fn signature(
        &self,
        language: Language,
        params: Vec<String>,
        params_struct: Option<GoParamsStruct>,
    ) -> SignatureContext {
        let body = self.signature_body();
        SignatureContext {
            language,
            signature: params.join(", "),
            params,
            path_params: self.path_params.clone(),
            query_params: self.query_params.clone(),
            header_params: self.header_params.clone(),
            cookie_params: self.cookie_params.clone(),
            body: body.map(|b| b.body.clone()),
            is_patch: body.is_some_and(|b| b.is_patch),
            params_struct,
        }
    }
}

/// Parameter name that cannot collide with the body argument.
fn body_safe_name(name: &str, has_body: bool) -> Cow<'_, str> {
    if has_body && name == DATA_ARG {
        Cow::Owned(format!("{}_", name))
    } else {
        Cow::Borrowed(name)
    }
}

fn go_param_tag(param: &ParamContext) -> String {
    let key = match param.location {
        ParamLocation::Query => "url",
        ParamLocation::Header => "header",
        ParamLocation::Cookie => "cookie",
        ParamLocation::Path => "path",
    };
    let omit = if param.required { "" } else { ",omitempty" };
    format!("{}:\"{}{}\"", key, param.original_name, omit)
}
