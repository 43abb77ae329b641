//! Language-specific base type tables.

mod go;
mod proto;
mod python;
mod typescript;
mod zod;

pub use go::GoTypeMapper;
pub use proto::{ProtoTypeMapper, STRUCT_IMPORT, TIMESTAMP_IMPORT};
pub use python::PythonTypeMapper;
pub use typescript::TypeScriptTypeMapper;
pub use zod::ZodTypeMapper;

use crate::{TypeMapper, types::Language};

/// Get the base type mapper for a language.
pub fn mapper_for(language: Language) -> &'static dyn TypeMapper {
    match language {
        Language::Python => &PythonTypeMapper,
        Language::TypeScript => &TypeScriptTypeMapper,
        Language::Zod => &ZodTypeMapper,
        Language::Go => &GoTypeMapper,
        Language::Proto => &ProtoTypeMapper,
    }
}
