//! Core types and the Unified Type System for the polygen code generator.
//!
//! This crate provides the schema kind enumerations, the per-language base
//! type tables, and the naming utilities shared by every generator.

mod imports;
pub mod mappers;
pub mod naming;
mod type_mapper;
mod type_ref;
mod type_system;
mod types;

pub use imports::ImportCollector;
pub use mappers::mapper_for;
// String utilities
pub use naming::{
    header_to_param_name, ref_target_name, split_words, to_camel_case, to_kebab_case,
    to_pascal_case, to_screaming_snake_case, to_snake_case,
};
pub use type_mapper::TypeMapper;
pub use type_ref::TypeRef;
pub use type_system::{LanguageTypes, TypeSystem};
pub use types::{FieldType, FormatType, Language};
