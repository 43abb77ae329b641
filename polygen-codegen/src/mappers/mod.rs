//! Language-specific mappers layered on the unified type system.
//!
//! - [`GoMapper`] - Go structs with pointer optionals and typed enums
//! - [`ProtoMapper`] - Protocol Buffers messages with labels and sanitized names

mod go;
mod proto;

pub use go::{GoEnum, GoEnumValue, GoField, GoMapper, GoStruct};
pub use proto::{
    DEFAULT_RESERVED_SUFFIX, ProtoEnum, ProtoEnumValue, ProtoField, ProtoLabel, ProtoMapper,
    ProtoMessage,
};
