//! Language-agnostic type references.

use crate::types::{FieldType, FormatType};

/// A language-agnostic type reference.
///
/// Types are represented semantically and rendered per target language by a
/// [`TypeMapper`](crate::TypeMapper).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A scalar or structural kind with an optional format.
    Scalar {
        field_type: FieldType,
        format: Option<FormatType>,
    },
    /// A named generated type (model or enum).
    Named(String),
    /// A homogeneous collection.
    Array(Box<TypeRef>),
}

impl TypeRef {
    /// Create a scalar type reference.
    ///
    /// An array kind without item information becomes an array of `any`, so
    /// every language renders it as a collection.
    pub fn scalar(field_type: FieldType, format: Option<FormatType>) -> Self {
        match field_type {
            FieldType::Array => Self::array(Self::any()),
            _ => Self::Scalar { field_type, format },
        }
    }

    /// Create a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Create an array type reference.
    pub fn array(inner: TypeRef) -> Self {
        Self::Array(Box::new(inner))
    }

    /// Convenience: the universal fallback type.
    pub fn any() -> Self {
        Self::Scalar {
            field_type: FieldType::Any,
            format: None,
        }
    }

    /// Check if this type is a collection.
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Check if this type refers to a generated type.
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    /// Get the element type of an array.
    pub fn inner_type(&self) -> Option<&TypeRef> {
        match self {
            Self::Array(inner) => Some(inner),
            _ => None,
        }
    }
}
