//! Language-specific naming rules.

mod naming;

pub use naming::{
    GO_NAMING, NamingConvention, PROTO_NAMING, PYTHON_NAMING, TYPESCRIPT_NAMING, naming_for,
    to_go_exported,
};
