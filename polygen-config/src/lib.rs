//! Configuration for the polygen generator.
//!
//! A `polygen.toml` selects the target languages and carries per-language
//! options:
//!
//! ```toml
//! [generator]
//! targets = ["python", "typescript", "zod", "go", "proto"]
//!
//! [go]
//! package = "client"
//!
//! [proto]
//! package = "api.v1"
//! reserved_suffix = "_field"
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod validate;

pub use config::{Config, DEFAULT_GO_PACKAGE, DEFAULT_RESERVED_SUFFIX, GoConfig, ProtoConfig};
pub use error::{Error, Result, SourceContext};
pub use file::{DEFAULT_CONFIG_FILE, PolygenToml};
