#![deny(missing_docs)]

//! # Clientgen Core
//!
//! Source-analysis front end of the client library generator: finds Java
//! sources describing data types, parses them and assembles the model that
//! generators query.

/// Generator configuration.
pub mod config;

/// Shared error types.
pub mod error;

/// Package path filter and exclusion list.
pub mod filter;

/// Input path / URI classification.
pub mod input;

/// Identifier case conversions.
pub mod naming;

/// Source parsing into type declarations.
pub mod parser;

/// Discovery → parse → registry driver.
pub mod pipeline;

/// Annotation lookups over the model.
pub mod query;

/// Declarations collected during a run.
pub mod registry;

/// Recursive source discovery.
pub mod scanner;

pub use config::GeneratorConfig;
pub use error::{AppError, AppResult};
pub use filter::{is_excluded, PathFilter};
pub use input::InputLocation;
pub use naming::{HeckNaming, NamingConvention};
pub use parser::{
    Annotation, Constructor, DeclarationKind, DeclarationWalker, Field, FileParser,
    JavaDeclarationWalker, JavaParser, Method, Parameter, ParseAdapter, SourceParser,
    TypeDeclaration,
};
pub use pipeline::Pipeline;
pub use query::{find_canonical_constructor, find_serialization_name};
pub use registry::ModelRegistry;
pub use scanner::{scan, scan_with};
