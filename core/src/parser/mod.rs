#![deny(missing_docs)]

//! # Parser Module
//!
//! Turns source files into [`TypeDeclaration`]s.
//!
//! The work is split across two seams so the grammar can be swapped without
//! touching the pipeline:
//! - [`SourceParser`] turns source text into a walkable tree (or a syntax error).
//! - [`DeclarationWalker`] reduces that tree into type declarations.
//!
//! [`ParseAdapter`] glues both to the file system. The Java implementation is
//! backed by `tree-sitter-java`.

pub mod adapter;
pub mod annotations;
pub mod extractors;
pub mod models;
pub mod tree;

use crate::error::AppResult;
use std::path::Path;

pub use adapter::{FileParser, ParseAdapter};
pub use annotations::extract_annotations;
pub use extractors::JavaDeclarationWalker;
pub use models::{
    Annotation, Constructor, DeclarationKind, Field, Method, Parameter, TypeDeclaration,
};
pub use tree::{JavaParser, JavaSyntaxTree};

/// Turns source text into a syntax tree.
pub trait SourceParser {
    /// The tree type produced by this parser.
    type Tree;

    /// Parses `source`, read from `path`.
    ///
    /// Fails with [`AppError::ReadOrSyntax`](crate::error::AppError::ReadOrSyntax)
    /// if the text does not parse; `path` is only used for diagnostics.
    fn parse(&self, source: String, path: &Path) -> AppResult<Self::Tree>;
}

/// Reduces a syntax tree into the type declarations it contains.
pub trait DeclarationWalker<T> {
    /// Returns every class, enum and interface found in `tree`, in source order.
    fn walk(&self, tree: &T) -> Vec<TypeDeclaration>;
}
