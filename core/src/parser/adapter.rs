//! # Parse Adapter
//!
//! Connects a [`SourceParser`] and a [`DeclarationWalker`] to files on disk.

use crate::error::{AppError, AppResult};
use crate::parser::extractors::JavaDeclarationWalker;
use crate::parser::models::TypeDeclaration;
use crate::parser::tree::JavaParser;
use crate::parser::{DeclarationWalker, SourceParser};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Interface for turning one file into its type declarations.
///
/// Abstracted so the pipeline can be driven without a real grammar in tests.
pub trait FileParser {
    /// Parses the file at `path`.
    ///
    /// A file without declarations yields an empty list, not an error.
    fn parse_file(&self, path: &Path) -> AppResult<Vec<TypeDeclaration>>;
}

/// Reads a file, parses it and walks the resulting tree.
#[derive(Debug, Default, Clone)]
pub struct ParseAdapter<P, W> {
    parser: P,
    walker: W,
}

impl ParseAdapter<JavaParser, JavaDeclarationWalker> {
    /// The Java front end.
    pub fn java() -> Self {
        Self::new(JavaParser::new(), JavaDeclarationWalker::new())
    }
}

impl<P, W> ParseAdapter<P, W> {
    /// Combines a parser and a walker.
    pub fn new(parser: P, walker: W) -> Self {
        Self { parser, walker }
    }
}

impl<P, W> FileParser for ParseAdapter<P, W>
where
    P: SourceParser,
    W: DeclarationWalker<P::Tree>,
{
    fn parse_file(&self, path: &Path) -> AppResult<Vec<TypeDeclaration>> {
        let source =
            fs::read_to_string(path).map_err(|e| AppError::read_or_syntax(path, e.to_string()))?;

        let tree = self.parser.parse(source, path)?;
        let mut declarations = self.walker.walk(&tree);
        for decl in &mut declarations {
            decl.source_path = Some(path.to_path_buf());
        }

        debug!(
            path = %path.display(),
            count = declarations.len(),
            "extracted type declarations"
        );
        Ok(declarations)
    }
}
