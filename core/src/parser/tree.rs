//! # Java Syntax Trees
//!
//! `tree-sitter` backed implementation of [`SourceParser`] for Java sources.

use crate::error::{AppError, AppResult};
use crate::parser::SourceParser;
use std::path::Path;
use tree_sitter::{Node, Parser, Tree};

/// A parsed Java compilation unit together with the text it was parsed from.
pub struct JavaSyntaxTree {
    tree: Tree,
    source: String,
}

impl JavaSyntaxTree {
    /// The root `program` node.
    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// The original source text.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Parser for Java compilation units.
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaParser;

impl JavaParser {
    /// Creates a Java parser.
    pub fn new() -> Self {
        Self
    }
}

impl SourceParser for JavaParser {
    type Tree = JavaSyntaxTree;

    fn parse(&self, source: String, path: &Path) -> AppResult<JavaSyntaxTree> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::language())
            .map_err(|e| AppError::General(format!("Failed to load Java grammar: {}", e)))?;

        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| AppError::read_or_syntax(path, "parser produced no tree"))?;

        let root = tree.root_node();
        if root.has_error() {
            let message = first_error(root)
                .map(|node| describe_error(&node))
                .unwrap_or_else(|| "syntax error".to_string());
            return Err(AppError::read_or_syntax(path, message));
        }

        Ok(JavaSyntaxTree { tree, source })
    }
}

/// Depth-first search for the first `ERROR` or missing node.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn describe_error(node: &Node) -> String {
    let pos = node.start_position();
    if node.is_missing() {
        format!(
            "syntax error at line {}, column {}: missing `{}`",
            pos.row + 1,
            pos.column + 1,
            node.kind()
        )
    } else {
        format!("syntax error at line {}, column {}", pos.row + 1, pos.column + 1)
    }
}
