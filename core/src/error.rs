//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};
use std::path::PathBuf;

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// A source file could not be read or did not parse.
    #[from(ignore)]
    #[display("Cannot read or parse {}: {message}", path.display())]
    ReadOrSyntax {
        /// The file that failed.
        path: PathBuf,
        /// What went wrong (IO message or syntax error location).
        message: String,
    },

    /// An input uses a URI scheme that cannot be read locally.
    #[from(ignore)]
    #[display("Unsupported input '{input}': {reason}")]
    UnsupportedInput {
        /// The input as given by the caller.
        input: String,
        /// Why it was rejected (unknown scheme, missing path...).
        reason: String,
    },

    /// No type declaration with this fully qualified name.
    #[from(ignore)]
    #[display("Cannot find class, enum or interface {_0}")]
    NotFound(String),

    /// A required annotation is missing.
    #[from(ignore)]
    #[display("Could not find a {annotation} annotation for {declaration}{}", member.as_ref().map(|m| format!(" and {m}")).unwrap_or_default())]
    AnnotationNotFound {
        /// Fully qualified name of the declaration searched.
        declaration: String,
        /// The field or constructor searched, if the query targeted one.
        member: Option<String>,
        /// The annotation name that was expected.
        annotation: String,
    },

    /// A required annotation is present but carries no value.
    #[from(ignore)]
    #[display("The {annotation} annotation on {declaration} and {member} has no value")]
    AnnotationWithoutValue {
        /// Fully qualified name of the declaration searched.
        declaration: String,
        /// The member carrying the annotation.
        member: String,
        /// The annotation name.
        annotation: String,
    },

    /// Two declarations share a fully qualified name.
    #[from(ignore)]
    #[display("Duplicate declaration {name}: already registered from {existing}, rejected from {incoming}")]
    DuplicateDeclaration {
        /// The clashing fully qualified name.
        name: String,
        /// Origin of the declaration already in the registry.
        existing: String,
        /// Origin of the rejected declaration.
        incoming: String,
    },

    /// Invalid generator configuration.
    #[from(ignore)]
    #[display("Configuration Error: {_0}")]
    Config(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

impl AppError {
    /// Builds a `ReadOrSyntax` error for `path`.
    pub fn read_or_syntax(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        AppError::ReadOrSyntax {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Builds an `UnsupportedInput` error.
    pub fn unsupported_input(input: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::UnsupportedInput {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
